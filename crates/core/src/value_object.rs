//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// A validated invoice line item is a value object; the invoice record that
/// gets an id assigned from it is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
