//! Browser devtools console as a tracing writer.
//!
//! wasm32 has no stdout that anyone reads, so formatted events are forwarded
//! to `console.error/warn/info/debug` instead, one call per event.

use std::io;

use ::tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Which `console.*` function an event is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }
}

/// `MakeWriter` that hands each formatted event to `sink`.
#[derive(Debug, Clone)]
pub struct ConsoleWriter<F> {
    sink: F,
}

impl<F> ConsoleWriter<F>
where
    F: Fn(ConsoleMethod, &str) + Clone,
{
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

#[cfg(target_arch = "wasm32")]
impl ConsoleWriter<fn(ConsoleMethod, &str)> {
    /// Writer targeting the page's `console` object.
    pub fn browser() -> Self {
        Self::new(emit_to_browser as fn(ConsoleMethod, &str))
    }
}

#[cfg(target_arch = "wasm32")]
fn emit_to_browser(method: ConsoleMethod, text: &str) {
    let text = wasm_bindgen::JsValue::from_str(text);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&text),
        ConsoleMethod::Warn => web_sys::console::warn_1(&text),
        ConsoleMethod::Info => web_sys::console::info_1(&text),
        ConsoleMethod::Debug => web_sys::console::debug_1(&text),
    }
}

impl<'a, F> MakeWriter<'a> for ConsoleWriter<F>
where
    F: Fn(ConsoleMethod, &str) + Clone + 'a,
{
    type Writer = ConsoleLine<F>;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(ConsoleMethod::Info, self.sink.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(ConsoleMethod::for_level(meta.level()), self.sink.clone())
    }
}

/// Buffers one event and emits it when dropped.
pub struct ConsoleLine<F>
where
    F: Fn(ConsoleMethod, &str),
{
    method: ConsoleMethod,
    buf: Vec<u8>,
    sink: F,
}

impl<F> ConsoleLine<F>
where
    F: Fn(ConsoleMethod, &str),
{
    fn new(method: ConsoleMethod, sink: F) -> Self {
        Self {
            method,
            buf: Vec::new(),
            sink,
        }
    }
}

impl<F> io::Write for ConsoleLine<F>
where
    F: Fn(ConsoleMethod, &str),
{
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<F> Drop for ConsoleLine<F>
where
    F: Fn(ConsoleMethod, &str),
{
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        (self.sink)(self.method, text.trim_end_matches('\n'));
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    type Captured = Arc<Mutex<Vec<(ConsoleMethod, String)>>>;

    fn capturing_writer() -> (
        ConsoleWriter<impl Fn(ConsoleMethod, &str) + Clone + Send + Sync + 'static>,
        Captured,
    ) {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        let writer = ConsoleWriter::new(move |method: ConsoleMethod, text: &str| {
            sink.lock().unwrap().push((method, text.to_string()));
        });
        (writer, captured)
    }

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(&Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn partial_writes_are_emitted_once_without_newline() {
        let (writer, captured) = capturing_writer();
        {
            let mut line = writer.make_writer();
            line.write_all(b"invoice ").unwrap();
            line.write_all(b"appended\n").unwrap();
        }
        {
            let _unused = writer.make_writer();
        }
        assert_eq!(
            *captured.lock().unwrap(),
            vec![(ConsoleMethod::Info, "invoice appended".to_string())]
        );
    }

    #[test]
    fn subscriber_events_reach_the_matching_method() {
        let (writer, captured) = capturing_writer();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .with_max_level(Level::DEBUG)
            .finish();

        ::tracing::subscriber::with_default(subscriber, || {
            ::tracing::warn!("stored invoices are not valid JSON");
            ::tracing::error!("failed to write invoices");
        });

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].0, ConsoleMethod::Warn);
        assert!(captured[0].1.contains("stored invoices are not valid JSON"));
        assert_eq!(captured[1].0, ConsoleMethod::Error);
        assert!(captured[1].1.contains("failed to write invoices"));
    }
}
