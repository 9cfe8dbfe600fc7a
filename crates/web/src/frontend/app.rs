//! Leptos invoice log page: entry form, dashboard cards, invoice table.

use leptos::*;

use bizinvoice_core::InvoiceId;
use bizinvoice_infra::{BrowserStorage, InvoiceLog, InvoiceStore};
use bizinvoice_invoicing::{DashboardSummary, InvoiceDraft, InvoiceRecord, preview_total};

use crate::config::{AppConfig, SETTINGS_KEY};
use crate::view::{DashboardView, InvoiceTable};

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let (records, set_records) = create_signal(Vec::<InvoiceRecord>::new());
    let (summary, set_summary) = create_signal(DashboardSummary::default());

    let storage = match BrowserStorage::local() {
        Ok(storage) => storage,
        Err(err) => {
            tracing::error!(error = %err, "local storage unavailable");
            return view! {
                <p class="error">"Invoices cannot be saved: browser storage is unavailable."</p>
            }
            .into_view();
        }
    };

    let config = AppConfig::from_storage(&storage, SETTINGS_KEY).unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring app settings");
        AppConfig::default()
    });

    let log = InvoiceLog::new(InvoiceStore::with_key(storage, config.storage_key.clone()))
        .with_hook(move |r: &[InvoiceRecord], s: &DashboardSummary| {
            set_records.set(r.to_vec());
            set_summary.set(*s);
        });
    let log = store_value(log);
    let currency = store_value(config.currency);

    log.with_value(|log| log.refresh());

    let customer_name = create_rw_signal(String::new());
    let product_service = create_rw_signal(String::new());
    let quantity = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = InvoiceDraft::new(
            customer_name.get_untracked(),
            product_service.get_untracked(),
            quantity.get_untracked(),
            price.get_untracked(),
        );

        match log.with_value(|log| log.submit(&draft)) {
            Ok(_) => {
                customer_name.set(String::new());
                product_service.set(String::new());
                quantity.set(String::new());
                price.set(String::new());
            }
            Err(err) => alert(&err.user_message()),
        }
    };

    let on_delete = move |id: InvoiceId| {
        if let Err(err) = log.with_value(|log| log.delete(&id)) {
            alert(&err.user_message());
        }
    };

    let preview = move || {
        let total = preview_total(&quantity.get(), &price.get());
        currency.with_value(|c| c.format(total))
    };

    let dashboard = move || currency.with_value(|c| DashboardView::build(&summary.get(), c));

    view! {
        <div class="app">
            <header>
                <h1>"BizInvoice"</h1>
            </header>

            <main>
                <section class="dashboard">
                    <div class="card">
                        <span class="label">"Total Revenue"</span>
                        <span class="value">{move || dashboard().total_revenue}</span>
                    </div>
                    <div class="card">
                        <span class="label">"Invoices"</span>
                        <span class="value">{move || dashboard().invoice_count}</span>
                    </div>
                    <div class="card">
                        <span class="label">"Today's Sales"</span>
                        <span class="value">{move || dashboard().today_sales}</span>
                    </div>
                    <div class="card">
                        <span class="label">"Average Invoice"</span>
                        <span class="value">{move || dashboard().average_invoice}</span>
                    </div>
                </section>

                <form class="invoice-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="customerName">"Customer Name"</label>
                        <input
                            type="text"
                            id="customerName"
                            prop:value=move || customer_name.get()
                            on:input=move |ev| customer_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="productService">"Product / Service"</label>
                        <input
                            type="text"
                            id="productService"
                            prop:value=move || product_service.get()
                            on:input=move |ev| product_service.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="quantity">"Quantity"</label>
                        <input
                            type="number"
                            id="quantity"
                            min="1"
                            prop:value=move || quantity.get()
                            on:input=move |ev| quantity.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="price">"Price"</label>
                        <input
                            type="number"
                            id="price"
                            min="0"
                            step="0.01"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="totalAmount">"Total"</label>
                        <input type="text" id="totalAmount" readonly prop:value=preview/>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">"Add Invoice"</button>
                    </div>
                </form>

                <section class="invoices">
                    <h2>"Invoices"</h2>
                    {move || {
                        let table = currency.with_value(|c| InvoiceTable::build(&records.get(), c));
                        if table.is_empty() {
                            view! {
                                <p class="empty-state visible">"No invoices yet. Add your first invoice above."</p>
                            }
                            .into_view()
                        } else {
                            view! {
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"#"</th>
                                            <th>"Date"</th>
                                            <th>"Customer"</th>
                                            <th>"Product / Service"</th>
                                            <th>"Qty"</th>
                                            <th>"Price"</th>
                                            <th>"Total"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {table
                                            .rows
                                            .into_iter()
                                            .map(|row| {
                                                let id = row.id.clone();
                                                view! {
                                                    <tr>
                                                        <td>{row.index}</td>
                                                        <td>{row.date}</td>
                                                        <td>{row.customer_name}</td>
                                                        <td>{row.product_service}</td>
                                                        <td>{row.quantity}</td>
                                                        <td>{row.price}</td>
                                                        <td class="total-cell">{row.total}</td>
                                                        <td>
                                                            <button
                                                                type="button"
                                                                class="btn btn-danger"
                                                                on:click=move |_| on_delete(id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_view()
                        }
                    }}
                </section>
            </main>
        </div>
    }
    .into_view()
}
