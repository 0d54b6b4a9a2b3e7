use contracts::domain::payment::{CollectorType, Payment, PaymentChannel, PaymentStatus};
use contracts::shared::query::{DateRangeQuery, PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::payments::api::{fetch_payments, PaymentListQuery};
use crate::shared::components::ui::Badge;
use crate::shared::components::{DateRangePicker, ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::{days_back_iso, format_datetime, format_money, today_iso};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::flash::use_flash;
use crate::shared::icons::icon;

fn status_variant(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Confirmed => "success",
        PaymentStatus::Pending => "warning",
        PaymentStatus::Failed => "error",
        PaymentStatus::Reversed => "neutral",
    }
}

struct PaymentCsvRow(Payment);

impl CsvExportable for PaymentCsvRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Receipt",
            "Account",
            "Customer",
            "Amount",
            "Collector type",
            "Collected by",
            "Channel",
            "Status",
            "Paid at",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.0.receipt_number.clone(),
            self.0.account_number.clone(),
            self.0.customer_name.clone(),
            format!("{:.2}", self.0.amount),
            self.0.collector_type.label().to_string(),
            self.0.collected_by.clone(),
            self.0.channel.label().to_string(),
            self.0.status.as_str().to_string(),
            format_datetime(&self.0.paid_at),
        ]
    }
}

#[component]
pub fn PaymentList() -> impl IntoView {
    let flash = use_flash();
    let (data, set_data) = signal(PagedResponse::<Payment>::default());
    let (error, set_error) = signal(None::<String>);
    let range = RwSignal::new(DateRangeQuery::new(days_back_iso(30), today_iso()));
    let page = RwSignal::new(PageQuery::default());
    let collector_filter = RwSignal::new(String::new());
    let channel_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    let load = move || {
        let collector = collector_filter.get_untracked();
        let channel = channel_filter.get_untracked();
        let status = status_filter.get_untracked();
        let query = PaymentListQuery::new(
            &range.get_untracked(),
            &page.get_untracked(),
            (!collector.is_empty()).then_some(collector),
            (!channel.is_empty()).then_some(channel),
            (!status.is_empty()).then_some(status),
        );
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_payments(&query).await {
                Ok(resp) => {
                    set_data.set(resp);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    load();

    let on_export = move |_| {
        let rows: Vec<PaymentCsvRow> = data
            .get_untracked()
            .items
            .into_iter()
            .map(PaymentCsvRow)
            .collect();
        match export_to_csv(&rows, "payments.csv") {
            Ok(()) => flash.success("Payments exported"),
            Err(e) => flash.error(e),
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Payments" subtitle="Collections across all channels">
                <button class="button button--secondary" on:click=on_export>
                    {icon("export")}
                    "Export CSV"
                </button>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filters">
                <DateRangePicker
                    date_from=Signal::derive(move || range.get().start_date_utc)
                    date_to=Signal::derive(move || range.get().end_date_utc)
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        range.set(DateRangeQuery::new(from, to));
                        page.update(|p| p.page_number = 1);
                        load();
                    })
                />
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        collector_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All collectors"</option>
                    {CollectorType::ALL.iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        channel_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All channels"</option>
                    {PaymentChannel::ALL.iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        status_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All statuses"</option>
                    {PaymentStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str()>{s.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>

            <ErrorBanner
                message=Signal::derive(move || error.get())
                on_retry=Callback::new(move |_| load())
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Receipt"</th>
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Collector"</th>
                            <th class="table__header-cell">"Channel"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Paid at"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|p| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{p.receipt_number}</td>
                                    <td class="table__cell">{p.account_number}</td>
                                    <td class="table__cell">{p.customer_name}</td>
                                    <td class="table__cell">{format_money(p.amount)}</td>
                                    <td class="table__cell">{format!("{} ({})", p.collected_by, p.collector_type.label())}</td>
                                    <td class="table__cell">{p.channel.label()}</td>
                                    <td class="table__cell">
                                        <Badge variant=status_variant(p.status)>
                                            {p.status.as_str()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">{format_datetime(&p.paid_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || data.get().page_number as u32)
                total_pages=Signal::derive(move || data.get().total_pages() as u32)
                total_count=Signal::derive(move || data.get().total_count as u32)
                page_size=Signal::derive(move || page.get().page_size as u32)
                on_page_change=Callback::new(move |p: u32| {
                    page.update(|q| q.page_number = p as usize);
                    load();
                })
                on_page_size_change=Callback::new(move |size: u32| {
                    page.update(|q| {
                        q.page_size = size as usize;
                        q.page_number = 1;
                    });
                    load();
                })
            />
        </div>
    }
}
