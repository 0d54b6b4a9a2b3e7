use contracts::domain::payment::PaymentStatus;
use contracts::domain::vendor::TopUp;
use contracts::shared::query::{DateRangeQuery, PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::vendors::api::{fetch_topups, fetch_vendors, TopUpListQuery};
use crate::shared::components::ui::Badge;
use crate::shared::components::{
    DateRangePicker, ErrorBanner, PageHeader, PaginationControls, PollingControls,
};
use crate::shared::date_utils::{days_back_iso, format_datetime, format_money, today_iso};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::flash::use_flash;
use crate::shared::icons::icon;
use crate::shared::polling::{use_polling, PollingLoop, DEFAULT_INTERVAL_MS};

fn status_variant(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Confirmed => "success",
        PaymentStatus::Pending => "warning",
        PaymentStatus::Failed => "error",
        PaymentStatus::Reversed => "neutral",
    }
}

struct TopUpCsvRow(TopUp);

impl CsvExportable for TopUpCsvRow {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Vendor", "Amount", "Channel", "Top-up by", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_datetime(&self.0.created_at),
            self.0.vendor_name.clone(),
            format!("{:.2}", self.0.amount),
            self.0.channel.label().to_string(),
            self.0.top_up_by.clone(),
            self.0.status.as_str().to_string(),
        ]
    }
}

#[component]
pub fn TopUpList() -> impl IntoView {
    let flash = use_flash();
    let (data, set_data) = signal(PagedResponse::<TopUp>::default());
    let (error, set_error) = signal(None::<String>);
    let range = RwSignal::new(DateRangeQuery::new(days_back_iso(30), today_iso()));
    let page = RwSignal::new(PageQuery::default());
    let status_filter = RwSignal::new(String::new());
    let top_up_by = RwSignal::new(String::new());
    let vendor_filter = RwSignal::new(String::new());
    let vendor_options = RwSignal::new(Vec::<(String, String)>::new());

    let load = move || {
        let status = status_filter.get_untracked();
        let by = top_up_by.get_untracked();
        let vendor = vendor_filter.get_untracked();
        let query = TopUpListQuery::new(
            &range.get_untracked(),
            &page.get_untracked(),
            (!status.is_empty()).then_some(status),
            (!by.trim().is_empty()).then(|| by.trim().to_string()),
            (!vendor.is_empty()).then_some(vendor),
        );
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_topups(&query).await {
                Ok(resp) => {
                    set_data.set(resp);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // vendor pick-list for the filter
    wasm_bindgen_futures::spawn_local(async move {
        let all = PageQuery {
            page_number: 1,
            page_size: 500,
        };
        match fetch_vendors(&all).await {
            Ok(resp) => {
                vendor_options.set(
                    resp.items
                        .into_iter()
                        .map(|v| {
                            use contracts::domain::common::EntityId;
                            (v.id.as_string(), v.name)
                        })
                        .collect(),
                );
            }
            Err(e) => log::error!("failed to load vendors: {}", e),
        }
    });

    let polling = RwSignal::new(PollingLoop::new(DEFAULT_INTERVAL_MS));
    let refresh_now = use_polling(polling, load);
    refresh_now();
    let refresh_retry = refresh_now.clone();

    let on_export = move |_| {
        let rows: Vec<TopUpCsvRow> = data
            .get_untracked()
            .items
            .into_iter()
            .map(TopUpCsvRow)
            .collect();
        match export_to_csv(&rows, "topups.csv") {
            Ok(()) => flash.success("Top-ups exported"),
            Err(e) => flash.error(e),
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Vendor top-ups" subtitle="Wallet funding transactions">
                <PollingControls
                    state=polling
                    on_refresh=Callback::new({
                        let refresh_now = refresh_now.clone();
                        move |_| refresh_now()
                    })
                />
                <button class="button button--secondary" on:click=on_export>
                    {icon("export")}
                    "Export CSV"
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
                        vendor_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All vendors"</option>
                    {move || vendor_options.get().into_iter().map(|(id, name)| view! {
                        <option value=id>{name}</option>
                    }).collect_view()}
                </select>
                <input
                    class="filters__search"
                    type="text"
                    placeholder="Top-up by"
                    prop:value=move || top_up_by.get()
                    on:input=move |ev| top_up_by.set(event_target_value(&ev))
                    on:change=move |_| {
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                />
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
                on_retry=Callback::new({
                    let refresh_now = refresh_retry.clone();
                    move |_| refresh_now()
                })
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Vendor"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Channel"</th>
                            <th class="table__header-cell">"Top-up by"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|t| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format_datetime(&t.created_at)}</td>
                                    <td class="table__cell">{t.vendor_name}</td>
                                    <td class="table__cell">{format_money(t.amount)}</td>
                                    <td class="table__cell">{t.channel.label()}</td>
                                    <td class="table__cell">{t.top_up_by}</td>
                                    <td class="table__cell">
                                        <Badge variant=status_variant(t.status)>
                                            {t.status.as_str()}
                                        </Badge>
                                    </td>
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
