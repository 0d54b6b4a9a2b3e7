use contracts::domain::analytics::{ConsumptionPoint, DashboardSummary};
use contracts::shared::query::DateRangeQuery;
use leptos::prelude::*;

use crate::dashboards::api::{fetch_consumption, fetch_summary};
use crate::shared::components::{
    DateRangePicker, ErrorBanner, PageHeader, PollingControls, StatCard, ValueFormat,
};
use crate::shared::date_utils::{days_back_iso, format_date, format_money, today_iso};
use crate::shared::polling::{use_polling, PollingLoop, DEFAULT_INTERVAL_MS};

/// Consumption dashboard: headline stat cards plus a per-day breakdown
/// for the selected period. A failed refresh keeps the previous figures
/// on screen behind the error banner.
#[component]
pub fn ConsumptionDashboard() -> impl IntoView {
    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (points, set_points) = signal(Vec::<ConsumptionPoint>::new());
    let (error, set_error) = signal(None::<String>);
    let range = RwSignal::new(DateRangeQuery::new(days_back_iso(30), today_iso()));

    let load = move || {
        let query = range.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let summary_result = fetch_summary(&query).await;
            let points_result = fetch_consumption(&query).await;
            match (summary_result, points_result) {
                (Ok(s), Ok(p)) => {
                    set_summary.set(Some(s));
                    set_points.set(p);
                    set_error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => set_error.set(Some(e)),
            }
        });
    };

    let polling = RwSignal::new(PollingLoop::new(DEFAULT_INTERVAL_MS));
    let refresh_now = use_polling(polling, load);
    refresh_now();
    let refresh_retry = refresh_now.clone();

    view! {
        <div class="page">
            <PageHeader title="Consumption" subtitle="Energy delivered and revenue collected">
                <PollingControls
                    state=polling
                    on_refresh=Callback::new({
                        let refresh_now = refresh_now.clone();
                        move |_| refresh_now()
                    })
                />
            </PageHeader>

            <div class="filters">
                <DateRangePicker
                    date_from=Signal::derive(move || range.get().start_date_utc)
                    date_to=Signal::derive(move || range.get().end_date_utc)
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        range.set(DateRangeQuery::new(from, to));
                        load();
                    })
                />
            </div>

            <ErrorBanner
                message=Signal::derive(move || error.get())
                on_retry=Callback::new({
                    let refresh_now = refresh_retry.clone();
                    move |_| refresh_now()
                })
            />

            <div class="stat-cards">
                <StatCard
                    label="Consumption (kWh)".to_string()
                    icon_name="bolt".to_string()
                    value=Signal::derive(move || summary.get().map(|s| s.total_consumption_kwh))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Active meters".to_string()
                    icon_name="meters".to_string()
                    value=Signal::derive(move || summary.get().map(|s| s.active_meters as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Revenue collected".to_string()
                    icon_name="payments".to_string()
                    value=Signal::derive(move || summary.get().map(|s| s.revenue_collected))
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Open disputes".to_string()
                    icon_name="disputes".to_string()
                    value=Signal::derive(move || summary.get().map(|s| s.open_disputes as f64))
                    format=ValueFormat::Integer
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Consumption (kWh)"</th>
                            <th class="table__header-cell">"Revenue"</th>
                            <th class="table__header-cell">"Vends"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || points.get().into_iter().map(|p| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format_date(&p.date)}</td>
                                    <td class="table__cell">{format!("{:.1}", p.consumption_kwh)}</td>
                                    <td class="table__cell">{format_money(p.revenue)}</td>
                                    <td class="table__cell">{p.vend_count}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
