use contracts::domain::analytics::AgentPerformanceRow;
use contracts::shared::query::DateRangeQuery;
use leptos::prelude::*;

use crate::dashboards::api::fetch_agent_performance;
use crate::shared::components::{
    DateRangePicker, ErrorBanner, PageHeader, PollingControls, StatCard, ValueFormat,
};
use crate::shared::date_utils::{days_back_iso, format_money, today_iso};
use crate::shared::polling::{use_polling, PollingLoop, DEFAULT_INTERVAL_MS};

/// Agent performance dashboard for the selected period.
#[component]
pub fn PerformanceDashboard() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<AgentPerformanceRow>::new());
    let (error, set_error) = signal(None::<String>);
    let range = RwSignal::new(DateRangeQuery::new(days_back_iso(30), today_iso()));

    let load = move || {
        let query = range.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_agent_performance(&query).await {
                Ok(r) => {
                    set_rows.set(r);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let polling = RwSignal::new(PollingLoop::new(DEFAULT_INTERVAL_MS));
    let refresh_now = use_polling(polling, load);
    refresh_now();
    let refresh_retry = refresh_now.clone();

    let totals = Memo::new(move |_| {
        rows.with(|rows| {
            let onboarded: u64 = rows.iter().map(|r| r.customers_onboarded).sum();
            let installed: u64 = rows.iter().map(|r| r.meters_installed).sum();
            let amount: f64 = rows.iter().map(|r| r.amount_collected).sum();
            (onboarded, installed, amount)
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Agent performance" subtitle="Onboarding, installs and collections per agent">
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
                    label="Customers onboarded".to_string()
                    icon_name="customers".to_string()
                    value=Signal::derive(move || Some(totals.get().0 as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Meters installed".to_string()
                    icon_name="meters".to_string()
                    value=Signal::derive(move || Some(totals.get().1 as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Amount collected".to_string()
                    icon_name="payments".to_string()
                    value=Signal::derive(move || Some(totals.get().2))
                    format=ValueFormat::Money
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Agent"</th>
                            <th class="table__header-cell">"Region"</th>
                            <th class="table__header-cell">"Customers onboarded"</th>
                            <th class="table__header-cell">"Meters installed"</th>
                            <th class="table__header-cell">"Payments"</th>
                            <th class="table__header-cell">"Amount collected"</th>
                            <th class="table__header-cell">"Success rate"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|r| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{r.agent_name}</td>
                                    <td class="table__cell">{r.region}</td>
                                    <td class="table__cell">{r.customers_onboarded}</td>
                                    <td class="table__cell">{r.meters_installed}</td>
                                    <td class="table__cell">{r.payments_collected}</td>
                                    <td class="table__cell">{format_money(r.amount_collected)}</td>
                                    <td class="table__cell">{format!("{:.1}%", r.success_rate)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
