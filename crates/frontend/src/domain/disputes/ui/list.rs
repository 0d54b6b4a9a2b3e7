use contracts::domain::common::EntityId;
use contracts::domain::dispute::{Dispute, DisputeCategory, DisputeStatus};
use contracts::shared::query::{PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::disputes::api::{fetch_disputes, DisputeListQuery};
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::icons::icon;

fn status_variant(status: DisputeStatus) -> &'static str {
    match status {
        DisputeStatus::Open => "warning",
        DisputeStatus::UnderReview => "primary",
        DisputeStatus::Resolved => "success",
        DisputeStatus::Rejected => "error",
    }
}

#[component]
pub fn DisputeList() -> impl IntoView {
    let (data, set_data) = signal(PagedResponse::<Dispute>::default());
    let (error, set_error) = signal(None::<String>);
    let page = RwSignal::new(PageQuery::default());
    let status_filter = RwSignal::new(String::new());
    let category_filter = RwSignal::new(String::new());

    let load = move || {
        let status = status_filter.get_untracked();
        let category = category_filter.get_untracked();
        let query = DisputeListQuery::new(
            &page.get_untracked(),
            (!status.is_empty()).then_some(status),
            (!category.is_empty()).then_some(category),
        );
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_disputes(&query).await {
                Ok(resp) => {
                    set_data.set(resp);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    load();

    view! {
        <div class="page">
            <PageHeader title="Disputes" subtitle="Billing disputes and resolutions">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filters">
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        status_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All statuses"</option>
                    {DisputeStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        category_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All categories"</option>
                    {DisputeCategory::ALL.iter().map(|c| view! {
                        <option value=c.as_str()>{c.label()}</option>
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
                            <th class="table__header-cell">"Reference"</th>
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Opened"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|d| {
                            let href = format!("/disputes/{}", d.id.as_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <a href=href class="table__link">{d.reference}</a>
                                    </td>
                                    <td class="table__cell">{d.account_number}</td>
                                    <td class="table__cell">{d.customer_name}</td>
                                    <td class="table__cell">{d.category.label()}</td>
                                    <td class="table__cell">{format_money(d.amount_disputed)}</td>
                                    <td class="table__cell">
                                        <Badge variant=status_variant(d.status)>
                                            {d.status.label()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">{format_datetime(&d.opened_at)}</td>
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
