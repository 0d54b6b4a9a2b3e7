use contracts::domain::customer::{Customer, CustomerStatus};
use contracts::shared::query::{PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::customers::api::{fetch_customers, CustomerListQuery};
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

fn status_variant(status: CustomerStatus) -> &'static str {
    match status {
        CustomerStatus::Active => "success",
        CustomerStatus::PendingInstallation => "warning",
        CustomerStatus::Suspended => "error",
        CustomerStatus::Closed => "neutral",
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let (data, set_data) = signal(PagedResponse::<Customer>::default());
    let (error, set_error) = signal(None::<String>);
    let page = RwSignal::new(PageQuery::default());
    let status_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let load = move || {
        let status = status_filter.get_untracked();
        let text = search.get_untracked();
        let query = CustomerListQuery::new(
            &page.get_untracked(),
            (!status.is_empty()).then_some(status),
            (!text.trim().is_empty()).then(|| text.trim().to_string()),
        );
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_customers(&query).await {
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
            <PageHeader title="Customers" subtitle="Accounts and onboarding">
                <a href="/customers/onboarding" class="button button--primary">
                    {icon("plus")}
                    "New customer"
                </a>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filters">
                <input
                    class="filters__search"
                    type="text"
                    placeholder="Search name, phone or account"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
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
                    <option value="PendingInstallation">"Pending installation"</option>
                    <option value="Active">"Active"</option>
                    <option value="Suspended">"Suspended"</option>
                    <option value="Closed">"Closed"</option>
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
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell">"Full name"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"City"</th>
                            <th class="table__header-cell">"Tariff"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Registered"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|c| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{c.account_number}</td>
                                    <td class="table__cell">{c.full_name}</td>
                                    <td class="table__cell">{c.phone_number}</td>
                                    <td class="table__cell">{c.city}</td>
                                    <td class="table__cell">{c.tariff_class.as_str()}</td>
                                    <td class="table__cell">
                                        <Badge variant=status_variant(c.status)>
                                            {c.status.label()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">{format_datetime(&c.timestamps.created_at)}</td>
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
