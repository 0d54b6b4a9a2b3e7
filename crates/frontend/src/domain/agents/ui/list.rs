use contracts::domain::agent::{Agent, AgentStatus};
use contracts::shared::query::{PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::agents::api::{fetch_agents, AgentListQuery};
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;

fn status_variant(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Active => "success",
        AgentStatus::Training => "primary",
        AgentStatus::Suspended => "error",
    }
}

#[component]
pub fn AgentList() -> impl IntoView {
    let (data, set_data) = signal(PagedResponse::<Agent>::default());
    let (error, set_error) = signal(None::<String>);
    let page = RwSignal::new(PageQuery::default());
    let status_filter = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());

    let load = move || {
        let status = status_filter.get_untracked();
        let reg = region.get_untracked();
        let query = AgentListQuery::new(
            &page.get_untracked(),
            (!status.is_empty()).then_some(status),
            (!reg.trim().is_empty()).then(|| reg.trim().to_string()),
        );
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_agents(&query).await {
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
            <PageHeader title="Agents" subtitle="Field agent directory">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filters">
                <input
                    class="filters__search"
                    type="text"
                    placeholder="Filter by region"
                    prop:value=move || region.get()
                    on:input=move |ev| region.set(event_target_value(&ev))
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
                    {AgentStatus::ALL.iter().map(|s| view! {
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
                            <th class="table__header-cell">"Full name"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Region"</th>
                            <th class="table__header-cell">"Supervisor"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|a| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{a.full_name}</td>
                                    <td class="table__cell">{a.phone_number}</td>
                                    <td class="table__cell">{a.email}</td>
                                    <td class="table__cell">{a.region}</td>
                                    <td class="table__cell">{a.supervisor_name.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">
                                        <Badge variant=status_variant(a.status)>
                                            {a.status.as_str()}
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
