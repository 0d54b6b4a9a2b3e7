use contracts::domain::agent::Supervisor;
use contracts::shared::query::{PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::agents::api::fetch_supervisors;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;

#[component]
pub fn SupervisorList() -> impl IntoView {
    let (data, set_data) = signal(PagedResponse::<Supervisor>::default());
    let (error, set_error) = signal(None::<String>);
    let page = RwSignal::new(PageQuery::default());

    let load = move || {
        let query = page.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_supervisors(&query).await {
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
            <PageHeader title="Supervisors" subtitle="Regional supervision roster">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

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
                            <th class="table__header-cell">"Agents"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|s| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{s.full_name}</td>
                                    <td class="table__cell">{s.phone_number}</td>
                                    <td class="table__cell">{s.email}</td>
                                    <td class="table__cell">{s.region}</td>
                                    <td class="table__cell">{s.agents_count}</td>
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
