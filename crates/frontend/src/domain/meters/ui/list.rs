use contracts::domain::meter::Meter;
use contracts::shared::query::{PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::meters::api::{fetch_meters, MeterListQuery};
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

#[component]
pub fn MeterList() -> impl IntoView {
    let (data, set_data) = signal(PagedResponse::<Meter>::default());
    let (error, set_error) = signal(None::<String>);
    let page = RwSignal::new(PageQuery::default());
    let type_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let load = move || {
        let meter_type = type_filter.get_untracked();
        let text = search.get_untracked();
        let query = MeterListQuery::new(
            &page.get_untracked(),
            (!meter_type.is_empty()).then_some(meter_type),
            (!text.trim().is_empty()).then(|| text.trim().to_string()),
        );
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_meters(&query).await {
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
            <PageHeader title="Meters" subtitle="Installed and pending meters">
                <a href="/meters/install" class="button button--primary">
                    {icon("plus")}
                    "Install meter"
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
                    placeholder="Search meter or account number"
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
                        type_filter.set(event_target_value(&ev));
                        page.update(|p| p.page_number = 1);
                        load();
                    }
                >
                    <option value="">"All types"</option>
                    <option value="Prepaid">"Prepaid"</option>
                    <option value="Postpaid">"Postpaid"</option>
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
                            <th class="table__header-cell">"Meter number"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Phase"</th>
                            <th class="table__header-cell">"Account"</th>
                            <th class="table__header-cell">"Installer"</th>
                            <th class="table__header-cell">"Installed"</th>
                            <th class="table__header-cell">"Commissioned"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|m| {
                            let installed = m
                                .installed_at
                                .map(|dt| format_datetime(&dt))
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{m.meter_number}</td>
                                    <td class="table__cell">{m.meter_type.as_str()}</td>
                                    <td class="table__cell">{m.phase.label()}</td>
                                    <td class="table__cell">{m.account_number.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{m.installer_name.unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{installed}</td>
                                    <td class="table__cell">
                                        {if m.commissioned {
                                            view! { <Badge variant="success">"Commissioned"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge variant="warning">"Pending"</Badge> }.into_any()
                                        }}
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
