use contracts::domain::vendor::Vendor;
use contracts::shared::query::{PageQuery, PagedResponse};
use leptos::prelude::*;

use crate::domain::vendors::api::fetch_vendors;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;

#[component]
pub fn VendorList() -> impl IntoView {
    let (data, set_data) = signal(PagedResponse::<Vendor>::default());
    let (error, set_error) = signal(None::<String>);
    let page = RwSignal::new(PageQuery::default());

    let load = move || {
        let query = page.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_vendors(&query).await {
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
            <PageHeader title="Vendors" subtitle="Vending partners and wallet balances">
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Contact phone"</th>
                            <th class="table__header-cell">"Contact email"</th>
                            <th class="table__header-cell">"Wallet balance"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || data.get().items.into_iter().map(|v| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{v.name}</td>
                                    <td class="table__cell">{v.contact_phone}</td>
                                    <td class="table__cell">{v.contact_email}</td>
                                    <td class="table__cell">{format_money(v.wallet_balance)}</td>
                                    <td class="table__cell">
                                        {if v.active {
                                            view! { <Badge variant="success">"Active"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge variant="neutral">"Inactive"</Badge> }.into_any()
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
