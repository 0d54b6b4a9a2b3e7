use contracts::domain::dispute::{Dispute, DisputeStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::domain::disputes::api::fetch_dispute;
use crate::domain::disputes::pdf::export_dispute_pdf;
use crate::shared::components::ui::Badge;
use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::flash::use_flash;
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
pub fn DisputeDetails() -> impl IntoView {
    let flash = use_flash();
    let params = use_params_map();
    let (dispute, set_dispute) = signal(None::<Dispute>);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
        if id.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_dispute(&id).await {
                Ok(d) => {
                    set_dispute.set(Some(d));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        // refetch when the route param changes
        params.with(|p| p.get("id"));
        load();
    });

    let on_export = move |_| {
        let Some(d) = dispute.get_untracked() else {
            flash.error("Dispute is not loaded yet");
            return;
        };
        match export_dispute_pdf(&d) {
            Ok(()) => flash.success("Print dialog opened"),
            Err(e) => flash.error(e),
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Dispute details" subtitle="Billing dispute record">
                <a href="/disputes" class="button button--secondary">
                    {icon("chevron-left")}
                    "Back to disputes"
                </a>
                <button
                    class="button button--primary"
                    on:click=on_export
                    disabled=move || dispute.get().is_none()
                >
                    {icon("print")}
                    "Export PDF"
                </button>
            </PageHeader>

            <ErrorBanner
                message=Signal::derive(move || error.get())
                on_retry=Callback::new(move |_| load())
            />

            {move || dispute.get().map(|d| {
                view! {
                    <div class="details">
                        <div class="details__header">
                            <h2 class="details__title">{d.reference.clone()}</h2>
                            <Badge variant=status_variant(d.status)>
                                {d.status.label()}
                            </Badge>
                        </div>
                        <dl class="details__grid">
                            <dt>"Account number"</dt>
                            <dd>{d.account_number.clone()}</dd>
                            <dt>"Customer"</dt>
                            <dd>{d.customer_name.clone()}</dd>
                            <dt>"Category"</dt>
                            <dd>{d.category.label()}</dd>
                            <dt>"Amount disputed"</dt>
                            <dd>{format_money(d.amount_disputed)}</dd>
                            <dt>"Opened"</dt>
                            <dd>{format_datetime(&d.opened_at)}</dd>
                            <dt>"Resolved"</dt>
                            <dd>{d.resolved_at.map(|t| format_datetime(&t)).unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Description"</dt>
                            <dd>{d.description.clone()}</dd>
                            <dt>"Resolution note"</dt>
                            <dd>{d.resolution_note.clone().unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                    </div>
                }
            })}
        </div>
    }
}
