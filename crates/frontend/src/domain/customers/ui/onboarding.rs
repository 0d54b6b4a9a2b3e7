use std::collections::HashMap;

use contracts::domain::customer::{onboarding_schema, CustomerDraft, Gender, TariffClass};
use contracts::shared::forms::WizardState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::customers::api::{create_customer, fetch_area_offices};
use crate::shared::components::{ErrorBanner, PageHeader, WizardFrame};
use crate::shared::flash::use_flash;

#[component]
pub fn CustomerOnboarding() -> impl IntoView {
    let flash = use_flash();
    let state = RwSignal::new(WizardState::new(onboarding_schema()));
    let saving = RwSignal::new(false);
    let leave = RwSignal::new(false);

    let select_options = RwSignal::new(static_options());
    let (load_error, set_load_error) = signal(None::<String>);

    // reference data for the area office select; without it the wizard
    // cannot pass its required-select check, so failures must be retryable
    let load_offices = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_area_offices().await {
                Ok(offices) => {
                    let mut opts = vec![("0".to_string(), "Select area office".to_string())];
                    opts.extend(
                        offices
                            .into_iter()
                            .map(|o| (o.id.to_string(), o.name)),
                    );
                    select_options.update(|m| {
                        m.insert("areaOfficeId".to_string(), opts);
                    });
                    set_load_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load area offices: {}", e);
                    set_load_error.set(Some(format!("Failed to load area offices: {}", e)));
                }
            }
        });
    };

    load_offices();

    let on_submit = Callback::new(move |_| {
        let draft = match state.with_untracked(|w| CustomerDraft::from_values(w)) {
            Ok(d) => d,
            Err(e) => {
                flash.error(e);
                return;
            }
        };
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match create_customer(&draft).await {
                Ok(created) => {
                    flash.success(format!(
                        "Customer {} registered",
                        created.account_number
                    ));
                    leave.set(true);
                }
                Err(e) => {
                    flash.error(e);
                    saving.set(false);
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_| leave.set(true));

    let navigate = use_navigate();
    Effect::new(move |_| {
        if leave.get() {
            navigate("/customers", Default::default());
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Customer onboarding" subtitle="Register a new customer account">
                {()}
            </PageHeader>

            <ErrorBanner
                message=Signal::derive(move || load_error.get())
                on_retry=Callback::new(move |_| load_offices())
            />

            <WizardFrame
                state=state
                select_options=Signal::derive(move || select_options.get())
                submit_label="Register customer"
                on_submit=on_submit
                on_cancel=on_cancel
                saving=Signal::derive(move || saving.get())
            />
        </div>
    }
}

fn static_options() -> HashMap<String, Vec<(String, String)>> {
    let mut opts = HashMap::new();

    let mut genders = vec![(String::new(), "Select gender".to_string())];
    genders.extend(
        Gender::ALL
            .iter()
            .map(|g| (g.as_str().to_string(), g.as_str().to_string())),
    );
    opts.insert("gender".to_string(), genders);

    let mut tariffs = vec![(String::new(), "Select tariff class".to_string())];
    tariffs.extend(
        TariffClass::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), t.as_str().to_string())),
    );
    opts.insert("tariffClass".to_string(), tariffs);

    opts.insert(
        "areaOfficeId".to_string(),
        vec![("0".to_string(), "Select area office".to_string())],
    );

    opts
}
