use std::collections::HashMap;

use contracts::domain::meter::{installation_schema, MeterInstallation, MeterPhase, MeterType};
use contracts::shared::forms::WizardState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::meters::api::{create_installation, fetch_installer_agents};
use crate::shared::components::{ErrorBanner, PageHeader, WizardFrame};
use crate::shared::flash::use_flash;

#[component]
pub fn MeterInstallationWizard() -> impl IntoView {
    let flash = use_flash();
    let state = RwSignal::new(WizardState::new(installation_schema()));
    let saving = RwSignal::new(false);
    let leave = RwSignal::new(false);

    let select_options = RwSignal::new(static_options());
    let (load_error, set_load_error) = signal(None::<String>);

    // installer options gate the required-select check, so a failed load
    // must be visible and retryable rather than a console-only error
    let load_installers = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_installer_agents().await {
                Ok(agents) => {
                    let mut opts = vec![("0".to_string(), "Select installer".to_string())];
                    opts.extend(agents.into_iter().map(|a| (a.id.to_string(), a.full_name)));
                    select_options.update(|m| {
                        m.insert("installerAgentId".to_string(), opts);
                    });
                    set_load_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load installer agents: {}", e);
                    set_load_error.set(Some(format!("Failed to load installers: {}", e)));
                }
            }
        });
    };

    load_installers();

    let on_submit = Callback::new(move |_| {
        let payload = match state.with_untracked(|w| MeterInstallation::from_values(w)) {
            Ok(p) => p,
            Err(e) => {
                flash.error(e);
                return;
            }
        };
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match create_installation(&payload).await {
                Ok(()) => {
                    flash.success(format!("Meter {} installed", payload.meter_number));
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
            navigate("/meters", Default::default());
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Meter installation" subtitle="Record a field installation">
                {()}
            </PageHeader>

            <ErrorBanner
                message=Signal::derive(move || load_error.get())
                on_retry=Callback::new(move |_| load_installers())
            />

            <WizardFrame
                state=state
                select_options=Signal::derive(move || select_options.get())
                submit_label="Save installation"
                on_submit=on_submit
                on_cancel=on_cancel
                saving=Signal::derive(move || saving.get())
            />
        </div>
    }
}

fn static_options() -> HashMap<String, Vec<(String, String)>> {
    let mut opts = HashMap::new();

    let mut types = vec![(String::new(), "Select meter type".to_string())];
    types.extend(
        MeterType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), t.as_str().to_string())),
    );
    opts.insert("meterType".to_string(), types);

    let mut phases = vec![(String::new(), "Select phase".to_string())];
    phases.extend(
        MeterPhase::ALL
            .iter()
            .map(|p| (p.as_str().to_string(), p.label().to_string())),
    );
    opts.insert("phase".to_string(), phases);

    opts.insert(
        "installerAgentId".to_string(),
        vec![("0".to_string(), "Select installer".to_string())],
    );

    opts
}
