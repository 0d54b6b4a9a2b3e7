use crate::shared::icons::icon;
use crate::shared::polling::{PollingLoop, INTERVAL_OPTIONS};
use leptos::prelude::*;
use thaw::*;

/// PollingControls component - auto-refresh toggle, interval select,
/// manual refresh button and a last-updated readout.
///
/// Drives a [`PollingLoop`] signal wired up through `use_polling`.
#[component]
pub fn PollingControls(
    /// Shared polling state
    state: RwSignal<PollingLoop>,

    /// Manual refresh handler (`refresh_now` from `use_polling`)
    on_refresh: Callback<()>,
) -> impl IntoView {
    let toggle = move |_| {
        state.update(|p| {
            if p.is_enabled() {
                p.stop();
            } else {
                p.start();
            }
        });
    };

    let toggle_appearance = move || {
        if state.with(|p| p.is_enabled()) {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Secondary
        }
    };

    let toggle_label = move || {
        if state.with(|p| p.is_enabled()) {
            "Auto-refresh on"
        } else {
            "Auto-refresh off"
        }
    };

    let last_updated = move || {
        state
            .with(|p| p.last_run_label())
            .map(|t| format!("Updated {}", t))
            .unwrap_or_else(|| "Not updated yet".to_string())
    };

    view! {
        <Flex align=FlexAlign::Center gap=FlexGap::Small>
            <span class="polling-controls__updated">{last_updated}</span>
            <select
                class="polling-controls__interval"
                on:change=move |ev| {
                    if let Ok(ms) = event_target_value(&ev).parse::<u32>() {
                        state.update(|p| p.set_interval(ms));
                    }
                }
                prop:value=move || state.with(|p| p.interval_ms()).to_string()
            >
                {INTERVAL_OPTIONS.iter().map(|&(ms, label)| {
                    view! {
                        <option
                            value=ms.to_string()
                            selected=move || state.with(|p| p.interval_ms()) == ms
                        >
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
            <Button
                size=ButtonSize::Small
                appearance=toggle_appearance
                on_click=toggle
            >
                {toggle_label}
            </Button>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_refresh.run(())
            >
                {icon("refresh")}
                "Refresh"
            </Button>
        </Flex>
    }
}
