use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline error banner for failed loads. The page keeps whatever data it
/// already has; the banner sits above it with an optional retry action.
#[component]
pub fn ErrorBanner(
    /// Error text; `None` hides the banner
    #[prop(into)]
    message: Signal<Option<String>>,

    /// Optional retry handler
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="error-banner">
                <span class="error-banner__icon">{icon("warning")}</span>
                <span class="error-banner__text">{msg}</span>
                {on_retry.map(|retry| view! {
                    <button
                        class="error-banner__retry"
                        on:click=move |_| retry.run(())
                    >
                        "Retry"
                    </button>
                })}
            </div>
        })}
    }
}
