use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

/// Transient notification service. One message at a time; a newer message
/// replaces the current one and restarts the dismiss timer.
#[derive(Clone, Copy)]
pub struct FlashService {
    message: RwSignal<Option<FlashMessage>>,
    // dismiss token: a stale timer must not clear a newer message
    seq: RwSignal<u64>,
}

impl FlashService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(FlashKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(FlashKind::Error, text.into());
    }

    fn show(&self, kind: FlashKind, text: String) {
        let token = self.seq.get_untracked() + 1;
        self.seq.set(token);
        self.message.set(Some(FlashMessage { kind, text }));

        let message = self.message;
        let seq = self.seq;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            if seq.get_untracked() == token {
                message.set(None);
            }
        });
    }

    pub fn current(&self) -> Signal<Option<FlashMessage>> {
        self.message.into()
    }
}

impl Default for FlashService {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the flash service out of context; provided once in `App`.
pub fn use_flash() -> FlashService {
    use_context::<FlashService>().expect("FlashService not found in context")
}

/// Renders the current flash message as a floating toast.
#[component]
pub fn FlashHost() -> impl IntoView {
    let flash = use_flash();
    let current = flash.current();

    view! {
        {move || {
            current.get().map(|msg| {
                let kind_class = match msg.kind {
                    FlashKind::Success => "flash flash--success",
                    FlashKind::Error => "flash flash--error",
                };
                view! { <div class=kind_class role="status">{msg.text}</div> }
            })
        }}
    }
}
