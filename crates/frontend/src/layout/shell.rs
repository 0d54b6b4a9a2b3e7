use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::shared::flash::FlashHost;

/// Application frame: fixed sidebar on the left, routed page content in the
/// center, flash messages overlaid on top.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar />
            <main class="layout__main">{children()}</main>
            <FlashHost />
        </div>
    }
}
