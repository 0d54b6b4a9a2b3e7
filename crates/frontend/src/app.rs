use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

use crate::layout::Shell;
use crate::routes::AppRoutes;
use crate::shared::flash::FlashService;

#[component]
pub fn App() -> impl IntoView {
    // Provide the flash (toast) service to the whole app via context.
    provide_context(FlashService::new());

    view! {
        <ConfigProvider>
            <Router>
                <Shell>
                    <AppRoutes />
                </Shell>
            </Router>
        </ConfigProvider>
    }
}
