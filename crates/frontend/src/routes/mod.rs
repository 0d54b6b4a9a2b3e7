use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::dashboards::consumption::ConsumptionDashboard;
use crate::dashboards::performance::PerformanceDashboard;
use crate::domain::agents::ui::{AgentList, SupervisorList};
use crate::domain::customers::ui::{CustomerList, CustomerOnboarding};
use crate::domain::disputes::ui::{DisputeDetails, DisputeList};
use crate::domain::meters::ui::{MeterInstallationWizard, MeterList};
use crate::domain::payments::ui::PaymentList;
use crate::domain::vendors::ui::{TopUpList, VendorList};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="page"><h1>"Page not found"</h1></div> }>
            <Route path=path!("/") view=ConsumptionDashboard />
            <Route path=path!("/performance") view=PerformanceDashboard />
            <Route path=path!("/customers") view=CustomerList />
            <Route path=path!("/customers/onboarding") view=CustomerOnboarding />
            <Route path=path!("/meters") view=MeterList />
            <Route path=path!("/meters/install") view=MeterInstallationWizard />
            <Route path=path!("/agents") view=AgentList />
            <Route path=path!("/supervisors") view=SupervisorList />
            <Route path=path!("/vendors") view=VendorList />
            <Route path=path!("/topups") view=TopUpList />
            <Route path=path!("/disputes") view=DisputeList />
            <Route path=path!("/disputes/:id") view=DisputeDetails />
            <Route path=path!("/payments") view=PaymentList />
        </Routes>
    }
}
