use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

struct NavItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_GROUPS: &[(&str, &[NavItem])] = &[
    (
        "Analytics",
        &[
            NavItem { href: "/", label: "Consumption", icon: "dashboard" },
            NavItem { href: "/performance", label: "Performance", icon: "performance" },
        ],
    ),
    (
        "Operations",
        &[
            NavItem { href: "/customers", label: "Customers", icon: "customers" },
            NavItem { href: "/meters", label: "Meters", icon: "meters" },
            NavItem { href: "/disputes", label: "Disputes", icon: "disputes" },
            NavItem { href: "/payments", label: "Payments", icon: "payments" },
        ],
    ),
    (
        "Directory",
        &[
            NavItem { href: "/agents", label: "Agents", icon: "agents" },
            NavItem { href: "/supervisors", label: "Supervisors", icon: "supervisors" },
            NavItem { href: "/vendors", label: "Vendors", icon: "vendors" },
            NavItem { href: "/topups", label: "Top-ups", icon: "topups" },
        ],
    ),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let current_path = move || location.pathname.get();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("bolt")}
                <span class="sidebar__brand-name">"GridDesk"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_GROUPS
                    .iter()
                    .map(|(group, items)| {
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-title">{*group}</div>
                                {items
                                    .iter()
                                    .map(|item| {
                                        let href = item.href;
                                        let is_active = move || current_path() == href;
                                        view! {
                                            <a
                                                class="sidebar__link"
                                                class:sidebar__link--active=is_active
                                                href=href
                                            >
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
