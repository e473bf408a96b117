//! Top navigation shared by every route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/sites", "Job sites"),
    ("/apply", "Apply"),
    ("/contact", "Contact"),
];

/// Site-wide navigation bar. The link for the current path is highlighted.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Placement"</a>
            <span class="nav-bar__spacer"></span>
            {LINKS
                .into_iter()
                .map(|(href, label)| {
                    let active = move || pathname.get() == href;
                    view! {
                        <a href=href class="nav-bar__link" class:nav-bar__link--active=active>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
