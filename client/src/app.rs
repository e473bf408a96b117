//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    apply::ApplyPage, contact::ContactPage, dashboard::DashboardPage, payment::PaymentPage,
    sites::SitesPage,
};
use crate::state::payment::PaymentState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wizard-to-payment hand-off context and sets up routing. View
/// state for the other pages is owned by the pages themselves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let payment = RwSignal::new(PaymentState::default());
    provide_context(payment);

    view! {
        <Stylesheet id="leptos" href="/pkg/placement.css"/>
        <Title text="Placement"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("sites") view=SitesPage/>
                    <Route path=StaticSegment("apply") view=ApplyPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("payment") view=PaymentPage/>
                </Routes>
            </main>
        </Router>
    }
}
