//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, forbidden::ForbiddenPage, login::LoginPage, profile::ProfilePage,
};
use crate::state::session::Session;

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
/// Restores the persisted session, provides it as context, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::restore();
    provide_context(session);

    // A reload with a persisted token but no cached user: refresh the
    // identity before any guarded page settles.
    #[cfg(feature = "hydrate")]
    session.ensure_user();

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-ui.css"/>
        <Title text="Admissions Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("403") view=ForbiddenPage/>
            </Routes>
        </Router>
    }
}
