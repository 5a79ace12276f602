//! Dashboard page: the authenticated landing screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the greeting and the navigation entries the backend returned with
//! the session. The guard redirects anonymous visitors to the login screen
//! before any data is requested.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_menu::NavMenu;
use crate::state::session::Session;
use crate::util::auth::install_route_guard;
use crate::util::authz::RouteMeta;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    install_route_guard(session, RouteMeta::AUTHENTICATED, navigate);

    // The guard observes the reset and redirects to /login.
    let on_logout = move |_| session.logout();

    view! {
        <Show
            when=move || session.snapshot().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.snapshot().loading {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Admissions Portal"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">
                        "Welcome, " {move || session.snapshot().first_name()}
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                {move || view! { <NavMenu menus=session.snapshot().menus/> }}
            </div>
        </Show>
    }
}
