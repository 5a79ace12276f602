//! Access-denied screen for role-gated routes.

use leptos::prelude::*;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="forbidden-page">
            <h1>"403"</h1>
            <p>"You do not have access to this page."</p>
            <a class="btn" href="/dashboard">
                "Back to dashboard"
            </a>
        </div>
    }
}
