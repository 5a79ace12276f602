//! Login page with an email + password credentials form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::auth::install_authenticated_redirect;

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    // Already signed in (or signing in just succeeded): go to the dashboard.
    install_authenticated_redirect(session, navigate);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.snapshot().loading {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Failures surface through the session's error field.
            let _ = session.login(&credentials).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admissions Portal"</h1>
                <p class="login-card__subtitle">"Print results, admission letters & check status"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || session.snapshot().loading
                    >
                        {move || if session.snapshot().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || !session.snapshot().error.is_empty()>
                    <p class="login-message login-message--error">
                        {move || session.snapshot().error}
                    </p>
                </Show>
            </div>
        </div>
    }
}
