//! Profile page: account details and the bank-payout form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bank_form::BankFormFields;
use crate::state::profile::{self, ProfileState};
use crate::state::session::Session;
use crate::util::auth::install_route_guard;
use crate::util::authz::RouteMeta;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    install_route_guard(session, RouteMeta::AUTHENTICATED, navigate);

    let state = RwSignal::new(ProfileState::default());
    let save_message = RwSignal::new(String::new());

    // Fetch once the session is usable; re-entering the page refetches.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || !session.snapshot().is_authenticated() {
            return;
        }
        fetched.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            profile::fetch_profile(session, state).await;
        });
    });

    let on_save = Callback::new(move |_| {
        save_message.set(String::new());
        let form = state.with_untracked(|s| s.bank_form.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = profile::save_bank(session, state, form).await;
            if outcome.success {
                save_message.set("Bank details saved.".to_owned());
            } else if let Some(message) = outcome.error {
                save_message.set(message);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    });

    view! {
        <div class="profile-page">
            <h1>"My Profile"</h1>

            <Show when=move || state.get().loading>
                <p>"Loading profile..."</p>
            </Show>
            <Show when=move || !state.get().error.is_empty()>
                <p class="profile-page__error">{move || state.get().error}</p>
            </Show>

            <section class="profile-page__details">
                <div class="profile-field">
                    <span class="profile-field__label">"Name"</span>
                    <span class="profile-field__value">{move || state.get().name}</span>
                </div>
                <div class="profile-field">
                    <span class="profile-field__label">"Email"</span>
                    <span class="profile-field__value">{move || state.get().email}</span>
                </div>
            </section>

            <section class="profile-page__bank">
                <h2>"Bank Payout Details"</h2>
                <BankFormFields state=state on_save=on_save/>
                <Show when=move || !save_message.get().is_empty()>
                    <p class="profile-page__save-message">{move || save_message.get()}</p>
                </Show>
            </section>
        </div>
    }
}
