//! Profile screen view-model: profile details plus the bank-payout form.
//!
//! Fetched data lives only in this state for the lifetime of the screen;
//! nothing here is persisted or written back into the session.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::client::{Api, Method};
use crate::net::types::{BankAccount, BankForm, Profile};
use crate::state::session::Session;

/// Local view state for the profile screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub name: String,
    pub email: String,
    pub bank_account: Option<BankAccount>,
    pub bank_form: BankForm,
    pub loading: bool,
    pub error: String,
}

impl ProfileState {
    /// Overwrite the view fields from a fetched profile, blanking whatever
    /// the backend omitted, and mirror an existing bank account into the
    /// form.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.name = profile.name.unwrap_or_default();
        self.email = profile.email.unwrap_or_default();
        self.bank_account = profile.bank_account;
        if let Some(account) = &self.bank_account {
            self.bank_form = BankForm::from_account(account);
        }
    }

    /// `POST` for the first save, `PUT` once a bank account exists.
    #[must_use]
    pub fn bank_save_method(&self) -> Method {
        if self.bank_account.is_some() {
            Method::Put
        } else {
            Method::Post
        }
    }

    /// Replace the local bank account with the server's representation.
    pub fn apply_saved_bank(&mut self, account: BankAccount) {
        self.bank_account = Some(account);
    }
}

/// Result data for a bank save; callers branch on this instead of catching
/// an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl SaveOutcome {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
        }
    }

    /// A response that resolved after the session was reset: the state is
    /// left untouched and there is nothing to show.
    #[must_use]
    pub fn discarded() -> Self {
        Self {
            success: false,
            error: None,
        }
    }
}

/// Load the current profile into `state`. On failure the previously-loaded
/// fields are left untouched and only the error message changes.
pub async fn fetch_profile(session: Session, state: RwSignal<ProfileState>) {
    state.update(|s| {
        s.loading = true;
        s.error.clear();
    });
    let epoch = session.epoch();
    let client = Api::new(session);
    let result = api::fetch_profile(&client).await;
    if session.epoch() != epoch {
        return;
    }
    state.update(|s| {
        match result {
            Ok(profile) => s.apply_profile(profile),
            Err(err) => s.error = err.user_message("Failed to load profile"),
        }
        s.loading = false;
    });
}

/// Submit the bank form, creating or updating based on whether a bank
/// account already exists locally.
pub async fn save_bank(session: Session, state: RwSignal<ProfileState>, form: BankForm) -> SaveOutcome {
    state.update(|s| s.loading = true);
    let epoch = session.epoch();
    let client = Api::new(session);
    let result = match state.with_untracked(ProfileState::bank_save_method) {
        Method::Put => api::update_bank(&client, &form).await,
        _ => api::create_bank(&client, &form).await,
    };
    if session.epoch() != epoch {
        return SaveOutcome::discarded();
    }
    state.update(|s| s.loading = false);
    match result {
        Ok(account) => {
            state.update(|s| s.apply_saved_bank(account));
            SaveOutcome::ok()
        }
        Err(err) => SaveOutcome::failed(err.user_message("Failed to save bank")),
    }
}
