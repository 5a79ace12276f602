//! Typed endpoint wrappers over [`Api`](crate::net::client::Api).
//!
//! Each backend endpoint is named once here; screens and stores call these
//! instead of spelling out paths.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{BankAccount, BankForm, Credentials, DataEnvelope, LoginResponse, MePayload, Profile};

pub const LOGIN: &str = "/auth/login";
pub const ME: &str = "/me";
pub const PROFILE: &str = "/profile";
pub const PAYOUT_BANK: &str = "/admin/payout/bank";

/// Exchange credentials for a token and identity payload.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the underlying request.
pub async fn login(api: &Api, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    api.post(LOGIN, credentials).await
}

/// Fetch the current user and menus.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the underlying request.
pub async fn fetch_me(api: &Api) -> Result<MePayload, ApiError> {
    api.get(ME).await
}

/// Fetch the current user's profile.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the underlying request.
pub async fn fetch_profile(api: &Api) -> Result<Profile, ApiError> {
    let envelope: DataEnvelope<Profile> = api.get(PROFILE).await?;
    Ok(envelope.data)
}

/// Create the bank-payout record.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the underlying request.
pub async fn create_bank(api: &Api, form: &BankForm) -> Result<BankAccount, ApiError> {
    let envelope: DataEnvelope<BankAccount> = api.post(PAYOUT_BANK, form).await?;
    Ok(envelope.data)
}

/// Update the existing bank-payout record.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the underlying request.
pub async fn update_bank(api: &Api, form: &BankForm) -> Result<BankAccount, ApiError> {
    let envelope: DataEnvelope<BankAccount> = api.put(PAYOUT_BANK, form).await?;
    Ok(envelope.data)
}
