//! Wire DTOs for the portal backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes exactly so serde handles the
//! whole boundary: the login response nests the user under `me`, and the
//! profile/payout endpoints wrap their payload in a `data` envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated portal user as returned by login and `/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (opaque server-issued string).
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Assigned roles, most significant first.
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A named role attached to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name (e.g. `"admin"`, `"super-admin"`).
    pub name: String,
}

/// A navigation entry returned alongside the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Text shown in the navigation chrome.
    pub label: String,
    /// Route path the entry links to.
    pub path: String,
    /// Optional icon name.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response: a bearer token plus the identity payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent authenticated requests.
    pub token: String,
    /// Identity payload, identical in shape to `GET /me`.
    pub me: MePayload,
}

/// Identity payload returned by `GET /me` and nested in the login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MePayload {
    pub user: User,
    #[serde(default)]
    pub menus: Vec<MenuItem>,
}

/// Profile payload from `GET /profile`. Fields the backend omits come
/// through as `None` and are rendered as blanks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bank_account: Option<BankAccount>,
}

/// Bank-payout details attached to a profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_code: String,
}

/// Editable mirror of [`BankAccount`], doubling as the request body for
/// `POST|PUT /admin/payout/bank`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankForm {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_code: String,
}

impl BankForm {
    /// Mirror a fetched bank account into the form fields.
    #[must_use]
    pub fn from_account(account: &BankAccount) -> Self {
        Self {
            bank_name: account.bank_name.clone(),
            account_name: account.account_name.clone(),
            account_number: account.account_number.clone(),
            bank_code: account.bank_code.clone(),
        }
    }
}

/// Generic `{ "data": ... }` envelope used by the profile and payout
/// endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error body shape: the backend reports failures as `{ "message": ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
