//! Authenticated API client factory.
//!
//! ARCHITECTURE
//! ============
//! An [`Api`] value is bound to the configured base URL and (optionally) the
//! session store. The privilege requirement is checked once, at construction;
//! the bearer token is read at dispatch time so a token refreshed mid-session
//! is always current. Response statuses are classified by [`Disposition`]
//! uniformly for every endpoint: a 401 resets the session (the route guards
//! observe the change and redirect), everything else is returned to the
//! caller as data.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::error::extract_message;
use crate::state::session::Session;
use crate::util::authz::Privilege;

/// HTTP verbs used by the portal API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// What a response status means for the session, uniform across endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Success or an unclassified status; handled per call.
    Pass,
    /// 401: the token is no longer valid, the session must be reset.
    ForceLogout,
    /// 403: report the denial without forcing a logout.
    Forbidden,
    /// 422: validation details belong to the caller.
    Validation,
    /// 5xx: backend fault.
    ServerFault,
}

impl Disposition {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::ForceLogout,
            403 => Self::Forbidden,
            422 => Self::Validation,
            s if s >= 500 => Self::ServerFault,
            _ => Self::Pass,
        }
    }
}

/// Check a privilege requirement against the caller's current role.
pub(crate) fn preflight(privilege: Privilege, role: &str) -> Result<(), ApiError> {
    if privilege.permits(role) {
        Ok(())
    } else {
        Err(ApiError::Authorization(privilege))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// A request dispatcher bound to the portal backend.
#[derive(Clone)]
pub struct Api {
    config: ApiConfig,
    session: Option<Session>,
}

impl Api {
    /// An authenticated client with no privilege requirement.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            config: ApiConfig::from_env(),
            session: Some(session),
        }
    }

    /// An authenticated client gated on a privilege tier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Authorization`] immediately, before any network
    /// activity, when the session's role does not satisfy `privilege`.
    pub fn with_privilege(session: Session, privilege: Privilege) -> Result<Self, ApiError> {
        preflight(privilege, &session.role_name())?;
        Ok(Self::new(session))
    }

    /// An unauthenticated client for public endpoints such as login.
    #[must_use]
    pub fn public(config: ApiConfig) -> Self {
        Self { config, session: None }
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] describing the transport, status, or decode
    /// failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(Method::Get, path, None).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] describing the transport, status, or decode
    /// failure.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.dispatch(Method::Post, path, Some(body)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] describing the transport, status, or decode
    /// failure.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.dispatch(Method::Put, path, Some(body)).await
    }

    /// Send a request with the shared headers and route the response through
    /// the status interceptor.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url(path);
            let mut builder = match method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
            }
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

            // Token is read here, at dispatch time, never cached in the
            // client, so a token refreshed mid-session is always current.
            if let Some(token) = self.session.and_then(|s| s.token()) {
                builder = builder.header("Authorization", &bearer_header(&token));
            }

            let sent = match body {
                Some(json) => builder
                    .json(&json)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
            self.intercept(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Apply the global status interception rules to a response.
    #[cfg(feature = "hydrate")]
    async fn intercept<T: DeserializeOwned>(&self, resp: gloo_net::http::Response) -> Result<T, ApiError> {
        let status = resp.status();
        match Disposition::from_status(status) {
            Disposition::ForceLogout => {
                if let Some(session) = self.session {
                    session.logout();
                }
                Err(ApiError::Unauthenticated)
            }
            Disposition::Forbidden => {
                let message = body_message(resp).await;
                leptos::logging::warn!("access denied: {message}");
                Err(ApiError::Forbidden { message })
            }
            Disposition::Validation => Err(ApiError::Validation {
                message: body_message(resp).await,
            }),
            Disposition::ServerFault => {
                leptos::logging::error!("server error: status {status}");
                Err(ApiError::Server { status })
            }
            Disposition::Pass => {
                if resp.ok() {
                    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
                } else {
                    Err(ApiError::Status {
                        status,
                        message: body_message(resp).await,
                    })
                }
            }
        }
    }
}

#[cfg(feature = "hydrate")]
async fn body_message(resp: gloo_net::http::Response) -> String {
    resp.text()
        .await
        .ok()
        .and_then(|raw| extract_message(&raw))
        .unwrap_or_default()
}
