//! Session store for the current authenticated portal user.
//!
//! ARCHITECTURE
//! ============
//! `SessionState` is a plain struct with pure transitions; `Session` is the
//! `Copy` store handle provided via context, and every mutation goes through
//! its action methods. The store never navigates: route-guard effects watch
//! the state and perform redirects, which keeps the session unit-testable
//! without a router.
//!
//! Reloads are survived by persisting the token/user/menus subset to
//! localStorage; a reset removes the persisted copy as well.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::net::api;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse, MePayload, MenuItem, User};
use crate::util::persist;

const SESSION_KEY: &str = "portal_session";

/// Client-held record of the current authenticated identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub menus: Vec<MenuItem>,
    pub loading: bool,
    pub error: String,
    /// Session generation, bumped on every reset. Async flows capture it
    /// before awaiting and discard results that resolve under a different
    /// generation.
    pub epoch: u64,
}

impl SessionState {
    /// Holds iff both token and user are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// First role name, defaulting to `"user"`.
    #[must_use]
    pub fn role(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.roles.first())
            .map_or("user", |r| r.name.as_str())
    }

    /// First whitespace-delimited token of the user's name, or `"Admin"`.
    #[must_use]
    pub fn first_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.name.split_whitespace().next())
            .unwrap_or("Admin")
            .to_owned()
    }

    /// Store a successful login response.
    pub fn apply_login(&mut self, res: LoginResponse) {
        self.token = Some(res.token);
        self.user = Some(res.me.user);
        self.menus = res.me.menus;
        self.error.clear();
    }

    /// Store a `/me` payload for the existing token.
    pub fn apply_me(&mut self, me: MePayload) {
        self.user = Some(me.user);
        self.menus = me.menus;
    }

    /// Clear every field back to its initial value and open a new
    /// generation.
    pub fn reset(&mut self) {
        self.token = None;
        self.user = None;
        self.menus.clear();
        self.loading = false;
        self.error.clear();
        self.epoch += 1;
    }
}

/// Reload-surviving subset of the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
    user: Option<User>,
    #[serde(default)]
    menus: Vec<MenuItem>,
}

impl PersistedSession {
    fn of(state: &SessionState) -> Self {
        Self {
            token: state.token.clone(),
            user: state.user.clone(),
            menus: state.menus.clone(),
        }
    }
}

/// Store handle, provided once via context and copied everywhere.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Create the store, restoring any persisted session.
    #[must_use]
    pub fn restore() -> Self {
        let mut state = SessionState::default();
        if let Some(saved) = persist::load_json::<PersistedSession>(SESSION_KEY) {
            state.token = saved.token;
            state.user = saved.user;
            state.menus = saved.menus;
        }
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Reactive snapshot for effects and views.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    /// Current token, read untracked at dispatch time.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Current role name, read untracked.
    #[must_use]
    pub fn role_name(&self) -> String {
        self.state.with_untracked(|s| s.role().to_owned())
    }

    /// Current session generation, read untracked.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.state.with_untracked(|s| s.epoch)
    }

    /// Reset the session and drop the persisted copy. Route guards observe
    /// the change and redirect to the login screen.
    pub fn logout(&self) {
        self.state.update(SessionState::reset);
        persist::remove(SESSION_KEY);
    }

    fn persist_current(&self) {
        let snapshot = self.state.with_untracked(PersistedSession::of);
        persist::save_json(SESSION_KEY, &snapshot);
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token, user, and menus are stored and persisted; on
    /// failure a human-readable message is recorded and the error is
    /// returned to the caller. The loading flag is cleared on every exit.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the login request.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error.clear();
        });
        let epoch = self.epoch();
        let client = Api::public(ApiConfig::from_env());
        let result = api::login(&client, credentials).await;
        if self.epoch() != epoch {
            // The session was reset while the request was in flight; the
            // response belongs to a dead generation.
            return Ok(());
        }
        match result {
            Ok(res) => {
                self.state.update(|s| {
                    s.apply_login(res);
                    s.loading = false;
                });
                self.persist_current();
                Ok(())
            }
            Err(err) => {
                let message = err.user_message("Login failed.");
                self.state.update(|s| {
                    s.error = message;
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Refresh the user and menus for the held token. No-op without a
    /// token; any failure is treated as token invalidity and resets the
    /// session.
    pub async fn fetch_user(&self) {
        if self.token().is_none() {
            return;
        }
        let epoch = self.epoch();
        let client = Api::new(*self);
        match api::fetch_me(&client).await {
            Ok(me) if self.epoch() == epoch => {
                self.state.update(|s| s.apply_me(me));
                self.persist_current();
            }
            Ok(_) => {}
            Err(_) => {
                // A 401 already reset the session through the interceptor
                // (bumping the epoch); reset here for every other failure.
                if self.epoch() == epoch {
                    self.logout();
                }
            }
        }
    }

    /// Kick off the missing user fetch exactly once; guard effects re-run
    /// when the loading flag settles.
    #[cfg(feature = "hydrate")]
    pub fn ensure_user(self) {
        let needs_fetch = self
            .state
            .with_untracked(|s| s.token.is_some() && s.user.is_none() && !s.loading);
        if !needs_fetch {
            return;
        }
        self.state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            self.fetch_user().await;
            self.state.update(|s| s.loading = false);
        });
    }
}
