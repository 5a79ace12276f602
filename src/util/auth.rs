//! Shared route-guard effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page installs the same guard so redirect behavior cannot
//! drift between screens. Guards are the only place (besides page-local
//! effects) where navigation happens; session actions never navigate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;
use crate::util::authz::{RouteMeta, authorize, login_redirect, redirect_target};

/// Guard a routed page.
///
/// Runs as a reactive effect: a held token without a cached user first
/// triggers the user fetch and suspends the decision until it settles; the
/// authorization verdict then decides between rendering and redirecting.
pub fn install_route_guard<F>(session: Session, meta: RouteMeta, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.snapshot();
        if state.token.is_some() && state.user.is_none() {
            #[cfg(feature = "hydrate")]
            session.ensure_user();
            return;
        }
        let verdict = authorize(state.is_authenticated(), state.role(), &meta);
        if let Some(target) = redirect_target(verdict) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Send an already-authenticated visitor away from the login screen.
pub fn install_authenticated_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = login_redirect(session.snapshot().is_authenticated()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
