//! Authorization decisions for routes and API clients.
//!
//! ARCHITECTURE
//! ============
//! Every role check in the crate goes through this module: the API client
//! factory's pre-flight privilege check and the route guard both consume the
//! same tier ordering and the same verdict function, and redirects are
//! produced only by [`redirect_target`].

#[cfg(test)]
#[path = "authz_test.rs"]
mod authz_test;

use std::fmt;

/// Capability level resolved from a role name. Ordered: `User < Admin <
/// SuperAdmin`; unknown role names resolve to `User`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Tier {
    /// Resolve a role name to its tier.
    #[must_use]
    pub fn of(role: &str) -> Self {
        match role {
            "super-admin" => Self::SuperAdmin,
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Privilege requirement declared when constructing an API client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Privilege {
    /// Any authenticated caller.
    #[default]
    None,
    /// Admin or super-admin callers only.
    Admin,
    /// Super-admin callers only.
    SuperAdmin,
}

impl Privilege {
    /// The lowest tier that satisfies this requirement.
    #[must_use]
    pub fn min_tier(self) -> Tier {
        match self {
            Self::None => Tier::User,
            Self::Admin => Tier::Admin,
            Self::SuperAdmin => Tier::SuperAdmin,
        }
    }

    /// Whether a caller holding `role` satisfies this requirement.
    #[must_use]
    pub fn permits(self, role: &str) -> bool {
        Tier::of(role) >= self.min_tier()
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "authenticated",
            Self::Admin => "administrator",
            Self::SuperAdmin => "superadmin",
        };
        f.write_str(label)
    }
}

/// Per-route access declaration, consulted by the route guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Whether the route requires an authenticated session.
    pub requires_auth: bool,
    /// Optional allow-list of role names; absent means any role.
    pub allowed_roles: Option<&'static [&'static str]>,
}

impl RouteMeta {
    /// A route open to anyone.
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        allowed_roles: None,
    };

    /// A route requiring any authenticated session.
    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        allowed_roles: None,
    };

    /// A route restricted to the given role names.
    #[must_use]
    pub const fn roles(allowed: &'static [&'static str]) -> Self {
        Self {
            requires_auth: true,
            allowed_roles: Some(allowed),
        }
    }
}

/// Outcome of an authorization decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    RequireLogin,
    Forbidden,
}

/// Decide whether a session may enter a route.
///
/// Evaluated in order: missing authentication wins over a role mismatch, so
/// an anonymous visitor is sent to login rather than the forbidden page, and
/// an authenticated caller outside the allow-list is sent to the forbidden
/// page rather than login.
#[must_use]
pub fn authorize(authenticated: bool, role: &str, meta: &RouteMeta) -> Verdict {
    if meta.requires_auth && !authenticated {
        return Verdict::RequireLogin;
    }
    if let Some(allowed) = meta.allowed_roles {
        if !allowed.contains(&role) {
            return Verdict::Forbidden;
        }
    }
    Verdict::Allow
}

/// Map a verdict to its redirect path, if any.
#[must_use]
pub fn redirect_target(verdict: Verdict) -> Option<&'static str> {
    match verdict {
        Verdict::Allow => None,
        Verdict::RequireLogin => Some("/login"),
        Verdict::Forbidden => Some("/403"),
    }
}

/// Where to send an already-authenticated visitor who lands on the login
/// screen.
#[must_use]
pub fn login_redirect(authenticated: bool) -> Option<&'static str> {
    authenticated.then_some("/dashboard")
}
