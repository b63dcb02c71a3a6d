//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule, so the decision is a pure
//! function of the session and the route's role requirement. `ProtectedRoute`
//! renders whatever this returns.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserRole;
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Default landing route for signed-in users.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not read yet; show a neutral loading indicator.
    Wait,
    RedirectToLogin,
    /// Signed in, but without the role this route needs.
    RedirectToLanding,
    Render,
}

impl GuardDecision {
    /// Path to navigate to, for the redirecting outcomes.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToLanding => Some(DASHBOARD_PATH),
            Self::Wait | Self::Render => None,
        }
    }
}

/// Decide what a protected route shows for the current session.
#[must_use]
pub fn guard_decision(state: &SessionState, required_role: Option<UserRole>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    let Some(user) = &state.user else {
        return GuardDecision::RedirectToLogin;
    };
    match required_role {
        Some(role) if user.role != role => GuardDecision::RedirectToLanding,
        _ => GuardDecision::Render,
    }
}
