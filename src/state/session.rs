//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Only `AuthContext` writes it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{User, UserRole};

/// Current user and whether the stored session has been read yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Nothing is known until storage has been read.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}
