//! Persisted credential bundle.
//!
//! Private to `state::auth`: every write goes through `AuthContext`, which
//! keeps the in-memory session and these entries in step.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use crate::net::types::{CredentialBundle, User};
use crate::util::storage::{KeyValueStore, StorageError};

pub(super) const ACCESS_TOKEN_KEY: &str = "accessToken";
pub(super) const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub(super) const USER_KEY: &str = "user";

pub(super) struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub(super) fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Write all three entries, or none of them.
    pub(super) fn save(&self, bundle: &CredentialBundle) -> Result<(), StorageError> {
        let user = serde_json::to_string(&bundle.user).map_err(|e| StorageError::Encode(e.to_string()))?;
        let written = self
            .backend
            .set_item(ACCESS_TOKEN_KEY, &bundle.access_token)
            .and_then(|()| self.backend.set_item(REFRESH_TOKEN_KEY, &bundle.refresh_token))
            .and_then(|()| self.backend.set_item(USER_KEY, &user));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Stored user, if both the user record and an access token are present.
    ///
    /// Token expiry is not checked; a stale token surfaces on the next request.
    pub(super) fn load(&self) -> Option<User> {
        let raw = self.backend.get_item(USER_KEY)?;
        self.backend.get_item(ACCESS_TOKEN_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored session: {e}");
                None
            }
        }
    }

    pub(super) fn access_token(&self) -> Option<String> {
        self.backend.get_item(ACCESS_TOKEN_KEY)
    }

    pub(super) fn refresh_token(&self) -> Option<String> {
        self.backend.get_item(REFRESH_TOKEN_KEY)
    }

    pub(super) fn replace_access_token(&self, access_token: &str) -> Result<(), StorageError> {
        self.backend.set_item(ACCESS_TOKEN_KEY, access_token)
    }

    /// Overwrite the stored user record, leaving both tokens in place.
    pub(super) fn replace_user(&self, user: &User) -> Result<(), StorageError> {
        let user = serde_json::to_string(user).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.set_item(USER_KEY, &user)
    }

    pub(super) fn clear(&self) {
        self.backend.remove_item(ACCESS_TOKEN_KEY);
        self.backend.remove_item(REFRESH_TOKEN_KEY);
        self.backend.remove_item(USER_KEY);
    }
}
