//! Session owner: the in-memory signed-in user plus its persisted credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is built once by the app root and provided through Leptos
//! context. Pages call `login`/`register`/`logout`; guards and layout read the
//! session through [`AuthContext::state`], which is read-only.
//!
//! INVARIANTS
//! ==========
//! - The session user is set iff storage holds a matching bundle. The storage
//!   wrapper (`store`) is private to this module, so nothing else can write it.
//! - At most one login/register is in flight; a second one fails with
//!   [`AuthError::Busy`].
//! - Whatever replaces or clears the stored session (`logout`, a completed
//!   sign-in) wins over requests already in flight: a late result is dropped
//!   and the call fails with [`AuthError::Superseded`].


mod store;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use leptos::prelude::*;

use self::store::SessionStore;
use crate::net::api::AuthGateway;
use crate::net::error::AuthError;
use crate::net::types::{CredentialBundle, LoginRequest, RegisterRequest, User};
use crate::state::session::SessionState;
use crate::util::storage::KeyValueStore;

#[derive(Clone)]
pub struct AuthContext {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<SessionStore>,
    state: RwSignal<SessionState>,
    in_flight: Arc<AtomicBool>,
    /// Bumped whenever the stored session is replaced or cleared; requests
    /// compare it before and after awaiting.
    epoch: Arc<AtomicU64>,
}

/// Clears the in-flight flag when a sign-in attempt finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, AuthError> {
        if flag.swap(true, Ordering::SeqCst) {
            return Err(AuthError::Busy);
        }
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AuthContext {
    /// Build a context over a gateway and a storage backend. The session
    /// starts out loading; call [`initialize`](Self::initialize) to resolve it.
    pub fn new(gateway: Arc<dyn AuthGateway>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            gateway,
            store: Arc::new(SessionStore::new(storage)),
            state: RwSignal::new(SessionState::default()),
            in_flight: Arc::new(AtomicBool::new(false)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reactive, read-only view of the session.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(SessionState::is_authenticated)
    }

    /// Resolve the startup session from storage. Runs once; later calls are
    /// no-ops.
    pub fn initialize(&self) {
        if !self.state.with_untracked(|s| s.loading) {
            return;
        }
        let user = self.store.load();
        if let Some(user) = &user {
            leptos::logging::log!("restored session for user {}", user.id);
        }
        self.state.set(SessionState { user, loading: false });
    }

    /// Sign in and persist the returned credentials.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures unchanged (the session is left as it was),
    /// plus [`AuthError::Busy`], [`AuthError::Superseded`], and
    /// [`AuthError::Storage`] when the credentials cannot be persisted.
    pub async fn login(&self, credentials: LoginRequest) -> Result<User, AuthError> {
        self.establish(self.gateway.login(&credentials)).await
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Same as [`login`](Self::login).
    pub async fn register(&self, profile: RegisterRequest) -> Result<User, AuthError> {
        self.establish(self.gateway.register(&profile)).await
    }

    /// Forget the session. Always succeeds.
    pub fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.store.clear();
        self.state.update(|s| {
            s.user = None;
            s.loading = false;
        });
    }

    /// Stored access token for authorizing other API calls.
    pub fn access_token(&self) -> Option<String> {
        self.store.access_token()
    }

    /// Trade the stored refresh token for a new access token and store it.
    ///
    /// Only runs when called; nothing refreshes automatically.
    ///
    /// # Errors
    ///
    /// [`AuthError::NoSession`] without a stored refresh token, gateway
    /// failures unchanged, [`AuthError::Superseded`] if a logout or a new
    /// sign-in happened meanwhile, or [`AuthError::Storage`].
    pub async fn refresh_access_token(&self) -> Result<String, AuthError> {
        let refresh_token = self.store.refresh_token().ok_or(AuthError::NoSession)?;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let access_token = self.gateway.refresh_access_token(&refresh_token).await?;
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return Err(AuthError::Superseded);
        }
        self.store.replace_access_token(&access_token)?;
        Ok(access_token)
    }

    /// Confirm an email address with the token from the verification mail.
    ///
    /// On success the signed-in user, if any, is marked verified in memory and
    /// in storage. If storage refuses the update both keep the old flag and
    /// the next sign-in brings the server's value.
    ///
    /// # Errors
    ///
    /// Gateway failures unchanged.
    pub async fn verify_email(&self, token: &str) -> Result<(), AuthError> {
        let epoch = self.epoch.load(Ordering::SeqCst);
        self.gateway.verify_email(token).await?;
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return Ok(());
        }
        let Some(user) = self.current_user().filter(|u| !u.is_email_verified) else {
            return Ok(());
        };
        let verified = User { is_email_verified: true, ..user };
        match self.store.replace_user(&verified) {
            Ok(()) => self.state.update(|s| s.user = Some(verified)),
            Err(e) => leptos::logging::warn!("email verified but stored user not updated: {e}"),
        }
        Ok(())
    }

    async fn establish<F>(&self, pending: F) -> Result<User, AuthError>
    where
        F: Future<Output = Result<CredentialBundle, AuthError>>,
    {
        let _guard = InFlight::acquire(&self.in_flight)?;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let bundle = pending.await?;
        if self.epoch.load(Ordering::SeqCst) != epoch {
            leptos::logging::warn!("dropping sign-in result for user {}: logged out meanwhile", bundle.user.id);
            return Err(AuthError::Superseded);
        }
        self.epoch.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.store.save(&bundle) {
            // The failed save rolled storage back to empty, previous session included.
            leptos::logging::warn!("could not persist session for user {}: {e}", bundle.user.id);
            self.state.update(|s| {
                s.user = None;
                s.loading = false;
            });
            return Err(e.into());
        }
        let user = bundle.user;
        self.state.set(SessionState { user: Some(user.clone()), loading: false });
        Ok(user)
    }
}
