//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain, read-only view of who is signed in; `auth` owns it
//! along with the persisted credentials, and is the only place either changes.

pub mod auth;
pub mod session;
