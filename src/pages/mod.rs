//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates layout to
//! `components`. Protected pages rely on `ProtectedRoute` in `app` for gating.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod verify_email;
