//! Networking modules for the Nonito's Food REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth round trips, `error` classifies their failures,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
