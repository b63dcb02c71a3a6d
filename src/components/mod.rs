//! Reusable UI components shared by the page modules.
//!
//! ARCHITECTURE
//! ============
//! Layout shells (`main_layout`, `top_bar`, `bottom_nav_bar`) frame every
//! signed-in page; `protected_route` and `loading_spinner` implement route
//! gating on top of the session state.

pub mod bottom_nav_bar;
pub mod loading_spinner;
pub mod main_layout;
pub mod protected_route;
pub mod top_bar;
