//! Route wrapper that renders its children only for an allowed session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates [`guard_decision`] whenever the session signal changes, so a
//! logout anywhere on the page sends the user back to `/login`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::UserRole;
use crate::state::auth::AuthContext;
use crate::util::auth::{GuardDecision, LOGIN_PATH, guard_decision};

/// Guard for signed-in routes, optionally restricted to one role.
#[component]
pub fn ProtectedRoute(#[prop(optional)] required_role: Option<UserRole>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AuthContext>().state();

    move || match guard_decision(&session.get(), required_role) {
        GuardDecision::Wait => view! { <LoadingSpinner/> }.into_any(),
        GuardDecision::Render => children().into_any(),
        redirect => {
            let path = redirect.redirect_path().unwrap_or(LOGIN_PATH);
            view! { <Redirect path=path/> }.into_any()
        }
    }
}
