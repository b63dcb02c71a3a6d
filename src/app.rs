//! Root application component with routing and the session context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ApiConfig;
use crate::net::api::HttpAuthGateway;
use crate::net::types::UserRole;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage,
    verify_email::VerifyEmailPage,
};
use crate::state::auth::AuthContext;
use crate::util::auth::DASHBOARD_PATH;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gateway = HttpAuthGateway::new(ApiConfig::from_build_env());
    let auth = AuthContext::new(Arc::new(gateway), Arc::new(BrowserStorage));
    provide_context(auth.clone());

    // Resolve the stored session after the first render so guards show the
    // loading indicator instead of redirecting.
    Effect::new(move || auth.initialize());

    view! {
        <Title text="Nonito's Food"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <ProtectedRoute required_role=UserRole::Admin><AdminPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
            </Routes>
        </Router>
    }
}
