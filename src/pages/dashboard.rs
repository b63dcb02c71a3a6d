//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `ProtectedRoute`, so a user is always present here; the
//! fallbacks only cover the frame between logout and the redirect.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::main_layout::MainLayout;
use crate::net::types::{User, UserRole};
use crate::state::auth::AuthContext;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("¡Hola, {}!", user.full_name),
        None => "¡Hola!".to_owned(),
    }
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Client => "Cliente",
        UserRole::Admin => "Administrador",
    }
}

/// Reminder shown until the account's email is confirmed.
fn verification_notice(user: Option<&User>) -> Option<&'static str> {
    match user {
        Some(user) if !user.is_email_verified => {
            Some("Verifica tu email para poder realizar pedidos.")
        }
        _ => None,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AuthContext>().state();

    let title = move || session.with(|s| greeting(s.user.as_ref()));
    let role = move || session.with(|s| s.role().map(role_label).unwrap_or_default());
    let notice = move || session.with(|s| verification_notice(s.user.as_ref()));

    view! {
        <MainLayout>
            <section class="dashboard">
                <h2 class="dashboard__title">{title}</h2>
                <p class="dashboard__role">{role}</p>
                {move || notice().map(|text| view! { <p class="dashboard__notice">{text}</p> })}
                <p class="dashboard__placeholder">"Tu menú semanal aparecerá aquí pronto."</p>
            </section>
        </MainLayout>
    }
}
