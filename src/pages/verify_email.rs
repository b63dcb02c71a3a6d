//! Email verification page: the target of the link in the verification mail.
//!
//! Reachable signed in or not. The token comes from the `token` query
//! parameter and is sent exactly once, when the page mounts.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::net::error::AuthError;
use crate::state::auth::AuthContext;
use crate::util::auth::DASHBOARD_PATH;

const VERIFY_FAILED_FALLBACK: &str = "No se pudo verificar tu email";
const INVALID_LINK: &str = "El enlace de verificación no es válido.";

#[derive(Clone, Debug, PartialEq, Eq)]
enum VerifyStatus {
    Pending,
    Verified,
    Failed(String),
}

impl VerifyStatus {
    fn text(&self) -> &str {
        match self {
            Self::Pending => "Verificando tu email...",
            Self::Verified => "¡Tu email ha sido verificado!",
            Self::Failed(message) => message.as_str(),
        }
    }
}

/// Trimmed token, or `None` when the link carried none.
fn usable_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

fn outcome(result: &Result<(), AuthError>) -> VerifyStatus {
    match result {
        Ok(()) => VerifyStatus::Verified,
        Err(e) => VerifyStatus::Failed(e.user_message(VERIFY_FAILED_FALLBACK)),
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let query = use_query_map();
    let status = RwSignal::new(VerifyStatus::Pending);

    match usable_token(query.with_untracked(|q| q.get("token"))) {
        Some(token) => leptos::task::spawn_local(async move {
            let result = auth.verify_email(&token).await;
            if let Err(e) = &result {
                leptos::logging::warn!("email verification failed: {e}");
            }
            status.set(outcome(&result));
        }),
        None => status.set(VerifyStatus::Failed(INVALID_LINK.to_owned())),
    }

    let message_class = move || {
        if status.with(|s| matches!(s, VerifyStatus::Failed(_))) {
            "auth-message auth-message--error"
        } else {
            "auth-message"
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Verificación de email"</h1>
                <p class=message_class>{move || status.with(|s| s.text().to_owned())}</p>
                <p class="auth-card__footer">
                    <A href=DASHBOARD_PATH>"Ir al inicio"</A>
                </p>
            </div>
        </div>
    }
}
