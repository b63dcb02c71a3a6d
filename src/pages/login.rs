//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::error::AuthError;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthContext;
use crate::util::auth::{DASHBOARD_PATH, REGISTER_PATH};

const LOGIN_FAILED_FALLBACK: &str = "Credenciales inválidas";
const MISSING_FIELDS: &str = "Ingresa tu email y contraseña.";

/// Trim the email and require both fields. The password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

fn login_failure_message(err: &AuthError) -> String {
    err.user_message(LOGIN_FAILED_FALLBACK)
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Ingresando..." } else { "Ingresar" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth.login(credentials).await {
                Ok(user) => {
                    leptos::logging::log!("signed in as user {}", user.id);
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(login_failure_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"¡Bienvenido de Nuevo!"</h1>
                <p class="auth-card__subtitle">"Ingresa a tu cuenta para continuar"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="tu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Contraseña"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "¿No tienes una cuenta? "
                    <A href=REGISTER_PATH>"Regístrate"</A>
                </p>
            </div>
        </div>
    }
}
