//! Registration page: create an account and sign in with it.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::error::AuthError;
use crate::net::types::RegisterRequest;
use crate::state::auth::AuthContext;
use crate::util::auth::{DASHBOARD_PATH, LOGIN_PATH};

const REGISTER_FAILED_FALLBACK: &str = "Error al crear la cuenta";
const MISSING_FIELDS: &str = "Completa nombre, email y contraseña.";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    full_name: String,
    email: String,
    phone_number: String,
    password: String,
}

impl RegisterForm {
    /// Trim text fields, drop an empty phone, and require the rest.
    fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        let full_name = self.full_name.trim();
        let email = self.email.trim();
        if full_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(MISSING_FIELDS);
        }
        let phone_number = Some(self.phone_number.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_owned);
        Ok(RegisterRequest {
            email: email.to_owned(),
            password: self.password.clone(),
            full_name: full_name.to_owned(),
            phone_number,
        })
    }
}

fn register_failure_message(err: &AuthError) -> String {
    err.user_message(REGISTER_FAILED_FALLBACK)
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Creando cuenta..." } else { "Crear Cuenta" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let profile = match form.with_untracked(RegisterForm::to_request) {
            Ok(profile) => profile,
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
            match auth.register(profile).await {
                Ok(user) => {
                    leptos::logging::log!("registered user {}", user.id);
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    info.set(register_failure_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Crea tu Cuenta"</h1>
                <p class="auth-card__subtitle">"Empieza tu viaje hacia una vida más saludable"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Nombre Completo"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="tu@email.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Teléfono (Opcional)"
                        <input
                            class="auth-input"
                            type="tel"
                            placeholder="+506 12345678"
                            prop:value=move || form.with(|f| f.phone_number.clone())
                            on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Contraseña"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
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
                    "¿Ya tienes una cuenta? "
                    <A href=LOGIN_PATH>"Inicia Sesión"</A>
                </p>
            </div>
        </div>
    }
}
