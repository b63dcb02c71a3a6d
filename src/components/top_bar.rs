//! Desktop header with the brand and the signed-in user's controls.

use leptos::prelude::*;

use crate::state::auth::AuthContext;

pub const BRAND_NAME: &str = "Nonito's Food";

#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let session = auth.state();

    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.full_name.clone()));

    // Logging out flips the session; the surrounding ProtectedRoute redirects.
    let on_logout = move |_| auth.logout();

    view! {
        <header class="top-bar">
            <div class="top-bar__inner">
                <h1 class="top-bar__brand">{BRAND_NAME}</h1>
                <div class="top-bar__session" class:hidden=move || user_name().is_none()>
                    <span class="top-bar__user">{move || user_name().unwrap_or_default()}</span>
                    <button class="top-bar__logout" type="button" on:click=on_logout>
                        "Cerrar sesión"
                    </button>
                </div>
            </div>
        </header>
    }
}
