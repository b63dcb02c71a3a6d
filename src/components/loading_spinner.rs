//! Full-screen loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__content">
                <div class="loading-screen__spinner"></div>
                <p class="loading-screen__label">"Cargando..."</p>
            </div>
        </div>
    }
}
