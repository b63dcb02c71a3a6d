//! Admin landing page, reachable only with the `ADMIN` role.

use leptos::prelude::*;

use crate::components::main_layout::MainLayout;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <MainLayout>
            <section class="dashboard">
                <h2 class="dashboard__title">"Panel de administración"</h2>
                <p class="dashboard__placeholder">"Pedidos, menús y usuarios se gestionarán aquí."</p>
            </section>
        </MainLayout>
    }
}
