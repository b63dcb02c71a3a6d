//! Page frame for signed-in screens: top bar, content, mobile bottom nav.

use leptos::prelude::*;

use crate::components::bottom_nav_bar::BottomNavBar;
use crate::components::top_bar::TopBar;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="main-layout">
            <TopBar/>
            <main class="main-layout__content">{children()}</main>
            <BottomNavBar/>
        </div>
    }
}
