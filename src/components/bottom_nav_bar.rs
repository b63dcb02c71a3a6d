//! Mobile bottom navigation.

use leptos::prelude::*;

/// Sections shown in the mobile nav, in display order.
pub const NAV_ITEMS: [&str; 4] = ["Home", "Menu", "Orders", "Profile"];

#[component]
pub fn BottomNavBar() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            <div class="bottom-nav__items">
                {NAV_ITEMS
                    .iter()
                    .map(|label| {
                        view! {
                            <div class="bottom-nav__item">
                                <p>{*label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
