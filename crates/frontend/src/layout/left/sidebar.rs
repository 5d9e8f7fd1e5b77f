//! Sidebar: brand block plus the role-filtered navigation menu.

use super::navbar::Navbar;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside data-zone="left" class="left">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"♻"</span>
                <span class="sidebar__title">"EcoClean Admin"</span>
            </div>
            <Navbar />
        </aside>
    }
}
