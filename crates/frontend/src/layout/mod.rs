pub mod header;
pub mod left;

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |  Header                      |
/// |           +------------------------------+
/// |           |  routed screen (Outlet)      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Sidebar />
            <div class="app-body">
                <header::Header />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
