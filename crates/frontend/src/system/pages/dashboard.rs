use crate::layout::left::navbar::{filter_menu, nav_entries};
use crate::shared::icons;
use crate::system::access::Feature;
use crate::system::auth::context::use_session_store;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// Landing screen: greeting plus a shortcut card per permitted screen.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_session_store();

    let greeting = {
        let store = store.clone();
        move || {
            store
                .current_user()
                .map(|u| format!("Welcome back, {}", u.display_name()))
                .unwrap_or_default()
        }
    };

    let shortcuts = move || {
        filter_menu(&nav_entries(), &store.current_session(), store.policy())
            .into_iter()
            .filter(|entry| entry.required_feature != Feature::Dashboard)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{greeting}</h1>
            </div>
            <div class="page__content dashboard-grid">
                {move || {
                    let entries = shortcuts();
                    if entries.is_empty() {
                        view! {
                            <p class="dashboard-empty">
                                "No modules are available for your role. Contact an administrator."
                            </p>
                        }
                        .into_any()
                    } else {
                        entries
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <A href=entry.path>
                                        <Card>
                                            <div class="dashboard-card">
                                                {icons::icon(entry.icon)}
                                                <span>{entry.label}</span>
                                            </div>
                                        </Card>
                                    </A>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
