use crate::routes::paths;
use crate::system::auth::context::use_session_store;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance};

/// Top bar with the signed-in user and the logout action.
#[component]
pub fn Header() -> impl IntoView {
    let store = use_session_store();
    let navigate = use_navigate();

    let user = {
        let store = store.clone();
        move || store.current_user()
    };

    let on_logout = move |_| {
        store.logout();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__spacer"></div>
            <div class="top-header__user">
                {move || user().map(|info| {
                    let avatar = info.avatar.clone();
                    view! {
                        {avatar.map(|src| view! { <img class="top-header__avatar" src=src alt="" /> })}
                        <span class="top-header__name">{info.display_name().to_string()}</span>
                        <span class="top-header__role">{info.role.label()}</span>
                    }
                })}
                <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                    "Logout"
                </Button>
            </div>
        </header>
    }
}
