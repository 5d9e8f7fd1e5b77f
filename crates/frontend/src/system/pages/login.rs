use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::routes::paths;
use crate::system::auth::context::use_session_store;
use crate::system::auth::error::LoginError;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_session_store();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let already_signed_in = {
        let store = store.clone();
        move || store.is_authenticated()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let store = store.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match store.login(&username_val, &password_val).await {
                Ok(_) => {
                    set_is_loading.set(false);
                    navigate(paths::DASHBOARD, Default::default());
                }
                // Replaced by a logout or another attempt; nothing to report.
                Err(LoginError::Superseded) => set_is_loading.set(false),
                Err(e) => {
                    set_error_message.set(Some(e.user_message().to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <Show when=already_signed_in>
            <Redirect path=paths::DASHBOARD />
        </Show>
        <div class="login-container">
            <div class="login-box">
                <h1>"EcoClean"</h1>
                <h2>"Admin sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
