use crate::config::AppConfig;
use crate::layout::left::navbar::NavBadges;
use crate::routes::routes::AppRoutes;
use crate::shared::http::BrowserTransport;
use crate::system::auth::context::{provide_session_store, SessionStore};
use crate::system::auth::storage::browser_storage;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("backend origin: {}", config.api_origin);

    let store = SessionStore::new(&config, Arc::new(BrowserTransport), browser_storage());
    // Must run before the first route guard evaluates.
    store.restore_from_persisted_token();

    let badges = NavBadges::new();
    {
        let store = store.clone();
        // Covers expiry on 401 as well as manual logout.
        Effect::new(move |_| badges.follow_session(&store.current_session()));
    }

    provide_context(config);
    provide_session_store(store);
    provide_context(badges);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
