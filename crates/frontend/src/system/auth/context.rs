use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use contracts::system::role::Role;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::error::LoginError;
use super::session::{Session, SessionStatus};
use super::storage::{PersistedCredentials, TokenStorage};
use crate::config::AppConfig;
use crate::shared::http::{ApiClient, ApiError, Transport};
use crate::system::access::{self, AccessPolicy};

/// Single owner of the session.
///
/// Cheap to clone; every clone shares the same session, credential and
/// login generation. Provided at the app root and read by guards, the
/// navigation menu and the screens.
#[derive(Clone)]
pub struct SessionStore {
    session: ArcRwSignal<Session>,
    client: ApiClient,
    credentials: PersistedCredentials,
    policy: &'static AccessPolicy,
    login_path: Arc<str>,
    generation: Arc<AtomicU64>,
}

impl SessionStore {
    pub fn new(config: &AppConfig, transport: Arc<dyn Transport>, storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            session: ArcRwSignal::new(Session::default()),
            client: ApiClient::new(&config.api_origin, transport),
            credentials: PersistedCredentials::new(storage),
            policy: AccessPolicy::built_in(),
            login_path: Arc::from(config.login_path.as_str()),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current session; tracked, so views re-render when it changes.
    pub fn current_session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.current_user.clone())
    }

    pub fn has_access(&self, feature_key: &str) -> bool {
        self.session
            .with(|s| access::has_access(s, self.policy, feature_key))
    }

    pub fn policy(&self) -> &'static AccessPolicy {
        self.policy
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Authenticate against the personnel login endpoint.
    ///
    /// On success the token is persisted, becomes the default bearer
    /// credential and the session is confirmed. Any failure clears the
    /// session. A response that arrives after a newer login or a logout
    /// started is discarded with `LoginError::Superseded`.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, LoginError> {
        let generation = self.next_generation();
        let request = LoginRequest {
            user_name: username.to_string(),
            password: password.to_string(),
        };

        let result: Result<LoginResponse, ApiError> =
            self.client.post_json(&self.login_path, &request).await;

        if generation != self.generation.load(Ordering::SeqCst) {
            log::debug!("discarding stale login response for '{}'", username);
            return Err(LoginError::Superseded);
        }

        let outcome = result.map_err(LoginError::from).and_then(|response| {
            let token = response
                .token()
                .map(str::to_string)
                .ok_or(LoginError::InvalidCredentials)?;
            Ok((token, response))
        });

        match outcome {
            Ok((token, response)) => {
                if !Role::is_known_label(response.role_label()) {
                    log::warn!(
                        "unknown role label '{}' for '{}', no screens will be granted",
                        response.role_label(),
                        username
                    );
                }
                let user = response.resolve_user(username);
                self.credentials.save(&token, &user);
                self.client.set_default_token(&token);
                self.session.set(Session::confirmed(token, user.clone()));
                log::info!("logged in as '{}' ({})", user.username, user.role);
                Ok(user)
            }
            Err(error) => {
                log::warn!("login failed for '{}': {}", username, error);
                self.clear();
                Err(error)
            }
        }
    }

    /// Forget the session, the persisted token and the default credential.
    pub fn logout(&self) {
        self.next_generation();
        self.clear();
        log::info!("logged out");
    }

    /// Re-attach a persisted token at startup.
    ///
    /// The session becomes tentative: it counts as authenticated, and the
    /// first authenticated call either confirms it or, on 401, expires it.
    pub fn restore_from_persisted_token(&self) {
        let Some(token) = self.credentials.token() else {
            log::debug!("no persisted token");
            return;
        };
        let user = self
            .credentials
            .user()
            .unwrap_or_else(|| UserInfo::synthesized("", Role::Unassigned));

        self.client.set_default_token(&token);
        let restored = Session::tentative(token, user);
        if self.session.with_untracked(|s| *s != restored) {
            log::debug!("restored session for '{}'", restored.current_user.as_ref().map(|u| u.display_name()).unwrap_or_default());
            self.session.set(restored);
        }
    }

    /// Authenticated GET used by the screens.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let sent_with = self.client.default_token();
        let result = self.client.get_json(path).await;
        self.observe(sent_with.as_deref(), &result);
        result
    }

    /// Authenticated DELETE used by the screens.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let sent_with = self.client.default_token();
        let result = self.client.delete(path).await;
        self.observe(sent_with.as_deref(), &result);
        result
    }

    /// Promote or expire the session a reply belongs to.
    ///
    /// Replies to requests sent under another token (an older session, or
    /// before a login finished) leave the current session alone.
    fn observe<T>(&self, sent_with: Option<&str>, result: &Result<T, ApiError>) {
        let current = self
            .session
            .with_untracked(|s| s.is_authenticated() && s.token.as_deref() == sent_with);
        if !current {
            return;
        }
        match result {
            Ok(_) => {
                if self.session.with_untracked(|s| s.status == SessionStatus::Tentative) {
                    self.session.update(|s| s.status = SessionStatus::Confirmed);
                }
            }
            Err(ApiError::Unauthorized) => {
                log::warn!("backend rejected the session token, signing out");
                self.clear();
            }
            Err(_) => {}
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn clear(&self) {
        self.credentials.clear();
        self.client.clear_default_token();
        self.session.set(Session::default());
    }
}

pub fn provide_session_store(store: SessionStore) {
    provide_context(store);
}

/// Hook to access the session store
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not provided in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::ScriptedTransport;
    use crate::system::auth::storage::{MemoryTokenStorage, AUTH_TOKEN_KEY, AUTH_USER_KEY};
    use contracts::system::auth::UserId;

    const ADMIN_LOGIN: &str =
        r#"{"token":"abc123","user":{"id":1,"name":"Admin","username":"admin","role":"admin"}}"#;

    struct Fixture {
        store: SessionStore,
        transport: Arc<ScriptedTransport>,
        storage: Arc<MemoryTokenStorage>,
    }

    fn fixture(transport: ScriptedTransport) -> Fixture {
        let transport = Arc::new(transport);
        let storage = Arc::new(MemoryTokenStorage::default());
        let store = SessionStore::new(
            &AppConfig::with_origin("http://api.test"),
            transport.clone(),
            storage.clone(),
        );
        Fixture { store, transport, storage }
    }

    #[tokio::test]
    async fn test_admin_login_end_to_end() {
        let fx = fixture(ScriptedTransport::default().reply(200, ADMIN_LOGIN));

        let user = fx.store.login("admin", "secret").await.unwrap();
        assert_eq!(user.id, UserId::Number(1));

        let session = fx.store.session_untracked();
        assert!(session.is_authenticated());
        assert_eq!(session.status, SessionStatus::Confirmed);
        assert_eq!(session.current_user.unwrap().role, Role::Admin);
        assert!(fx.store.has_access("employees"));
        assert_eq!(fx.storage.load(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(fx.store.client().default_token().as_deref(), Some("abc123"));

        let sent = fx.transport.sent();
        assert_eq!(sent[0].url, "http://api.test/api/personnel/login");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userName"], "admin");
        assert_eq!(body["password"], "secret");
    }

    #[tokio::test]
    async fn test_staff_login_lacks_employees() {
        let fx = fixture(ScriptedTransport::default().reply(
            200,
            r#"{"token":"s1","user":{"id":2,"name":"Sam","username":"sam","role":"staff"}}"#,
        ));
        fx.store.login("sam", "pw").await.unwrap();
        assert!(fx.store.has_access("pickup-requests"));
        assert!(!fx.store.has_access("employees"));
    }

    #[tokio::test]
    async fn test_login_without_user_object_synthesizes_identity() {
        let fx = fixture(ScriptedTransport::default().reply(200, r#"{"token":"t"}"#));
        let user = fx.store.login("kojo", "pw").await.unwrap();
        assert_eq!(user, UserInfo::synthesized("kojo", Role::User));
        assert!(fx.store.current_user().is_some());
    }

    #[tokio::test]
    async fn test_rejected_credentials_clear_the_session() {
        let fx = fixture(
            ScriptedTransport::default()
                .reply(200, ADMIN_LOGIN)
                .reply(401, r#"{"message":"bad credentials"}"#),
        );
        fx.store.login("admin", "secret").await.unwrap();

        let err = fx.store.login("admin", "wrong").await.unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);

        let session = fx.store.session_untracked();
        assert!(!session.is_authenticated());
        assert!(session.current_user.is_none());
        assert_eq!(fx.storage.load(AUTH_TOKEN_KEY), None);
        assert_eq!(fx.store.client().default_token(), None);
    }

    #[tokio::test]
    async fn test_response_without_token_is_a_failure() {
        let fx = fixture(ScriptedTransport::default().reply(200, r#"{"user":{"name":"x"}}"#));
        let err = fx.store.login("x", "y").await.unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
        assert!(!fx.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_network_and_server_failures_are_distinguished() {
        let fx = fixture(
            ScriptedTransport::default()
                .fail(ApiError::Network("offline".into()))
                .reply(503, "")
                .reply(200, "<html>"),
        );
        assert!(matches!(fx.store.login("a", "b").await, Err(LoginError::Network(_))));
        assert_eq!(fx.store.login("a", "b").await, Err(LoginError::Server(503)));
        assert!(matches!(
            fx.store.login("a", "b").await,
            Err(LoginError::MalformedResponse(_))
        ));
        assert!(!fx.store.is_authenticated());
        assert!(fx.store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let fx = fixture(ScriptedTransport::default().reply(200, ADMIN_LOGIN));
        fx.store.login("admin", "secret").await.unwrap();

        fx.store.logout();

        let session = fx.store.session_untracked();
        assert!(!session.is_authenticated());
        assert!(session.current_user.is_none());
        assert!(session.token.is_none());
        assert_eq!(fx.storage.load(AUTH_TOKEN_KEY), None);
        assert_eq!(fx.storage.load(AUTH_USER_KEY), None);
        assert_eq!(fx.store.client().default_token(), None);
    }

    #[tokio::test]
    async fn test_restore_is_idempotent_and_keeps_role() {
        let fx = fixture(ScriptedTransport::default().reply(200, ADMIN_LOGIN));
        fx.store.login("admin", "secret").await.unwrap();

        // A fresh store over the same storage models a page reload.
        let reloaded = SessionStore::new(
            &AppConfig::with_origin("http://api.test"),
            fx.transport.clone(),
            fx.storage.clone(),
        );
        reloaded.restore_from_persisted_token();
        let once = reloaded.session_untracked();
        reloaded.restore_from_persisted_token();
        let twice = reloaded.session_untracked();

        assert_eq!(once, twice);
        assert_eq!(once.status, SessionStatus::Tentative);
        assert_eq!(once.token.as_deref(), Some("abc123"));
        assert!(reloaded.has_access("employees"));
        assert_eq!(reloaded.client().default_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_restore_without_token_stays_anonymous() {
        let fx = fixture(ScriptedTransport::default());
        fx.store.restore_from_persisted_token();
        assert!(!fx.store.is_authenticated());
        assert!(fx.transport.sent().is_empty());
    }

    #[test]
    fn test_restore_without_stored_user_synthesizes_unassigned() {
        let fx = fixture(ScriptedTransport::default());
        fx.storage.save(AUTH_TOKEN_KEY, "legacy");
        fx.store.restore_from_persisted_token();

        let session = fx.store.session_untracked();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Unassigned));
        assert!(!fx.store.has_access("dashboard"));
    }

    #[tokio::test]
    async fn test_successful_call_confirms_restored_session() {
        let fx = fixture(ScriptedTransport::default().reply(200, "[]"));
        fx.storage.save(AUTH_TOKEN_KEY, "tok");
        fx.store.restore_from_persisted_token();

        let rows: Vec<serde_json::Value> = fx.store.get_json("/api/bookings").await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(fx.store.session_untracked().status, SessionStatus::Confirmed);
        assert_eq!(fx.transport.sent()[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_unauthorized_call_expires_session() {
        let fx = fixture(ScriptedTransport::default().reply(401, ""));
        fx.storage.save(AUTH_TOKEN_KEY, "expired");
        fx.store.restore_from_persisted_token();

        let result: Result<Vec<serde_json::Value>, _> = fx.store.get_json("/api/staff").await;
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(!fx.store.is_authenticated());
        assert_eq!(fx.storage.load(AUTH_TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_late_unauthorized_reply_spares_newer_login() {
        let fx = fixture(
            ScriptedTransport::default()
                .reply_after(30, 401, "")
                .reply(200, ADMIN_LOGIN),
        );
        fx.storage.save(AUTH_TOKEN_KEY, "expired");
        fx.store.restore_from_persisted_token();

        let (stale, login) = tokio::join!(
            fx.store.get_json::<Vec<serde_json::Value>>("/api/bookings"),
            fx.store.login("admin", "secret")
        );

        assert_eq!(stale, Err(ApiError::Unauthorized));
        assert_eq!(login.unwrap().username, "admin");
        let session = fx.store.session_untracked();
        assert!(session.is_authenticated());
        assert_eq!(session.status, SessionStatus::Confirmed);
        assert_eq!(session.token.as_deref(), Some("abc123"));
        assert_eq!(fx.storage.load(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(fx.store.client().default_token().as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_expiry_does_not_supersede_pending_login() {
        let fx = fixture(
            ScriptedTransport::default()
                .reply_after(30, 200, ADMIN_LOGIN)
                .reply(401, ""),
        );
        fx.storage.save(AUTH_TOKEN_KEY, "expired");
        fx.store.restore_from_persisted_token();

        let store = fx.store.clone();
        let (login, expired) = tokio::join!(fx.store.login("admin", "secret"), async move {
            store.get_json::<serde_json::Value>("/api/staff").await
        });

        assert_eq!(expired, Err(ApiError::Unauthorized));
        assert_eq!(login.unwrap().username, "admin");
        assert!(fx.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_server_error_keeps_session() {
        let fx = fixture(ScriptedTransport::default().reply(200, ADMIN_LOGIN).reply(500, ""));
        fx.store.login("admin", "secret").await.unwrap();

        let result = fx.store.delete("/api/blogs/1").await;
        assert_eq!(result, Err(ApiError::Status(500)));
        assert!(fx.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_stale_login_response_is_discarded() {
        let fx = fixture(
            ScriptedTransport::default()
                .reply_after(30, 200, r#"{"token":"old","role":"staff"}"#)
                .reply(200, ADMIN_LOGIN),
        );

        let (first, second) = tokio::join!(
            fx.store.login("sam", "pw"),
            fx.store.login("admin", "secret")
        );

        assert_eq!(first, Err(LoginError::Superseded));
        assert_eq!(second.unwrap().username, "admin");
        let session = fx.store.session_untracked();
        assert_eq!(session.token.as_deref(), Some("abc123"));
        assert_eq!(session.role(), Some(Role::Admin));
    }

    #[tokio::test]
    async fn test_login_finishing_after_logout_is_discarded() {
        let fx = fixture(ScriptedTransport::default().reply_after(30, 200, ADMIN_LOGIN));

        let store = fx.store.clone();
        let (result, _) = tokio::join!(fx.store.login("admin", "secret"), async move {
            store.logout();
        });

        assert_eq!(result, Err(LoginError::Superseded));
        assert!(!fx.store.is_authenticated());
        assert_eq!(fx.storage.load(AUTH_TOKEN_KEY), None);
    }
}
