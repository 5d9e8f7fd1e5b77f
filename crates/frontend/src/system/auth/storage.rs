use contracts::system::auth::UserInfo;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use web_sys::window;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const AUTH_USER_KEY: &str = "authUser";

/// A named-slot key/value store that survives page reloads.
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

impl LocalTokenStorage {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }

    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Process-local storage, for browsers that refuse `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

/// Storage used by the running app.
pub fn browser_storage() -> Arc<dyn TokenStorage> {
    if LocalTokenStorage::is_available() {
        Arc::new(LocalTokenStorage)
    } else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        Arc::new(MemoryTokenStorage::default())
    }
}

/// Token and user identity as persisted between page loads.
#[derive(Clone)]
pub struct PersistedCredentials {
    storage: Arc<dyn TokenStorage>,
}

impl PersistedCredentials {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub fn save(&self, token: &str, user: &UserInfo) {
        self.storage.save(AUTH_TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.storage.save(AUTH_USER_KEY, &json),
            Err(e) => log::warn!("failed to persist user identity: {}", e),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .load(AUTH_TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    /// Stored identity; unreadable entries are treated as absent.
    pub fn user(&self) -> Option<UserInfo> {
        let json = self.storage.load(AUTH_USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    pub fn clear(&self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(AUTH_USER_KEY);
    }
}
