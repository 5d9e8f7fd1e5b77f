use serde::{Deserialize, Serialize};
use std::fmt;

use super::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Body returned by the personnel login endpoint.
///
/// Only `token` decides success; `user` and `role` are optional extras.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub role: Option<String>,
}

/// User object as the backend sends it. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Backend user ids come as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl Default for UserId {
    fn default() -> Self {
        UserId::Number(0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// Resolved identity of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserInfo {
    /// Minimal identity used when the backend tells us nothing about the user.
    pub fn synthesized(username: &str, role: Role) -> Self {
        Self {
            id: UserId::default(),
            name: username.to_string(),
            username: username.to_string(),
            role,
            avatar: None,
        }
    }

    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else if !self.username.trim().is_empty() {
            &self.username
        } else {
            "Unknown user"
        }
    }
}

impl LoginResponse {
    /// Token, if the backend sent a non-empty one.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Role label the backend attached to the response, or the fallback label.
    pub fn role_label(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.role.as_deref())
            .or(self.role.as_deref())
            .unwrap_or(Role::FALLBACK_LABEL)
    }

    /// Build the user identity for a successful login.
    ///
    /// Missing user fields are filled from the submitted username; the role
    /// falls back to the top-level `role` and then to `"user"`.
    pub fn resolve_user(&self, submitted_username: &str) -> UserInfo {
        let role = Role::parse(self.role_label());
        match &self.user {
            Some(user) => {
                let username = user
                    .username
                    .clone()
                    .unwrap_or_else(|| submitted_username.to_string());
                UserInfo {
                    id: user.id.clone().unwrap_or_default(),
                    name: user.name.clone().unwrap_or_else(|| username.clone()),
                    username,
                    role,
                    avatar: user.avatar.clone().filter(|a| !a.is_empty()),
                }
            }
            None => UserInfo::synthesized(submitted_username, role),
        }
    }
}
