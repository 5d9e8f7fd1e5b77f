use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a dashboard user.
///
/// The backend sends free-form labels; they are mapped onto this closed set
/// when the login response is parsed. Labels that match nothing become
/// `Unassigned`, which the access policy grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Staff,
    User,
    Unassigned,
}

impl Role {
    /// Role used when the backend does not name one.
    pub const FALLBACK_LABEL: &'static str = "user";

    /// Parse a backend role label (case-insensitive, surrounding whitespace ignored).
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "admin" | "administrator" | "superadmin" => Role::Admin,
            "staff" | "personnel" | "employee" => Role::Staff,
            "user" | "general" | "customer" => Role::User,
            _ => Role::Unassigned,
        }
    }

    /// Canonical key, as stored and sent back to the backend.
    pub fn key(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::User => "user",
            Role::Unassigned => "unassigned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Staff => "Staff",
            Role::User => "User",
            Role::Unassigned => "No role",
        }
    }

    /// True when `label` was recognised rather than defaulted.
    pub fn is_known_label(label: &str) -> bool {
        Role::parse(label) != Role::Unassigned
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.key().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("  STAFF "), Role::Staff);
        assert_eq!(Role::parse("user"), Role::User);
    }

    #[test]
    fn test_unknown_labels_are_unassigned() {
        assert_eq!(Role::parse("janitor"), Role::Unassigned);
        assert_eq!(Role::parse(""), Role::Unassigned);
        assert!(!Role::is_known_label("root"));
    }

    #[test]
    fn test_serde_uses_canonical_key() {
        let json = serde_json::to_string(&Role::Staff).unwrap();
        assert_eq!(json, "\"staff\"");

        let role: Role = serde_json::from_str("\"Administrator\"").unwrap();
        assert_eq!(role, Role::Admin);

        let unassigned: Role = serde_json::from_str("\"unassigned\"").unwrap();
        assert_eq!(unassigned, Role::Unassigned);
    }
}
