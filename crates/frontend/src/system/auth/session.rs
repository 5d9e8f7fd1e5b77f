use contracts::system::auth::UserInfo;
use contracts::system::role::Role;

/// How much we trust the current token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    /// Restored from storage; not yet confirmed by a backend call.
    Tentative,
    /// Issued by a login, or confirmed by a successful authenticated call.
    Confirmed,
}

/// Who is logged in. Only `SessionStore` writes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub status: SessionStatus,
    pub current_user: Option<UserInfo>,
    pub token: Option<String>,
}

impl Session {
    pub fn confirmed(token: String, user: UserInfo) -> Self {
        Self {
            status: SessionStatus::Confirmed,
            current_user: Some(user),
            token: Some(token),
        }
    }

    pub fn tentative(token: String, user: UserInfo) -> Self {
        Self {
            status: SessionStatus::Tentative,
            current_user: Some(user),
            token: Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status != SessionStatus::Anonymous
            && self.token.is_some()
            && self.current_user.is_some()
    }

    /// Role of the authenticated user; `None` for anonymous sessions.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated() {
            return None;
        }
        self.current_user.as_ref().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_tentative_session_counts_as_authenticated() {
        let session = Session::tentative("t".into(), UserInfo::synthesized("", Role::Unassigned));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Unassigned));
    }

    #[test]
    fn test_anonymous_status_hides_stale_user() {
        let session = Session {
            status: SessionStatus::Anonymous,
            current_user: Some(UserInfo::synthesized("x", Role::Admin)),
            token: Some("t".into()),
        };
        assert_eq!(session.role(), None);
    }
}
