use super::feature::Feature;
use super::policy::AccessPolicy;
use crate::system::auth::session::Session;

/// May the session's user open `feature`?
///
/// Anonymous sessions are always denied.
pub fn can_access(session: &Session, policy: &AccessPolicy, feature: Feature) -> bool {
    match session.role() {
        Some(role) => policy.permits(role, feature),
        None => false,
    }
}

/// Same check by feature key. Unknown keys are denied.
pub fn has_access(session: &Session, policy: &AccessPolicy, feature_key: &str) -> bool {
    Feature::from_key(feature_key)
        .map(|feature| can_access(session, policy, feature))
        .unwrap_or(false)
}
