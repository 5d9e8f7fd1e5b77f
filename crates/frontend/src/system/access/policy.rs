use contracts::system::role::Role;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

use super::feature::Feature;

/// Static role -> permitted features table.
///
/// A role missing from the table is granted nothing.
#[derive(Clone, Debug, Default)]
pub struct AccessPolicy {
    grants: HashMap<Role, BTreeSet<Feature>>,
}

static BUILT_IN: Lazy<AccessPolicy> = Lazy::new(|| {
    AccessPolicy::default()
        .grant(Role::Admin, &Feature::ALL)
        .grant(
            Role::Staff,
            &[
                Feature::Dashboard,
                Feature::PickupRequests,
                Feature::Bookings,
                Feature::Customers,
                Feature::Inquiries,
                Feature::Notifications,
            ],
        )
        .grant(
            Role::User,
            &[
                Feature::Dashboard,
                Feature::PickupRequests,
                Feature::Notifications,
            ],
        )
});

impl AccessPolicy {
    /// The table compiled into the dashboard.
    pub fn built_in() -> &'static AccessPolicy {
        &BUILT_IN
    }

    pub fn grant(mut self, role: Role, features: &[Feature]) -> Self {
        self.grants
            .entry(role)
            .or_default()
            .extend(features.iter().copied());
        self
    }

    pub fn permits(&self, role: Role, feature: Feature) -> bool {
        self.grants
            .get(&role)
            .map(|set| set.contains(&feature))
            .unwrap_or(false)
    }

    /// Permitted features of `role`, empty for unlisted roles.
    pub fn features_for(&self, role: Role) -> BTreeSet<Feature> {
        self.grants.get(&role).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_every_feature() {
        let policy = AccessPolicy::built_in();
        for feature in Feature::ALL {
            assert!(policy.permits(Role::Admin, feature), "admin lacks {}", feature);
        }
    }

    #[test]
    fn test_staff_cannot_manage_employees() {
        let policy = AccessPolicy::built_in();
        assert!(policy.permits(Role::Staff, Feature::PickupRequests));
        assert!(!policy.permits(Role::Staff, Feature::Employees));
        assert!(!policy.permits(Role::Staff, Feature::Blog));
    }

    #[test]
    fn test_unassigned_role_is_denied_everything() {
        let policy = AccessPolicy::built_in();
        assert!(policy.features_for(Role::Unassigned).is_empty());
        for feature in Feature::ALL {
            assert!(!policy.permits(Role::Unassigned, feature));
        }
    }

    #[test]
    fn test_empty_table_denies() {
        let policy = AccessPolicy::default();
        assert!(!policy.permits(Role::Admin, Feature::Dashboard));
    }
}
