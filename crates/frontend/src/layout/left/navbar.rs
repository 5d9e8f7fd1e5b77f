use crate::shared::icons;
use crate::system::access::{can_access, AccessPolicy, Feature};
use crate::system::auth::context::use_session_store;
use crate::system::auth::session::Session;
use leptos::prelude::*;
use leptos_router::components::A;
use std::collections::HashMap;

/// One entry of the sidebar menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub badge_count: Option<usize>,
    pub required_feature: Feature,
}

impl NavEntry {
    pub fn for_feature(feature: Feature) -> Self {
        Self {
            label: feature.label(),
            path: feature.path(),
            icon: feature.icon(),
            badge_count: None,
            required_feature: feature,
        }
    }
}

/// Master menu, in display order.
pub fn nav_entries() -> Vec<NavEntry> {
    Feature::ALL.into_iter().map(NavEntry::for_feature).collect()
}

/// Entries the session may open, in their original order.
pub fn filter_menu(entries: &[NavEntry], session: &Session, policy: &AccessPolicy) -> Vec<NavEntry> {
    entries
        .iter()
        .filter(|entry| can_access(session, policy, entry.required_feature))
        .cloned()
        .collect()
}

/// Pending-work counters shown next to menu entries.
///
/// List screens publish their count after each load.
#[derive(Clone, Copy)]
pub struct NavBadges(RwSignal<HashMap<Feature, usize>>);

impl NavBadges {
    pub fn new() -> Self {
        Self(RwSignal::new(HashMap::new()))
    }

    pub fn publish(&self, feature: Feature, count: usize) {
        self.0.update(|badges| {
            if count == 0 {
                badges.remove(&feature);
            } else {
                badges.insert(feature, count);
            }
        });
    }

    pub fn get(&self, feature: Feature) -> Option<usize> {
        self.0.with(|badges| badges.get(&feature).copied())
    }

    pub fn clear(&self) {
        self.0.set(HashMap::new());
    }

    /// Drop every count once nobody is signed in, however the session ended.
    pub fn follow_session(&self, session: &Session) {
        if !session.is_authenticated() && self.0.with_untracked(|badges| !badges.is_empty()) {
            self.clear();
        }
    }
}

impl Default for NavBadges {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav_badges() -> NavBadges {
    use_context::<NavBadges>().expect("NavBadges not provided in component tree")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_session_store();
    let badges = use_nav_badges();

    let entries = move || {
        let mut visible = filter_menu(&nav_entries(), &store.current_session(), store.policy());
        for entry in visible.iter_mut() {
            entry.badge_count = badges.get(entry.required_feature);
        }
        visible
    };

    view! {
        <nav class="main-nav-bar">
            <ul>
                {move || entries().into_iter().map(|entry| {
                    view! {
                        <li>
                            <A href=entry.path>
                                {icons::icon(entry.icon)}
                                <span>{entry.label}</span>
                                {entry.badge_count.map(|count| view! {
                                    <span class="nav-badge">{count}</span>
                                })}
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;
    use contracts::system::role::Role;

    fn signed_in(role: Role) -> Session {
        Session::confirmed("tok".into(), UserInfo::synthesized("u", role))
    }

    #[test]
    fn test_filter_preserves_master_order() {
        let policy = AccessPolicy::default()
            .grant(Role::Staff, &[Feature::Bookings, Feature::Customers])
            .grant(Role::Admin, &[Feature::Services]);
        let entries = vec![
            NavEntry::for_feature(Feature::Customers),
            NavEntry::for_feature(Feature::Services),
            NavEntry::for_feature(Feature::Bookings),
        ];

        let visible = filter_menu(&entries, &signed_in(Role::Staff), &policy);
        assert_eq!(visible, vec![entries[0].clone(), entries[2].clone()]);
    }

    #[test]
    fn test_anonymous_sees_no_entries() {
        let visible = filter_menu(&nav_entries(), &Session::default(), AccessPolicy::built_in());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_staff_menu() {
        let visible: Vec<Feature> = filter_menu(&nav_entries(), &signed_in(Role::Staff), AccessPolicy::built_in())
            .into_iter()
            .map(|e| e.required_feature)
            .collect();
        assert_eq!(
            visible,
            vec![
                Feature::Dashboard,
                Feature::PickupRequests,
                Feature::Bookings,
                Feature::Customers,
                Feature::Inquiries,
                Feature::Notifications,
            ]
        );
    }

    #[test]
    fn test_badges_publish_and_clear() {
        let owner = Owner::new();
        owner.set();

        let badges = NavBadges::new();
        badges.publish(Feature::Bookings, 3);
        badges.publish(Feature::Inquiries, 1);
        assert_eq!(badges.get(Feature::Bookings), Some(3));

        badges.publish(Feature::Bookings, 0);
        assert_eq!(badges.get(Feature::Bookings), None);
        assert_eq!(badges.get(Feature::Inquiries), Some(1));

        badges.clear();
        assert_eq!(badges.get(Feature::Inquiries), None);
    }

    #[test]
    fn test_badges_dropped_when_session_ends() {
        let owner = Owner::new();
        owner.set();

        let badges = NavBadges::new();
        badges.publish(Feature::PickupRequests, 2);

        badges.follow_session(&signed_in(Role::Staff));
        assert_eq!(badges.get(Feature::PickupRequests), Some(2));

        badges.follow_session(&Session::default());
        assert_eq!(badges.get(Feature::PickupRequests), None);
    }

    #[test]
    fn test_master_list_covers_every_feature_once() {
        let entries = nav_entries();
        assert_eq!(entries.len(), Feature::ALL.len());
        assert_eq!(entries[0].path, "/dashboard");
    }
}
