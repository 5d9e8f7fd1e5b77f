use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::{use_session_store, SessionStore};
use super::session::Session;
use crate::routes::paths;
use crate::system::access::{can_access, AccessPolicy, Feature};

/// Outcome of a route guard for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Render when signed in, otherwise send to the login screen.
pub fn check_authenticated(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(paths::LOGIN)
    }
}

/// Authenticated check plus the feature permission.
///
/// Denied users are sent to the dashboard without an error, so a forbidden
/// screen looks the same as one that moved.
pub fn check_feature(session: &Session, policy: &AccessPolicy, feature: Feature) -> GuardDecision {
    match check_authenticated(session) {
        GuardDecision::Render if can_access(session, policy, feature) => GuardDecision::Render,
        GuardDecision::Render => GuardDecision::Redirect(paths::DASHBOARD),
        redirect => redirect,
    }
}

fn render(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Render => children(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}

/// Guard decision that only notifies when it flips.
///
/// Session writes that keep the outcome (a tentative session being
/// confirmed) must not rebuild the guarded subtree.
pub fn decision_memo<F>(store: SessionStore, check: F) -> Memo<GuardDecision>
where
    F: Fn(&Session, &AccessPolicy) -> GuardDecision + Send + Sync + 'static,
{
    Memo::new(move |_| check(&store.current_session(), store.policy()))
}

/// Component that requires authentication
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let decision = decision_memo(use_session_store(), |session, _| check_authenticated(session));
    move || render(decision.get(), &children)
}

/// Component that requires a permitted feature
#[component]
pub fn RequireFeature(feature: Feature, children: ChildrenFn) -> impl IntoView {
    let decision = decision_memo(use_session_store(), move |session, policy| {
        check_feature(session, policy, feature)
    });
    move || render(decision.get(), &children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;
    use contracts::system::role::Role;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::config::AppConfig;
    use crate::shared::http::testing::ScriptedTransport;
    use crate::system::auth::session::SessionStatus;
    use crate::system::auth::storage::{MemoryTokenStorage, TokenStorage, AUTH_TOKEN_KEY};

    fn signed_in(role: Role) -> Session {
        Session::confirmed("tok".into(), UserInfo::synthesized("u", role))
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let session = Session::default();
        assert_eq!(check_authenticated(&session), GuardDecision::Redirect("/login"));
        assert_eq!(
            check_feature(&session, AccessPolicy::built_in(), Feature::Bookings),
            GuardDecision::Redirect("/login")
        );
    }

    #[test]
    fn test_forbidden_feature_redirects_to_dashboard() {
        let decision = check_feature(&signed_in(Role::Staff), AccessPolicy::built_in(), Feature::Employees);
        assert_eq!(decision, GuardDecision::Redirect("/dashboard"));
    }

    #[test]
    fn test_permitted_feature_renders() {
        let policy = AccessPolicy::built_in();
        assert_eq!(check_authenticated(&signed_in(Role::Unassigned)), GuardDecision::Render);
        assert_eq!(check_feature(&signed_in(Role::Admin), policy, Feature::Employees), GuardDecision::Render);
        assert_eq!(check_feature(&signed_in(Role::User), policy, Feature::PickupRequests), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_decision_survives_session_confirmation() {
        let owner = Owner::new();
        owner.set();

        let storage = Arc::new(MemoryTokenStorage::default());
        storage.save(AUTH_TOKEN_KEY, "tok");
        let store = SessionStore::new(
            &AppConfig::with_origin("http://api.test"),
            Arc::new(ScriptedTransport::default().reply(200, "[]")),
            storage,
        );
        store.restore_from_persisted_token();

        let decision = decision_memo(store.clone(), |session, _| check_authenticated(session));
        let runs = Arc::new(AtomicUsize::new(0));
        let rendered = {
            let runs = runs.clone();
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                decision.get()
            })
        };
        assert_eq!(rendered.get(), GuardDecision::Render);

        store.get_json::<serde_json::Value>("/api/bookings").await.unwrap();
        assert_eq!(store.session_untracked().status, SessionStatus::Confirmed);
        assert_eq!(rendered.get(), GuardDecision::Render);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store.logout();
        assert_eq!(rendered.get(), GuardDecision::Redirect(paths::LOGIN));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
