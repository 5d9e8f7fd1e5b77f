use crate::domain::ui::list::ResourceScreen;
use crate::layout::Shell;
use crate::routes::paths;
use crate::system::access::Feature;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Shell for every signed-in screen.
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=paths::DASHBOARD /> } />
                    // The dashboard only requires a session so it is always a safe redirect target.
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route
                        path=path!("pickup-requests")
                        view=|| view! { <ResourceScreen feature=Feature::PickupRequests /> }
                    />
                    <Route
                        path=path!("bookings")
                        view=|| view! { <ResourceScreen feature=Feature::Bookings /> }
                    />
                    <Route
                        path=path!("services")
                        view=|| view! { <ResourceScreen feature=Feature::Services /> }
                    />
                    <Route
                        path=path!("staff")
                        view=|| view! { <ResourceScreen feature=Feature::Staff /> }
                    />
                    <Route
                        path=path!("customers")
                        view=|| view! { <ResourceScreen feature=Feature::Customers /> }
                    />
                    <Route
                        path=path!("inquiries")
                        view=|| view! { <ResourceScreen feature=Feature::Inquiries /> }
                    />
                    <Route
                        path=path!("notifications")
                        view=|| view! { <ResourceScreen feature=Feature::Notifications /> }
                    />
                    <Route
                        path=path!("employees")
                        view=|| view! { <ResourceScreen feature=Feature::Employees /> }
                    />
                    <Route
                        path=path!("blog")
                        view=|| view! { <ResourceScreen feature=Feature::Blog /> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
