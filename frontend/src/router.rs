use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{DashboardPage, HomePage, LockEventsPage, LocksPage, LoginPage},
    state::session::provide_session,
};

/// Mirrors the backend's default protected prefixes.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/locks", "/lock-events"];

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage />
                <Route path="/login" view=LoginPage />
                <Route path="/dashboard" view=Protected>
                    <Route path="" view=DashboardPage />
                </Route>
                <Route path="/locks" view=Protected>
                    <Route path="" view=LocksPage />
                </Route>
                <Route path="/lock-events" view=Protected>
                    <Route path="" view=LockEventsPage />
                </Route>
            </Routes>
        </Router>
    }
}

/// Protected pages share one `me` lookup; a 401 from it sends the browser
/// to the login page.
#[component]
fn Protected() -> impl IntoView {
    provide_session();
    view! { <Outlet /> }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_at(path: &str) -> String {
        let url = format!("http://localhost{}", path);
        render_to_string(move || {
            provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
            app_root()
        })
    }

    #[test]
    fn each_protected_path_renders_its_page() {
        let captions = [
            "Overview of lock health and recent activity.",
            "Lock and unlock by locker.",
            "Lock activity log.",
        ];
        assert_eq!(PROTECTED_ROUTE_PATHS.len(), captions.len());
        for (path, caption) in PROTECTED_ROUTE_PATHS.iter().zip(captions) {
            let html = render_at(path);
            assert!(html.contains(caption), "{} did not render its page", path);
            for other in captions.iter().filter(|c| **c != caption) {
                assert!(!html.contains(other), "{} rendered another page", path);
            }
            assert!(html.contains("Logout"), "{} is missing the layout", path);
        }
    }

    #[test]
    fn login_renders_without_layout() {
        let html = render_at("/login");
        assert!(html.contains("Sign in to manage locks"));
        assert!(!html.contains("Logout"));
        assert!(!html.contains("Lock activity log."));
    }
}
