use crate::{
    api::ApiError,
    components::{authors::AuthorsList, error::InlineErrorMessage},
    state::session::{identity_label, use_logout_action, use_session},
    utils::time::current_year,
};
use leptos::*;
use leptos_router::use_location;

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("/dashboard", "Dashboard"),
    ("/locks", "Locks"),
    ("/lock-events", "Events"),
];

pub fn is_active(current: &str, href: &str) -> bool {
    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
fn NavLink(href: &'static str, label: &'static str, current: Memo<String>) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || if is_active(&current.get(), href) { "nav-link active" } else { "nav-link" }
        >
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let current = create_memo(move |_| location.pathname.get());
    let session = use_session();
    let logout_action = use_logout_action();

    view! {
        <header class="app-header">
            <div class="brand">"SkiLock"</div>
            <nav class="nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <NavLink href=href label=label current=current /> })
                    .collect_view()}
            </nav>
            <div class="identity">
                {move || {
                    session
                        .me
                        .get()
                        .and_then(Result::ok)
                        .map(|me| view! { <span class="muted">{identity_label(&me)}</span> })
                }}
                <LogoutButton action=logout_action />
            </div>
        </header>
    }
}

/// Leaves for `/login` only once the cookie is cleared; a failed logout stays
/// on the page with the error shown.
#[component]
pub fn LogoutButton(action: Action<(), Result<(), ApiError>>) -> impl IntoView {
    let pending = action.pending();
    let value = action.value();
    create_effect(move |_| {
        if matches!(value.get(), Some(Ok(()))) {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/login");
            }
        }
    });
    let error = Signal::derive(move || value.get().and_then(Result::err));
    let on_logout = move |_| {
        if pending.get_untracked() {
            return;
        }
        action.dispatch(());
    };

    view! {
        <button class="btn" on:click=on_logout disabled=move || pending.get()>
            "Logout"
        </button>
        <InlineErrorMessage error=error />
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <span>{format!("© {} SkiLock", current_year())}</span>
            <AuthorsList />
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! { <div class="spinner" aria-busy="true">"Loading…"</div> }
}
