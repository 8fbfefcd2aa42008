use leptos::*;
use leptos_router::Redirect;

use crate::utils::query::DEFAULT_AFTER_LOGIN;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path=DEFAULT_AFTER_LOGIN /> }
}
