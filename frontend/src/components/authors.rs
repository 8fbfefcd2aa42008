use crate::api::{ApiClient, ApiError, Author};
use leptos::*;

pub fn author_label(author: &Author) -> String {
    let name = author
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Unnamed");
    match author.email.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(email) => format!("{} <{}>", name, email),
        None => name.to_string(),
    }
}

#[component]
pub fn AuthorsView(result: Option<Result<Vec<Author>, ApiError>>) -> impl IntoView {
    match result {
        None => view! { <span class="muted">"Loading authors…"</span> }.into_view(),
        Some(Err(err)) => {
            view! { <span class="muted">{format!("Authors unavailable: {}", err.error)}</span> }
                .into_view()
        }
        Some(Ok(authors)) if authors.is_empty() => {
            view! { <span class="muted">"No authors listed"</span> }.into_view()
        }
        Some(Ok(authors)) => view! {
            <ul class="authors">
                {authors
                    .iter()
                    .map(|a| view! { <li>{author_label(a)}</li> })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    }
}

#[component]
pub fn AuthorsList() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let authors = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_authors().await }
        },
    );
    view! { {move || view! { <AuthorsView result=authors.get() /> }} }
}
