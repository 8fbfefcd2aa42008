use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="notice notice-error" role="alert">
                <div class="notice-title">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .filter(|e| !e.code.is_empty() && e.code != "UNKNOWN")
                        .map(|e| view! { <div class="notice-code">{"Code: "}{e.code}</div> })
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_message_and_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError {
                error: "Lock not found".into(),
                code: "UPSTREAM_ERROR".into(),
                details: None,
            }));
            view! { <InlineErrorMessage error=signal.into() /> }
        });
        assert!(html.contains("Lock not found"));
        assert!(html.contains("UPSTREAM_ERROR"));
    }

    #[test]
    fn renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal.into() /> }
        });
        assert!(!html.contains("notice-error"));
    }
}
