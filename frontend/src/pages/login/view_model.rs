use super::{repository, utils::LoginFormState};
use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::utils::query::{query_param, safe_next_target, NEXT_PARAM_NAME};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub next: StoredValue<String>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

/// Return target from the current `?next=`; `/dashboard` when absent or unsafe.
pub fn next_from_search(search: &str) -> String {
    safe_next_target(query_param(search, NEXT_PARAM_NAME).as_deref())
}

#[cfg(target_arch = "wasm32")]
fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_search() -> String {
    String::new()
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let next = store_value(next_from_search(&current_search()));

    let login_action = create_action(move |request: &LoginRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::login(&api, request).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.password.set(String::new());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&next.get_value());
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
        next,
    }
}
