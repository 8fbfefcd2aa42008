//! Signed-in operator identity, read once from `/api/auth/me` per page load.

use crate::api::{ApiClient, ApiError, Me};
use leptos::*;

pub type MeResource = Resource<(), Result<Me, ApiError>>;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub me: MeResource,
}

pub fn provide_session() -> SessionContext {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let me = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.me().await }
        },
    );
    let ctx = SessionContext { me };
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(provide_session)
}

/// `"subject · role"` for the header, or `None` while unknown.
pub fn identity_label(me: &Me) -> String {
    match me.role.as_deref().filter(|r| !r.trim().is_empty()) {
        Some(role) => format!("{} · {}", me.user_id, role),
        None => me.user_id.clone(),
    }
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_action(move |_: &()| {
        let api = api.clone();
        async move { api.logout().await }
    })
}
