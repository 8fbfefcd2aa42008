use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    username: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="login-shell">
            <form class="card login-card" on:submit=move |ev| on_submit.call(ev)>
                <h1>"SkiLock"</h1>
                <p class="muted">"Sign in to manage locks"</p>
                <label for="username">"Username"</label>
                <input
                    id="username"
                    name="username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <InlineErrorMessage error=error />
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
