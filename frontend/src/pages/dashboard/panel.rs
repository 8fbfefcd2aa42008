use super::{
    components::{
        activity::{ActivityTile, RecentEventsTile},
        health::HealthTile,
    },
    view_model::DashboardViewModel,
};
use crate::components::{
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();
    let loading = vm.summary.loading();

    let body = move || {
        vm.summary.get().map(|result| match result {
            Ok(summary) => view! {
                <div class="grid-2">
                    <HealthTile summary=summary.clone() />
                    <ActivityTile summary=summary.clone() />
                    <RecentEventsTile summary=summary />
                </div>
            }
            .into_view(),
            Err(err) => {
                let error = create_rw_signal(Some(err));
                view! { <InlineErrorMessage error=error.into() /> }.into_view()
            }
        })
    };

    view! {
        <Layout>
            <div class="page-header">
                <div>
                    <h2>"Dashboard"</h2>
                    <p class="muted">"Overview of lock health and recent activity."</p>
                </div>
                <button class="btn" disabled=move || loading.get() on:click=move |_| vm.refresh()>
                    "Refresh"
                </button>
            </div>
            <Transition fallback=|| view! { <LoadingSpinner /> }>{body}</Transition>
        </Layout>
    }
}
