use super::{
    repository,
    utils::{derive_dashboard, DashboardSummary},
};
use crate::api::{ApiClient, ApiError};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub summary: Resource<(), Result<DashboardSummary, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let summary = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move {
                    let (locks, events) = repository::fetch_snapshot(&api).await?;
                    Ok(derive_dashboard(&locks, &events))
                }
            },
        );
        Self { summary }
    }

    pub fn refresh(&self) {
        self.summary.refetch();
    }
}
