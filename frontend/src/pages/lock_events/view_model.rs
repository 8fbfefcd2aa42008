use super::{
    repository,
    utils::{parse_lock_id_filter, visible_events, EventCounts, SortOrder, ViewMode},
};
use crate::api::{ApiClient, ApiError, LockEvent, Page};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LockEventsViewModel {
    pub page: RwSignal<u32>,
    pub events: Resource<u32, Result<Page<LockEvent>, ApiError>>,
    pub filter_input: RwSignal<String>,
    pub filter: RwSignal<Option<i64>>,
    pub filter_error: RwSignal<Option<String>>,
    pub order: RwSignal<SortOrder>,
    pub view_mode: RwSignal<ViewMode>,
}

impl LockEventsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let page = create_rw_signal(0u32);
        let events = create_resource(
            move || page.get(),
            move |page| {
                let api = api.clone();
                async move { repository::fetch_events(&api, page).await }
            },
        );

        Self {
            page,
            events,
            filter_input: create_rw_signal(String::new()),
            filter: create_rw_signal(None),
            filter_error: create_rw_signal(None),
            order: create_rw_signal(SortOrder::default()),
            view_mode: create_rw_signal(ViewMode::default()),
        }
    }

    pub fn apply_filter(&self) {
        match parse_lock_id_filter(&self.filter_input.get_untracked()) {
            Ok(filter) => {
                self.filter_error.set(None);
                self.filter.set(filter);
            }
            Err(message) => self.filter_error.set(Some(message)),
        }
    }

    pub fn clear_filter(&self) {
        self.filter_input.set(String::new());
        self.filter_error.set(None);
        self.filter.set(None);
    }

    fn loaded(&self) -> Option<Page<LockEvent>> {
        self.events.get().and_then(Result::ok)
    }

    pub fn shown(&self) -> Vec<LockEvent> {
        let events = self.loaded().map(|p| p.content).unwrap_or_default();
        visible_events(&events, self.filter.get(), self.order.get())
    }

    pub fn counts(&self) -> EventCounts {
        let page = self.loaded().unwrap_or_default();
        EventCounts {
            on_page: page.content.len(),
            shown: visible_events(&page.content, self.filter.get(), self.order.get()).len(),
            total: page.total_elements,
        }
    }

    pub fn total_pages(&self) -> i64 {
        self.loaded().map(|p| p.total_pages).unwrap_or(0)
    }
}
