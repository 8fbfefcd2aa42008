use crate::{
    api::LockEvent,
    components::badges::EventBadge,
    pages::lock_events::utils::{group_by_lock, ViewMode},
    utils::time::{format_timestamp, MISSING},
};
use leptos::*;

#[component]
pub fn EventRow(event: LockEvent) -> impl IntoView {
    let lock = event
        .lock_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let ticket = event
        .ski_ticket_label()
        .unwrap_or_else(|| MISSING.to_string());
    view! {
        <div class="card event-row">
            <div class="event-lock">{format!("Lock {}", lock)}</div>
            <div class="event-meta">
                <span><span class="muted">"Type "</span><EventBadge event_type=event.event_type.clone() /></span>
                <span><span class="muted">"Time "</span>{format_timestamp(event.event_time.as_deref())}</span>
                <span><span class="muted">"Ticket "</span>{ticket}</span>
            </div>
        </div>
    }
}

#[component]
pub fn EventList(events: Vec<LockEvent>, mode: ViewMode) -> impl IntoView {
    if events.is_empty() {
        return view! { <div class="card"><p>"No events found."</p></div> }.into_view();
    }
    match mode {
        ViewMode::Timeline => view! {
            <div class="event-list">
                {events.into_iter().map(|event| view! { <EventRow event=event /> }).collect_view()}
            </div>
        }
        .into_view(),
        ViewMode::GroupByLock => view! {
            <div class="event-list">
                {group_by_lock(&events)
                    .into_iter()
                    .map(|group| {
                        let title = group.title();
                        view! {
                            <section class="event-group">
                                <div class="muted">{title}</div>
                                {group.events.into_iter().map(|event| view! { <EventRow event=event /> }).collect_view()}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}
