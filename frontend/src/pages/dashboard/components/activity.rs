use crate::{
    components::badges::EventBadge,
    pages::dashboard::utils::DashboardSummary,
    utils::time::{format_timestamp, MISSING},
};
use leptos::*;

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}

#[component]
pub fn ActivityTile(summary: DashboardSummary) -> impl IntoView {
    let top = summary.top_active.clone();
    view! {
        <section class="tile">
            <div class="tile-header">
                <h2>"Activity"</h2>
                <a href="/lock-events">"View events"</a>
            </div>
            <div class="stats">
                <div><span class="muted">"Events loaded: "</span><b>{summary.events_loaded}</b></div>
                <div><span class="muted">"Failures: "</span><b>{summary.failures}</b></div>
            </div>
            <div class="muted small">"Most active locks"</div>
            {if top.is_empty() {
                view! { <p class="muted">"No activity yet."</p> }.into_view()
            } else {
                top.into_iter()
                    .map(|a| view! {
                        <div class="card row">
                            <div>{format!("Lock ID: {}", a.lock_id)}</div>
                            <div class="meta">
                                <span class="muted">"Events "</span><b>{a.events}</b>
                                <span class="muted">" State "</span>{or_missing(a.state.map(|s| s.to_string()))}
                                <span class="muted">" Mode "</span>{or_missing(a.mode.map(|m| m.to_string()))}
                            </div>
                        </div>
                    })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
pub fn RecentEventsTile(summary: DashboardSummary) -> impl IntoView {
    let recent = summary.recent.clone();
    view! {
        <section class="tile wide">
            <div class="tile-header">
                <h2>"Recent events"</h2>
                <a href="/lock-events">"View events"</a>
            </div>
            {if recent.is_empty() {
                view! { <p class="muted">"No events."</p> }.into_view()
            } else {
                recent
                    .into_iter()
                    .map(|e| {
                        let ticket = or_missing(e.ski_ticket_label());
                        let lock = or_missing(e.lock_id.map(|id| id.to_string()));
                        view! {
                            <div class="card row">
                                <div>{format!("Lock ID: {}", lock)}</div>
                                <div class="meta">
                                    <EventBadge event_type=e.event_type.clone() />
                                    <span class="muted">" Time "</span>{format_timestamp(e.event_time.as_deref())}
                                    <span class="muted">" Ticket "</span>{ticket}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
