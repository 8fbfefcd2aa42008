use crate::{
    api::{LockMode, LockState},
    pages::dashboard::utils::{AttentionKind, DashboardSummary},
};
use leptos::*;

#[component]
fn Stat(#[prop(into)] label: String, value: usize) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="muted">{format!("{}:", label)}</span>
            " "
            <b>{value}</b>
        </div>
    }
}

#[component]
pub fn HealthTile(summary: DashboardSummary) -> impl IntoView {
    let heading = match summary.attention_kind {
        AttentionKind::Critical => format!("Needs attention ({})", summary.attention_count),
        AttentionKind::NonNormal => "Not in NORMAL mode".to_string(),
    };
    let attention = summary.attention.clone();

    view! {
        <section class="tile">
            <div class="tile-header">
                <h2>"Health"</h2>
                <a href="/locks">"View locks"</a>
            </div>
            <div class="muted small">"Lock data"</div>
            <div class="stats">
                <Stat label="Number of locks" value=summary.total_locks />
                {LockState::ALL
                    .into_iter()
                    .map(|s| view! { <Stat label=s.as_str() value=summary.state_count(s) /> })
                    .collect_view()}
            </div>
            <div class="muted small">"Modes"</div>
            <div class="stats">
                {LockMode::ALL
                    .into_iter()
                    .map(|m| view! { <Stat label=m.as_str() value=summary.mode_count(m) /> })
                    .collect_view()}
                <Stat label="Non-NORMAL" value=summary.non_normal />
            </div>
            {if attention.is_empty() {
                view! { <p class="muted">"All locks are in NORMAL mode."</p> }.into_view()
            } else {
                view! {
                    <p class="muted">{heading}</p>
                    <div class="list">
                        {attention
                            .into_iter()
                            .map(|l| view! {
                                <div class="card row">
                                    <div>{format!("Lock ID: {}", l.id)}</div>
                                    <div class="meta">
                                        <span class="muted">"State "</span><b>{l.state.as_str()}</b>
                                        <span class="muted">" Mode "</span><b>{l.mode.as_str()}</b>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </section>
    }
}
