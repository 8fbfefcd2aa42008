use crate::{
    api::{LockMode, LockState},
    utils::time::MISSING,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Warn,
    Bad,
    Muted,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Ok => "badge badge-ok",
            Tone::Warn => "badge badge-warn",
            Tone::Bad => "badge badge-bad",
            Tone::Muted => "badge badge-muted",
        }
    }
}

pub fn state_tone(state: LockState) -> Tone {
    match state {
        LockState::Locked => Tone::Ok,
        LockState::Unlocked => Tone::Warn,
        LockState::Unknown => Tone::Bad,
    }
}

pub fn mode_tone(mode: LockMode) -> Tone {
    match mode {
        LockMode::Normal => Tone::Ok,
        LockMode::Service | LockMode::Maintenance => Tone::Warn,
        LockMode::Disabled => Tone::Bad,
        LockMode::Unrecognized => Tone::Muted,
    }
}

pub fn event_tone(event_type: &str) -> Tone {
    match event_type {
        "LOCK" | "UNLOCK" => Tone::Ok,
        "ACTION_FAILED" | "COMMUNICATION_ERROR" => Tone::Bad,
        t if t.starts_with("SET_MODE_TO_") => Tone::Warn,
        _ => Tone::Muted,
    }
}

#[component]
pub fn Badge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

#[component]
pub fn StateBadge(state: LockState) -> impl IntoView {
    view! { <Badge tone=state_tone(state) label=state.as_str() /> }
}

#[component]
pub fn ModeBadge(mode: LockMode) -> impl IntoView {
    view! { <Badge tone=mode_tone(mode) label=mode.as_str() /> }
}

#[component]
pub fn EventBadge(#[prop(into)] event_type: String) -> impl IntoView {
    let label = if event_type.is_empty() {
        MISSING.to_string()
    } else {
        event_type.clone()
    };
    view! { <Badge tone=event_tone(&event_type) label=label /> }
}
