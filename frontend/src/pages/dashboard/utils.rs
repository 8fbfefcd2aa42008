//! Read-only aggregates over one large page of locks and events.

use crate::{
    api::{Lock, LockEvent, LockMode, LockState},
    utils::time::sort_key,
};
use serde::{Deserialize, Serialize};

pub const FETCH_SIZE: u32 = 200;
pub const ATTENTION_LIMIT: usize = 6;
pub const RECENT_LIMIT: usize = 12;
pub const TOP_ACTIVE_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttentionKind {
    /// UNKNOWN state or DISABLED mode.
    Critical,
    /// Nothing critical; showing locks outside NORMAL mode instead.
    NonNormal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLock {
    pub lock_id: i64,
    pub events: usize,
    pub mac: Option<String>,
    pub state: Option<LockState>,
    pub mode: Option<LockMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_locks: usize,
    pub state_counts: Vec<(LockState, usize)>,
    pub mode_counts: Vec<(LockMode, usize)>,
    pub non_normal: usize,
    pub attention_count: usize,
    pub attention_kind: AttentionKind,
    pub attention: Vec<Lock>,
    pub failures: usize,
    pub events_loaded: usize,
    pub recent: Vec<LockEvent>,
    pub top_active: Vec<ActiveLock>,
}

fn needs_attention(lock: &Lock) -> bool {
    lock.state == LockState::Unknown || lock.mode == LockMode::Disabled
}

pub fn is_failure(event: &LockEvent) -> bool {
    matches!(event.event_type.as_str(), "ACTION_FAILED" | "COMMUNICATION_ERROR")
}

pub fn derive_dashboard(locks: &[Lock], events: &[LockEvent]) -> DashboardSummary {
    let state_counts = LockState::ALL
        .iter()
        .map(|s| (*s, locks.iter().filter(|l| l.state == *s).count()))
        .collect();
    let mode_counts = LockMode::ALL
        .iter()
        .map(|m| (*m, locks.iter().filter(|l| l.mode == *m).count()))
        .collect();

    let critical: Vec<Lock> = locks.iter().filter(|l| needs_attention(l)).cloned().collect();
    let attention_count = critical.len();
    let (attention_kind, attention) = if critical.is_empty() {
        (
            AttentionKind::NonNormal,
            locks
                .iter()
                .filter(|l| l.mode != LockMode::Normal)
                .take(ATTENTION_LIMIT)
                .cloned()
                .collect(),
        )
    } else {
        (
            AttentionKind::Critical,
            critical.into_iter().take(ATTENTION_LIMIT).collect(),
        )
    };

    let mut recent = events.to_vec();
    recent.sort_by_key(|e| std::cmp::Reverse(sort_key(e.event_time.as_deref())));
    recent.truncate(RECENT_LIMIT);

    DashboardSummary {
        total_locks: locks.len(),
        state_counts,
        mode_counts,
        non_normal: locks.iter().filter(|l| l.mode != LockMode::Normal).count(),
        attention_count,
        attention_kind,
        attention,
        failures: events.iter().filter(|e| is_failure(e)).count(),
        events_loaded: events.len(),
        recent,
        top_active: top_active_locks(locks, events),
    }
}

/// Most frequent lock ids among `events`, joined to their lock. Equal counts
/// keep first-seen order.
pub fn top_active_locks(locks: &[Lock], events: &[LockEvent]) -> Vec<ActiveLock> {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for lock_id in events.iter().filter_map(|e| e.lock_id) {
        match counts.iter_mut().find(|(id, _)| *id == lock_id) {
            Some((_, n)) => *n += 1,
            None => counts.push((lock_id, 1)),
        }
    }
    counts.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    counts
        .into_iter()
        .take(TOP_ACTIVE_LIMIT)
        .map(|(lock_id, events)| {
            let lock = locks.iter().find(|l| l.id == lock_id);
            ActiveLock {
                lock_id,
                events,
                mac: lock.map(|l| l.mac_address.clone()),
                state: lock.map(|l| l.state),
                mode: lock.map(|l| l.mode),
            }
        })
        .collect()
}

impl DashboardSummary {
    pub fn state_count(&self, state: LockState) -> usize {
        self.state_counts
            .iter()
            .find(|(s, _)| *s == state)
            .map_or(0, |(_, n)| *n)
    }

    pub fn mode_count(&self, mode: LockMode) -> usize {
        self.mode_counts
            .iter()
            .find(|(m, _)| *m == mode)
            .map_or(0, |(_, n)| *n)
    }
}
