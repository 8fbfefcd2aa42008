use crate::{api::LockEvent, utils::time::sort_key};

pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Timeline,
    GroupByLock,
}

/// Blank input clears the filter.
pub fn parse_lock_id_filter(raw: &str) -> Result<Option<i64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id >= 0 => Ok(Some(id)),
        _ => Err("Lock ID must be a non-negative integer".to_string()),
    }
}

/// Filters the loaded page and orders it by event time. Ties keep page order.
pub fn visible_events(events: &[LockEvent], lock_id: Option<i64>, order: SortOrder) -> Vec<LockEvent> {
    let mut shown: Vec<LockEvent> = events
        .iter()
        .filter(|e| lock_id.map_or(true, |id| e.lock_id == Some(id)))
        .cloned()
        .collect();
    shown.sort_by(|a, b| {
        let ord = sort_key(a.event_time.as_deref()).cmp(&sort_key(b.event_time.as_deref()));
        match order {
            SortOrder::Newest => ord.reverse(),
            SortOrder::Oldest => ord,
        }
    });
    shown
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup {
    pub lock_id: Option<i64>,
    pub events: Vec<LockEvent>,
}

impl EventGroup {
    pub fn title(&self) -> String {
        match self.lock_id {
            Some(id) => format!("Lock ID: {}", id),
            None => "Lock ID: —".to_string(),
        }
    }
}

/// Groups by lock id ascending; events without a lock id come last.
pub fn group_by_lock(events: &[LockEvent]) -> Vec<EventGroup> {
    let mut groups: Vec<EventGroup> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|g| g.lock_id == event.lock_id) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(EventGroup {
                lock_id: event.lock_id,
                events: vec![event.clone()],
            }),
        }
    }
    groups.sort_by_key(|g| (g.lock_id.is_none(), g.lock_id));
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCounts {
    pub on_page: usize,
    pub shown: usize,
    pub total: i64,
}
