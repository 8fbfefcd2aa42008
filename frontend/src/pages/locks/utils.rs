use crate::api::{ApiError, Lock, LockMode, LockState};
use std::future::Future;

pub const PAGE_SIZE: u32 = 50;

/// Waits between state re-reads after a command, in milliseconds.
pub const POLL_DELAYS_MS: [u32; 5] = [250, 400, 600, 900, 1400];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Lock,
    Unlock,
}

impl Command {
    pub fn expected_state(self) -> LockState {
        match self {
            Command::Lock => LockState::Locked,
            Command::Unlock => LockState::Unlocked,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::Lock => "Lock",
            Command::Unlock => "Unlock",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Command::Lock => "lock",
            Command::Unlock => "unlock",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LockerGroup {
    pub locker_id: Option<i64>,
    pub locks: Vec<Lock>,
}

impl LockerGroup {
    pub fn title(&self) -> String {
        match self.locker_id {
            Some(id) => format!("Locker #{}", id),
            None => "Unassigned".to_string(),
        }
    }
}

/// Groups by locker id ascending; locks without a locker come last.
/// Order within a group follows the page order.
pub fn group_by_locker(locks: &[Lock]) -> Vec<LockerGroup> {
    let mut groups: Vec<LockerGroup> = Vec::new();
    for lock in locks {
        match groups.iter_mut().find(|g| g.locker_id == lock.locker_id) {
            Some(group) => group.locks.push(lock.clone()),
            None => groups.push(LockerGroup {
                locker_id: lock.locker_id,
                locks: vec![lock.clone()],
            }),
        }
    }
    groups.sort_by_key(|g| (g.locker_id.is_none(), g.locker_id));
    groups
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionAvailability {
    pub can_lock: bool,
    pub can_unlock: bool,
    /// The command that would change the current state, styled as primary.
    pub primary: Option<Command>,
    pub notice: Option<String>,
}

pub fn action_availability(lock: &Lock, busy: bool) -> ActionAvailability {
    if lock.mode != LockMode::Normal {
        return ActionAvailability {
            can_lock: false,
            can_unlock: false,
            primary: None,
            notice: Some(format!("Actions disabled in {} mode", lock.mode)),
        };
    }
    let primary = match lock.state {
        LockState::Locked => Some(Command::Unlock),
        LockState::Unlocked => Some(Command::Lock),
        LockState::Unknown => None,
    };
    ActionAvailability {
        can_lock: !busy && lock.state != LockState::Locked,
        can_unlock: !busy && lock.state != LockState::Unlocked,
        primary,
        notice: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpis {
    pub lockers: usize,
    pub locks: usize,
}

pub fn kpis(locks: &[Lock]) -> Kpis {
    let mut lockers: Vec<i64> = locks.iter().filter_map(|l| l.locker_id).collect();
    lockers.sort_unstable();
    lockers.dedup();
    Kpis {
        lockers: lockers.len(),
        locks: locks.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Converged { attempts: usize },
    Pending,
}

/// Re-reads a lock after each delay until it reports `expected` or the
/// delays run out. Read failures count as a non-matching attempt.
pub async fn poll_until_state<F, Fut, S, SFut>(
    expected: LockState,
    delays: &[u32],
    mut fetch: F,
    mut sleep: S,
) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Lock, ApiError>>,
    S: FnMut(u32) -> SFut,
    SFut: Future<Output = ()>,
{
    for (index, delay) in delays.iter().enumerate() {
        sleep(*delay).await;
        match fetch().await {
            Ok(lock) if lock.state == expected => {
                return PollOutcome::Converged {
                    attempts: index + 1,
                }
            }
            Ok(_) => {}
            Err(err) => log::warn!("poll read failed: {}", err),
        }
    }
    PollOutcome::Pending
}

pub fn pending_notice(mac: &str, expected: LockState) -> String {
    format!(
        "{} has not reported {} yet. Refresh to check again.",
        mac, expected
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::lock;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn groups_by_locker_with_unassigned_last() {
        let locks = vec![
            lock(1, "A", LockState::Locked, LockMode::Normal, Some(9)),
            lock(2, "B", LockState::Locked, LockMode::Normal, None),
            lock(3, "C", LockState::Unlocked, LockMode::Normal, Some(2)),
            lock(4, "D", LockState::Locked, LockMode::Normal, Some(9)),
        ];
        let groups = group_by_locker(&locks);
        let ids: Vec<_> = groups.iter().map(|g| g.locker_id).collect();
        assert_eq!(ids, vec![Some(2), Some(9), None]);
        assert_eq!(groups[1].locks.len(), 2);
        assert_eq!(groups[1].locks[0].mac_address, "A");
        assert_eq!(groups[2].title(), "Unassigned");
    }

    #[test]
    fn locked_lock_offers_only_unlock() {
        let l = lock(1, "A", LockState::Locked, LockMode::Normal, None);
        let a = action_availability(&l, false);
        assert!(!a.can_lock);
        assert!(a.can_unlock);
        assert_eq!(a.primary, Some(Command::Unlock));
    }

    #[test]
    fn non_normal_mode_disables_everything() {
        let l = lock(1, "A", LockState::Unlocked, LockMode::Maintenance, None);
        let a = action_availability(&l, false);
        assert!(!a.can_lock && !a.can_unlock);
        assert_eq!(a.notice.as_deref(), Some("Actions disabled in MAINTENANCE mode"));
    }

    #[test]
    fn busy_page_disables_actions() {
        let l = lock(1, "A", LockState::Unknown, LockMode::Normal, None);
        let a = action_availability(&l, true);
        assert!(!a.can_lock && !a.can_unlock);
        let idle = action_availability(&l, false);
        assert!(idle.can_lock && idle.can_unlock);
    }

    #[test]
    fn kpis_count_distinct_lockers() {
        let locks = vec![
            lock(1, "A", LockState::Locked, LockMode::Normal, Some(1)),
            lock(2, "B", LockState::Locked, LockMode::Normal, Some(1)),
            lock(3, "C", LockState::Locked, LockMode::Normal, None),
        ];
        assert_eq!(kpis(&locks), Kpis { lockers: 1, locks: 3 });
    }

    #[test]
    fn poll_stops_once_state_matches() {
        let states = RefCell::new(vec![
            LockState::Locked,
            LockState::Unlocked,
            LockState::Unlocked,
        ]);
        let slept = RefCell::new(Vec::new());
        let outcome = block_on(poll_until_state(
            LockState::Locked,
            &POLL_DELAYS_MS,
            || {
                let state = states.borrow_mut().pop().unwrap_or(LockState::Locked);
                async move { Ok(lock(1, "A", state, LockMode::Normal, None)) }
            },
            |ms| {
                slept.borrow_mut().push(ms);
                async {}
            },
        ));
        assert_eq!(outcome, PollOutcome::Converged { attempts: 3 });
        assert_eq!(*slept.borrow(), vec![250, 400, 600]);
    }

    #[test]
    fn poll_reports_pending_after_every_delay() {
        let calls = RefCell::new(0);
        let outcome = block_on(poll_until_state(
            LockState::Unlocked,
            &POLL_DELAYS_MS,
            || {
                *calls.borrow_mut() += 1;
                async { Err(ApiError::request_failed("offline")) }
            },
            |_| async {},
        ));
        assert_eq!(outcome, PollOutcome::Pending);
        assert_eq!(*calls.borrow(), POLL_DELAYS_MS.len());
    }
}
