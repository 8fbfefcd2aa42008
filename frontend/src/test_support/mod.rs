#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Lock, LockEvent, LockMode, LockState};

    pub fn lock(id: i64, mac: &str, state: LockState, mode: LockMode, locker: Option<i64>) -> Lock {
        Lock {
            id,
            mac_address: mac.into(),
            state,
            mode,
            locker_id: locker,
            location_id: None,
        }
    }

    pub fn event(id: i64, lock_id: Option<i64>, event_type: &str, time: &str) -> LockEvent {
        LockEvent {
            id: Some(id),
            event_time: Some(time.into()),
            event_type: event_type.into(),
            lock_id,
            ski_ticket_id: None,
        }
    }
}
