use super::utils::FETCH_SIZE;
use crate::api::{ApiClient, ApiError, Lock, LockEvent};
use futures::future::try_join;

pub async fn fetch_snapshot(api: &ApiClient) -> Result<(Vec<Lock>, Vec<LockEvent>), ApiError> {
    let (locks, events) = try_join(
        api.list_locks(0, FETCH_SIZE),
        api.list_lock_events(0, FETCH_SIZE, None),
    )
    .await?;
    Ok((locks.content, events.content))
}
