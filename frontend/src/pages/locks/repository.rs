use super::utils::{Command, PAGE_SIZE};
use crate::api::{ApiClient, ApiError, Lock, Page};

pub async fn fetch_locks(api: &ApiClient, page: u32) -> Result<Page<Lock>, ApiError> {
    api.list_locks(page, PAGE_SIZE).await
}

pub async fn fetch_lock(api: &ApiClient, mac: &str) -> Result<Lock, ApiError> {
    api.find_lock(mac).await
}

pub async fn send_command(api: &ApiClient, mac: &str, command: Command) -> Result<(), ApiError> {
    match command {
        Command::Lock => api.lock(mac).await,
        Command::Unlock => api.unlock(mac).await,
    }
}
