use super::{
    repository,
    utils::{pending_notice, poll_until_state, Command, PollOutcome, POLL_DELAYS_MS},
};
use crate::api::{ApiClient, ApiError, Lock, Page};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub mac: String,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub mac: String,
    pub command: Command,
    pub outcome: PollOutcome,
}

pub type LocksResource = Resource<u32, Result<Page<Lock>, ApiError>>;

#[derive(Clone, Copy)]
pub struct LocksViewModel {
    pub page: RwSignal<u32>,
    pub locks: LocksResource,
    pub command_action: Action<CommandRequest, Result<CommandResult, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub pending_notice: RwSignal<Option<String>>,
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(_ms: u32) {}

impl LocksViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let page = create_rw_signal(0u32);

        let api_for_list = api.clone();
        let locks = create_resource(
            move || page.get(),
            move |page| {
                let api = api_for_list.clone();
                async move { repository::fetch_locks(&api, page).await }
            },
        );

        let command_action = create_action(move |request: &CommandRequest| {
            let api = api.clone();
            let request = request.clone();
            async move {
                repository::send_command(&api, &request.mac, request.command).await?;
                locks.refetch();
                let outcome = poll_until_state(
                    request.command.expected_state(),
                    &POLL_DELAYS_MS,
                    || repository::fetch_lock(&api, &request.mac),
                    sleep_ms,
                )
                .await;
                Ok(CommandResult {
                    mac: request.mac,
                    command: request.command,
                    outcome,
                })
            }
        });

        let error = create_rw_signal(None::<ApiError>);
        let pending_notice = create_rw_signal(None::<String>);

        create_effect(move |_| {
            let Some(result) = command_action.value().get() else {
                return;
            };
            match result {
                Ok(done) => {
                    error.set(None);
                    pending_notice.set(match done.outcome {
                        PollOutcome::Converged { .. } => None,
                        PollOutcome::Pending => Some(pending_notice_text(&done)),
                    });
                }
                Err(err) => error.set(Some(err)),
            }
            locks.refetch();
        });

        Self {
            page,
            locks,
            command_action,
            error,
            pending_notice,
        }
    }

    /// True while a command or its confirmation poll is in flight.
    pub fn busy(&self) -> Signal<bool> {
        self.command_action.pending().into()
    }

    pub fn dispatch(&self, mac: String, command: Command) {
        if self.command_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.pending_notice.set(None);
        self.command_action.dispatch(CommandRequest { mac, command });
    }

    pub fn total_pages(&self) -> i64 {
        self.locks
            .get()
            .and_then(Result::ok)
            .map(|p| p.total_pages)
            .unwrap_or(0)
    }

    pub fn prev_page(&self) {
        self.page.update(|p| *p = p.saturating_sub(1));
    }

    pub fn next_page(&self) {
        self.page.update(|p| *p += 1);
    }

    pub fn refresh(&self) {
        self.locks.refetch();
    }
}

fn pending_notice_text(done: &CommandResult) -> String {
    pending_notice(&done.mac, done.command.expected_state())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_notice_names_lock_and_state() {
        let text = pending_notice_text(&CommandResult {
            mac: "AA:BB".into(),
            command: Command::Lock,
            outcome: PollOutcome::Pending,
        });
        assert_eq!(
            text,
            "AA:BB has not reported LOCKED yet. Refresh to check again."
        );
    }
}
