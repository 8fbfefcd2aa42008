//! Request and response shapes owned by the BFF.
//!
//! Lock and lock-event pages are relayed verbatim and have no server-side model.

pub mod auth;
pub mod author;
pub mod pagination;

use serde::Serialize;

/// `{"ok": true}` acknowledgement for commands with no payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const OK: Ack = Ack { ok: true };
}
