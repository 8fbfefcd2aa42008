pub mod client;
pub mod types;

pub mod test_support;

pub use client::ApiClient;
pub use types::*;
