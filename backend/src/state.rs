use std::sync::Arc;

use crate::{
    config::Config, session::TokenStore, upstream::UpstreamClient, utils::jwt::PublicKeyCache,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
    pub public_key: PublicKeyCache,
    pub tokens: TokenStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(config.upstream_timeout)?;
        let public_key = PublicKeyCache::new(config.jwt_public_key.clone());
        let tokens = TokenStore::new(config.cookie_options());
        Ok(Self {
            config: Arc::new(config),
            upstream,
            public_key,
            tokens,
        })
    }
}
