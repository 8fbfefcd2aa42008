use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skilock_backend::{config::Config, create_app, state::AppState};

fn describe(value: Option<&str>) -> &str {
    value.unwrap_or("<unset>")
}

fn mask_secret(value: Option<&str>) -> String {
    match value {
        None => "<unset>".into(),
        Some(s) => format!("*** (len={})", s.len()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skilock_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        lock_service_url = describe(config.lock_service_url.as_deref()),
        auth_service_url = describe(config.auth_service_url.as_deref()),
        content_api_url = describe(config.content_api_url.as_deref()),
        content_api_token = %mask_secret(config.content_api_token.as_deref()),
        jwt_public_key_set = config.jwt_public_key.is_some(),
        cookie_secure = config.cookie_secure,
        protected_paths = ?config.protected_paths,
        frontend_dist = %config.frontend_dist.display(),
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let app = create_app(AppState::new(config)?);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
