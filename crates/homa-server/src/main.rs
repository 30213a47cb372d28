use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use homa_auth::jwt::TokenIssuer;
use homa_server::config::{LogFormat, ServerConfig};
use homa_server::state::AppState;
use homa_storage::Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    if config.jwt_secret.is_none() {
        tracing::warn!("HOMA_JWT_SECRET not set, signing tokens with the development secret");
    }

    let store = Store::open(&config.database_path)
        .wrap_err_with(|| format!("opening database {}", config.database_path.display()))?;
    let tokens = TokenIssuer::new(config.jwt_secret(), config.token_ttl);
    let app = homa_server::router(AppState::new(store, tokens));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .wrap_err_with(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
