use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use translation_gateway::config::Config;
use translation_gateway::routes;
use translation_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf.yaml".to_string());
    let config = Config::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!("Loaded configuration (file: {})", config_path);
    info!(
        "DeepL endpoint: {}, timeout: {}s, allowed origins: {:?}",
        config.deepl.api_url, config.deepl.timeout_secs, config.cors.allowed_origins
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = AppState::new(config)?;
    let app = routes::build_app(app_state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining in-flight requests");
}
