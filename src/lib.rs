pub mod api;
pub mod config;
pub mod dashboard; // Dashboard responder
pub mod health_status; // Check-up status from appointment history
pub mod models;
pub mod roles; // Role registry
pub mod store;
pub mod submission; // Form normalizer
pub mod upload; // PDF upload intake

use tracing_subscriber::EnvFilter;

/// Run the intake server until Ctrl-C.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;

    upload::prepare_upload_root(&config.upload_root).map_err(|e| {
        format!(
            "Cannot prepare upload root {}: {e}",
            config.upload_root.display()
        )
    })?;
    tracing::info!(root = %config.upload_root.display(), "Upload root ready");

    let ctx = api::ApiContext::new(&config);
    let mut server = api::start_server(config.bind_addr, ctx).await?;
    tracing::info!(
        addr = %server.addr(),
        max_upload_bytes = config.max_upload_bytes,
        "Accepting submissions and uploads"
    );

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;

    server.shutdown();
    Ok(())
}
