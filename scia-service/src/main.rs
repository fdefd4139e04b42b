use scia_service::{create_router, ServiceConfig, SciaExecutor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "scia_service=debug,foundation_model=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SCIA Pile Foundation Service");

    let config = ServiceConfig::from_env();
    tracing::info!("Using SCIA runner: {}", config.runner_path.display());
    tracing::info!("Analysis timeout: {:?}", config.timeout);

    let executor = SciaExecutor::from_config(&config);
    if executor.runner_available().await {
        tracing::info!("SCIA runner found and accessible");
    } else {
        tracing::warn!("SCIA runner not found or not accessible");
        tracing::warn!("Set SCIA_RUNNER_PATH environment variable to the correct path");
        tracing::warn!("Service will start but analyses will fail until the runner is available");
    }
    if !config.template_path.exists() {
        tracing::warn!(
            "Template {} missing; set SCIA_TEMPLATE_PATH",
            config.template_path.display()
        );
    }

    let addr = config.bind_address();
    let app = create_router(executor, config);

    tracing::info!("Listening on {}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/version");
    tracing::info!("  GET  /api/v1/parametrization");
    tracing::info!("  POST /api/v1/views/geometry");
    tracing::info!("  POST /api/v1/views/scia");
    tracing::info!("  POST /api/v1/downloads/input-xml");
    tracing::info!("  GET  /api/v1/downloads/input-def");
    tracing::info!("  GET  /api/v1/downloads/input-esa");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
