use std::process::ExitCode;
use std::sync::Arc;

use storefront_cart::cart::AppState;
use storefront_cart::config::ServerConfig;
use storefront_cart::error::AppError;
use storefront_cart::router::create_app_router;
use storefront_cart::{logging, shutdown};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Prints usage for --help and parse failures
    let config = ServerConfig::load().unwrap_or_else(|e| e.exit());

    if let Err(e) = logging::init_subscriber(&config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), AppError> {
    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
