// Temajuk Tourism API Server

use tokio::net::TcpListener;
use tracing::info;

use temajuk_api::api;
use temajuk_api::app_state::AppState;
use temajuk_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.server_address();

    // Initialize application state (opens the pool and applies the schema)
    let app_state = AppState::new(config).await?;

    // Build application router
    let app = api::router(app_state);

    // Start server
    info!("Temajuk Tourism API starting on http://{}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
