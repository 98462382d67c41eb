use axum::Router;
use tokio::net::TcpListener;

use anyhow::anyhow;

use sinhala_tts::{ServerConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    let address = config.address();
    println!("Starting server on {address}");

    // Create application state (builds the romanization tables and cache)
    let app_state = AppState::new(config).map_err(|e| anyhow!(e.to_string()))?;

    // API routes (synthesize + health)
    let api_routes = routes::api::create_api_router();

    // Public root route doubles as a health check
    let public_routes = Router::new().route(
        "/",
        axum::routing::get(sinhala_tts::handlers::api::health_check),
    );

    let app = public_routes.merge(api_routes).with_state(app_state);

    // Create listener
    let listener = TcpListener::bind(&address).await?;

    println!("Server listening on {address}");

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
