//! Tickerlens API Server
//!
//! HTTP server exposing the technical-analysis engine. The engine is pure
//! and stateless, so this service can be horizontally scaled; price data
//! arrives in the request body from whatever fetch layer the deployment
//! pairs it with.

use dotenvy::dotenv;
use tickerlens::config;
use tickerlens::core::http::start_server;
use tickerlens::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let port = config::get_port();
    let env = config::get_environment();
    info!("Starting Tickerlens API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
