//! Web front end for the password strength meter.
//!
//! A small axum server: an HTML form for interactive checks and a JSON
//! endpoint for programmatic callers. The evaluator itself is a plain
//! function called from the handlers; the server keeps no state beyond
//! its startup configuration.

mod routes;
mod view;

pub use routes::{ApiError, EvaluateRequest, routes};

use tower_http::cors::CorsLayer;

const DEFAULT_PORT: u16 = 8080;

/// Server configuration
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: std::env::var("PWD_METER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Run the web front end until the listener fails.
pub async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = routes().layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    eprintln!("[pwd-meter] Listening on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
