//! pwd-meter: password strength web front end.
//!
//! Serves the check form on `/` and a JSON API on `/evaluate`.
//!
//! Usage:
//!   pwd-meter [--port 8080]
//!
//! Environment variables:
//!   PWD_METER_PORT - Port to listen on (default: 8080)

use pwd_meter::server::{ServerConfig, run};
use std::env;

#[tokio::main]
async fn main() {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = parse_config();

    eprintln!("pwd-meter starting...");
    eprintln!("Port: {}", config.port);

    if let Err(e) = run(config).await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn parse_config() -> ServerConfig {
    // Default already honors PWD_METER_PORT
    let mut config = ServerConfig::default();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                if let Ok(port) = args[i + 1].parse() {
                    config.port = port;
                }
                i += 2;
            }
            _ => i += 1,
        }
    }

    config
}
