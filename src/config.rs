// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// When unset the server runs on the seeded in-memory store.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            rust_log,
            bind_addr,
            log_dir,
        }
    }
}
