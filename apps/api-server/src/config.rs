//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Number of HTTP workers; `None` keeps the actix default (one per core).
    pub workers: Option<usize>,
    /// Seed the store with sample posts on startup.
    pub seed_sample_posts: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            workers: env::var("WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .filter(|&w| w > 0),
            seed_sample_posts: env::var("SEED_SAMPLE_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
