//! Configuration module for the team builder.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Default number of memoized filter results.
pub const DEFAULT_FILTER_CACHE_CAPACITY: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a JSON array of user records (bundled dataset when unset)
    pub data_path: Option<PathBuf>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Number of filter results kept in memory; 0 disables memoization
    pub filter_cache_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("TEAM_DATA_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let bind_addr = env::var("TEAM_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Validation(format!("Invalid TEAM_BIND_ADDR: {}", e)))?;

        let log_level = env::var("TEAM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let filter_cache_capacity = match env::var("TEAM_FILTER_CACHE_CAPACITY") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                AppError::Validation(format!("Invalid TEAM_FILTER_CACHE_CAPACITY: {}", e))
            })?,
            Err(_) => DEFAULT_FILTER_CACHE_CAPACITY,
        };

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
            filter_cache_capacity,
        })
    }
}
