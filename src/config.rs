//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default so the demo boots with no
//! environment at all; variables only tune the simulation.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Where the session snapshot file lives
    pub snapshot_path: PathBuf,
    /// Probability (0.0..=1.0) that a request fails with a synthetic error
    pub error_rate: f64,
    /// Whether handlers sleep for their per-route latency window
    pub simulate_latency: bool,
    /// Point balance granted to newly fabricated users
    pub starting_points: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let error_rate = match env::var("ERROR_RATE") {
            Ok(raw) => {
                let rate: f64 = raw.parse().map_err(|_| ConfigError::Invalid("ERROR_RATE"))?;
                if !(0.0..=1.0).contains(&rate) {
                    return Err(ConfigError::Invalid("ERROR_RATE"));
                }
                rate
            }
            Err(_) => 0.05,
        };

        let simulate_latency = match env::var("SIMULATE_LATENCY") {
            Ok(raw) => match raw.as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => return Err(ConfigError::Invalid("SIMULATE_LATENCY")),
            },
            Err(_) => true,
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            snapshot_path: env::var("SESSION_SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".neocard-session.json")),
            error_rate,
            simulate_latency,
            starting_points: env::var("STARTING_POINTS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(200),
        })
    }

    /// Config for tests: no latency, no injected errors, snapshot in cwd.
    /// Integration tests point `snapshot_path` at a temp dir instead.
    pub fn test_default() -> Self {
        Self {
            port: 0,
            frontend_url: "http://localhost:5173".to_string(),
            snapshot_path: PathBuf::from(".neocard-session-test.json"),
            error_rate: 0.0,
            simulate_latency: false,
            starting_points: 200,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::test_default()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
