use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default; the service runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upload cap for the multipart analyze endpoint (bytes).
    pub max_upload_bytes: usize,
    /// Minimum length for resume/job-description text to be analyzable.
    pub min_text_len: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760") // 10 MiB
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            min_text_len: env_or("MIN_TEXT_LEN", "50")
                .parse::<usize>()
                .context("MIN_TEXT_LEN must be a character count")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            min_text_len: 50,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
