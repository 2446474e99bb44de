use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_SIZE: usize = 256 * 1024 * 1024; // 256 MB

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Object store endpoint URL (e.g. "http://127.0.0.1:9000")
    pub endpoint_url: String,

    /// Object store access key
    pub access_key: String,

    /// Object store secret key
    pub secret_key: String,

    /// Container holding the uploaded audio files
    pub bucket: String,

    /// Listening port (default: 3000)
    pub port: u16,

    /// Maximum request body size in bytes (default: 256 MB)
    pub max_upload_size: usize,
}

impl AppConfig {
    /// Load configuration from environment variables. Store connection
    /// settings are required; the rest fall back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            endpoint_url: env::var("MINIO_ENDPOINT").context("MINIO_ENDPOINT must be set")?,
            access_key: env::var("MINIO_ACCESS_KEY").context("MINIO_ACCESS_KEY must be set")?,
            secret_key: env::var("MINIO_SECRET_KEY").context("MINIO_SECRET_KEY must be set")?,
            bucket: env::var("AUDIO_BUCKET").context("AUDIO_BUCKET must be set")?,

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE),
        })
    }
}
