pub mod auth;
pub mod error;
pub mod format;
pub mod params;
pub mod storage;
pub mod thumbnail;
pub mod transform;

use aws_sdk_s3::Client as S3Client;
use std::sync::Arc;

/// Process-wide configuration, read from the environment once at startup
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, lambda_http::Error> {
        Ok(Self {
            bucket: std::env::var("BUCKET_NAME").map_err(|_| "BUCKET_NAME must be set")?,
            secret: std::env::var("SECRET_KEY").map_err(|_| "SECRET_KEY must be set")?,
        })
    }
}

/// Shared application state
pub struct AppState {
    pub store: storage::S3ObjectStore,
    pub config: Config,
}

impl AppState {
    pub fn new(s3_client: S3Client, config: Config) -> Arc<Self> {
        let store = storage::S3ObjectStore::new(s3_client, config.bucket.clone());
        Arc::new(Self { store, config })
    }
}
