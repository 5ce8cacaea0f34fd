use crate::auth::jwt::JwtConfig;
use plantguard_storage::StorageBackend;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`). Must exceed
    /// `analyze_timeout_secs` so a slow analysis fails through the
    /// pipeline's own timeout rather than the outer layer.
    pub request_timeout_secs: u64,
    /// Upper bound for one upload-and-analysis run in seconds (default: `60`).
    pub analyze_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Image blob store configuration.
    pub storage: StorageConfig,
}

/// Blob store configuration for uploaded crop images.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Which provider to use.
    pub backend: StorageBackend,
    /// Directory for the local provider (default: `uploads`).
    pub upload_dir: String,
    /// Public base URL under which stored images resolve.
    pub public_base_url: String,
    /// Bucket name, required when `backend` is `s3`.
    pub s3_bucket: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                 |
    /// |--------------------------|-----------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                               |
    /// | `PORT`                   | `3000`                                  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`                 |
    /// | `REQUEST_TIMEOUT_SECS`   | `90`                                    |
    /// | `ANALYZE_TIMEOUT_SECS`   | `60`                                    |
    /// | `STORAGE_BACKEND`        | `local`                                 |
    /// | `UPLOAD_DIR`             | `uploads`                               |
    /// | `UPLOAD_PUBLIC_BASE_URL` | `http://localhost:3000/uploads`         |
    /// | `S3_BUCKET`              | -- (required when `STORAGE_BACKEND=s3`) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let analyze_timeout_secs: u64 = std::env::var("ANALYZE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("ANALYZE_TIMEOUT_SECS must be a valid u64");

        assert_timeout_ordering(request_timeout_secs, analyze_timeout_secs);

        let jwt = JwtConfig::from_env();
        let storage = StorageConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            analyze_timeout_secs,
            jwt,
            storage,
        }
    }
}

/// An outer request timeout at or below the analyze budget would cut off
/// every slow analysis before the pipeline's own timeout can report it.
fn assert_timeout_ordering(request_timeout_secs: u64, analyze_timeout_secs: u64) {
    assert!(
        request_timeout_secs > analyze_timeout_secs,
        "REQUEST_TIMEOUT_SECS ({request_timeout_secs}) must exceed \
         ANALYZE_TIMEOUT_SECS ({analyze_timeout_secs})"
    );
}

impl StorageConfig {
    /// Load blob store configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `STORAGE_BACKEND` names an unknown provider, or if it is
    /// `s3` and `S3_BUCKET` is not set.
    pub fn from_env() -> Self {
        let backend_name = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        let backend = StorageBackend::from_name(&backend_name)
            .unwrap_or_else(|e| panic!("Invalid STORAGE_BACKEND: {e}"));

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());

        let public_base_url = std::env::var("UPLOAD_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/uploads".into());

        let s3_bucket = std::env::var("S3_BUCKET").ok();
        if backend == StorageBackend::S3 {
            assert!(
                s3_bucket.is_some(),
                "S3_BUCKET must be set when STORAGE_BACKEND=s3"
            );
        }

        Self {
            backend,
            upload_dir,
            public_base_url,
            s3_bucket,
        }
    }
}
