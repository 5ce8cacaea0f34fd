use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plantguard_api::config::ServerConfig;
use plantguard_api::router::build_app_router;
use plantguard_api::state::AppState;
use plantguard_core::detection::{CatalogDetector, DetectionService};
use plantguard_core::store::ImageStore;
use plantguard_storage::{LocalImageStore, S3ImageStore, StorageBackend};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plantguard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = plantguard_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    plantguard_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    plantguard_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Blob store ---
    let image_store: Arc<dyn ImageStore> = match config.storage.backend {
        StorageBackend::Local => {
            tracing::info!(dir = %config.storage.upload_dir, "Using local image store");
            Arc::new(LocalImageStore::new(
                &config.storage.upload_dir,
                &config.storage.public_base_url,
            ))
        }
        StorageBackend::S3 => {
            let bucket = config
                .storage
                .s3_bucket
                .as_deref()
                .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3");
            tracing::info!(%bucket, "Using S3 image store");
            Arc::new(S3ImageStore::from_env(bucket, &config.storage.public_base_url).await)
        }
    };

    // --- Detection backend ---
    let detector: Arc<dyn DetectionService> = Arc::new(CatalogDetector);

    // --- App state and router ---
    let state = AppState::new(pool, Arc::new(config.clone()), image_store, detector);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
