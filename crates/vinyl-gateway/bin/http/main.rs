mod cli;

use std::sync::Arc;

use crate::cli::{CacheBackendArg, StorageBackendArg, CLI};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use vinyl_cache::{AlbumCache, MokaTitleCache, RedisTitleCache};
use vinyl_gateway::bootstrap::sync_titles;
use vinyl_gateway::{App, AppState};
use vinyl_storage::{InMemoryRepository, MongoRepository, Repository};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = CLI::parse();
    vinyl_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        cache_backend = %config.cache,
        "starting album gateway"
    );

    let repository: Arc<dyn Repository> = match config.storage {
        StorageBackendArg::MongoDb => Arc::new(
            MongoRepository::connect(&config.mongodb_uri, &config.mongodb_database).await?,
        ),
        StorageBackendArg::InMemory => Arc::new(InMemoryRepository::new()),
    };

    let cache: Option<Arc<dyn AlbumCache>> = match config.cache {
        CacheBackendArg::None => None,
        CacheBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .ok_or("redis url is required when cache backend is redis")?;
            Some(Arc::new(RedisTitleCache::connect(redis_url).await?))
        }
        CacheBackendArg::InMemory => Some(Arc::new(MokaTitleCache::new())),
    };

    if let Some(cache) = &cache {
        sync_titles(&*repository, &**cache).await?;
    }

    let router = App::router(AppState::new(repository));
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "serving album gateway");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("album gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
