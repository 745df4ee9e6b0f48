//! presencemon - presence statistics API server.

use presencemon::config::Config;
use presencemon::server::{self, state::AppState};
use presencemon::store::cache::PresenceCache;
use presencemon::users::UserDirectory;
use std::sync::Arc;

#[tokio::main]
async fn main() -> presencemon::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("presencemon=info")),
        )
        .init();

    let config = Config::load()?;
    tracing::info!(
        data_csv = %config.data_csv.display(),
        port = config.port,
        ttl_secs = config.cache_ttl_secs,
        "configuration loaded"
    );

    let users = match &config.users_file {
        Some(path) => UserDirectory::load(path)?,
        None => UserDirectory::empty(),
    };
    if !users.is_empty() {
        tracing::info!(profiles = users.len(), "user directory loaded");
    }

    let cache = PresenceCache::new(config.data_csv.clone(), config.cache_ttl());

    // Warm the cache. An unreadable source is logged, not fatal:
    // requests keep retrying through the empty slot until the file
    // shows up.
    if let Err(e) = cache.get() {
        tracing::error!(
            error = %e,
            source = %config.data_csv.display(),
            "presence source not readable"
        );
    }

    server::run_server(Arc::new(AppState::new(cache, users)), config.port).await
}
