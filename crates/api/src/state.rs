use std::sync::Arc;

use crate::cache::ListingVersions;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, built once at startup.
    pub pool: carteira_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Listing versions backing the `ETag`s of collection endpoints.
    pub listings: Arc<ListingVersions>,
}

impl AppState {
    pub fn new(pool: carteira_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            listings: Arc::new(ListingVersions::new()),
        }
    }
}
