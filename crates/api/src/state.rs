use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through the `State` extractor. Cloning is
/// cheap: the pool is internally reference-counted and the config sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: innsight_db::DbPool,
    pub config: Arc<ServerConfig>,
}
