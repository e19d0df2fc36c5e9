//! MySQL connection pool.
//!
//! Connections are opened lazily on first use, so the service starts (and
//! `GET /` answers) even when the database is not reachable yet.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// Connection options derived from the database configuration.
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.name);

    if config.password.is_empty() {
        options
    } else {
        options.password(&config.password)
    }
}

/// Build the bounded, lazily-connecting pool shared by all handlers.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        pool_size = config.pool_size,
        "Creating database pool"
    );

    MySqlPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(connect_options(config))
}
