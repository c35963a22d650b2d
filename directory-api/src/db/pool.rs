//! Connection pool construction

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};

use crate::config::{DatabaseConfig, DbTlsMode};

impl DbTlsMode {
    pub fn ssl_mode(&self) -> MySqlSslMode {
        match self {
            DbTlsMode::Verify => MySqlSslMode::VerifyIdentity,
            // Encrypted, certificate not checked
            DbTlsMode::AcceptInvalidCerts => MySqlSslMode::Required,
            DbTlsMode::Disabled => MySqlSslMode::Disabled,
        }
    }
}

pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(config.tls.ssl_mode())
}

/// Build the process-wide pool without opening a connection.
///
/// Connections are established on first use, so a server started with an
/// unreachable or misconfigured database still answers `/health`.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(connect_options(config))
}
