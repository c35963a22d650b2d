//! API server configuration

use std::fmt;
use std::time::Duration;

/// Variables reported when unset. `DB_PORT` still falls back to 3306.
const REQUIRED_DB_VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_NAME", "DB_USER", "DB_PASSWORD"];

/// How the database connection treats the server's TLS certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbTlsMode {
    /// Encrypt and verify certificate chain and host name
    #[default]
    Verify,
    /// Encrypt but accept any server certificate (opt-in, insecure)
    AcceptInvalidCerts,
    /// Plain TCP
    Disabled,
}

/// Record store connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    /// Upper bound on pooled connections
    pub pool_size: u32,
    /// How long a request waits for a pooled connection before failing
    pub acquire_timeout: Duration,
    pub tls: DbTlsMode,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("pool_size", &self.pool_size)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("tls", &self.tls)
            .finish()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub http_port: u16,
    pub database: DatabaseConfig,
    /// Required database variables that were unset or empty
    pub missing: Vec<&'static str>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Never fails: missing database settings are reported in
    /// [`Config::missing`] and surface later as store errors.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let flag = |name: &str| {
            var(name)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false)
        };

        let missing = REQUIRED_DB_VARS
            .into_iter()
            .filter(|name| var(*name).is_none())
            .collect();

        let tls = if flag("DB_SSL_DISABLED") {
            DbTlsMode::Disabled
        } else if flag("DB_SSL_ACCEPT_INVALID_CERTS") {
            DbTlsMode::AcceptInvalidCerts
        } else {
            DbTlsMode::Verify
        };

        Self {
            http_port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000),
            database: DatabaseConfig {
                host: var("DB_HOST").unwrap_or_default(),
                port: var("DB_PORT").and_then(|p| p.parse().ok()).unwrap_or(3306),
                name: var("DB_NAME").unwrap_or_default(),
                user: var("DB_USER").unwrap_or_default(),
                password: var("DB_PASSWORD").unwrap_or_default(),
                pool_size: var("DB_POOL_SIZE")
                    .and_then(|p| p.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(10),
                acquire_timeout: Duration::from_secs(
                    var("DB_ACQUIRE_TIMEOUT_SECS")
                        .and_then(|p| p.parse().ok())
                        .unwrap_or(30),
                ),
                tls,
            },
            missing,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
