use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for the open change-request lookup cache, in seconds.
    /// Entries are invalidated synchronously on every write anyway; the TTL
    /// only bounds how long an untouched entry may live.
    pub open_request_ttl: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/shiftboard.db?mode=rwc".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            cache: CacheConfig {
                open_request_ttl: 60,
            },
        }
    }
}
