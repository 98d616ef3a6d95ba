//! App state: cache, query source, config.

use std::sync::Arc;
use std::time::{Duration, Instant};

use certgate_cache::{CacheConfig, CertCache};
use certgate_core::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECONDS, DEFAULT_QUERY_SCRIPT,
    DEFAULT_QUERY_TIMEOUT_SECS,
};
use certgate_core::error::{CertgateError, Result};
use certgate_core::traits::CertificationSource;
use certgate_query::{QueryConfig, ScriptQuery};

/// API server configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Node address handed to every query invocation.
    pub node_address: String,
    /// Contract hash handed to every query invocation.
    pub contract_hash: String,
    /// Path of the node-query script.
    pub query_script: String,
    /// Timeout for a single script invocation, in seconds.
    pub query_timeout_secs: u64,
    /// Certification cache capacity.
    pub cache_capacity: usize,
    /// Certification cache TTL in seconds.
    pub cache_ttl_seconds: u64,
}

impl ApiConfig {
    /// Reads the configuration from the environment.
    ///
    /// `NODE_ADDRESS` and `CONTRACT_HASH` are required; everything else
    /// falls back to the service defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let node_address = std::env::var("NODE_ADDRESS")
            .map_err(|_| CertgateError::Config("NODE_ADDRESS is not set".into()))?;
        let contract_hash = std::env::var("CONTRACT_HASH")
            .map_err(|_| CertgateError::Config("CONTRACT_HASH is not set".into()))?;

        Ok(Self {
            node_address,
            contract_hash,
            query_script: std::env::var("QUERY_SCRIPT")
                .unwrap_or_else(|_| DEFAULT_QUERY_SCRIPT.into()),
            query_timeout_secs: env_parsed("QUERY_TIMEOUT_SECS", DEFAULT_QUERY_TIMEOUT_SECS),
            cache_capacity: env_parsed("CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY),
            cache_ttl_seconds: env_parsed("CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS),
        })
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Shared application state, owned by the composition root.
pub struct AppState {
    /// Immutable service configuration.
    pub config: ApiConfig,
    /// The certification cache, the only shared mutable state.
    pub cache: CertCache,
    /// The certification source consulted on cache misses.
    pub source: Arc<dyn CertificationSource>,
    /// Server start time, for the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state with a script-backed certification source.
    pub fn new(config: ApiConfig) -> Self {
        let query_config = QueryConfig::new(&config.node_address, &config.contract_hash)
            .with_script(&config.query_script)
            .with_timeout(Duration::from_secs(config.query_timeout_secs));

        let source = Arc::new(ScriptQuery::new(query_config));
        Self::with_source(config, source)
    }

    /// Creates the state with an explicit certification source.
    pub fn with_source(config: ApiConfig, source: Arc<dyn CertificationSource>) -> Self {
        let cache = CertCache::with_config(CacheConfig {
            capacity: config.cache_capacity,
            ttl_seconds: config.cache_ttl_seconds,
        });

        Self {
            config,
            cache,
            source,
            started_at: Instant::now(),
        }
    }
}
