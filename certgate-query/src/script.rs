//! Subprocess-backed certification source.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use certgate_core::constants::{DEFAULT_QUERY_SCRIPT, DEFAULT_QUERY_TIMEOUT_SECS};
use certgate_core::error::{CertgateError, Result};
use certgate_core::traits::CertificationSource;

/// Configuration for the node-query script.
#[derive(Clone, Debug)]
pub struct QueryConfig {
    /// Path of the script to invoke.
    pub script: PathBuf,
    /// Node address passed to every invocation.
    pub node_address: String,
    /// Contract hash passed to every invocation.
    pub contract_hash: String,
    /// Upper bound on a single invocation.
    pub timeout: Duration,
}

impl QueryConfig {
    /// Creates a configuration with the default script path and timeout.
    pub fn new(node_address: impl Into<String>, contract_hash: impl Into<String>) -> Self {
        Self {
            script: PathBuf::from(DEFAULT_QUERY_SCRIPT),
            node_address: node_address.into(),
            contract_hash: contract_hash.into(),
            timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
        }
    }

    /// Overrides the script path.
    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }

    /// Overrides the invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Certification source that shells out to the node-query script.
///
/// Each query runs `<script> --public-key=<pk> --node-address=<addr>
/// --contract-hash=<hash>` and captures its output. Exit status 0 means
/// success and stdout carries the raw result; a non-zero exit carries
/// diagnostics on stderr. The invocation is killed once the configured
/// timeout elapses.
pub struct ScriptQuery {
    config: QueryConfig,
}

impl ScriptQuery {
    /// Creates a query source with the given configuration.
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CertificationSource for ScriptQuery {
    async fn query(&self, public_key: &str) -> Result<String> {
        debug!(
            script = %self.config.script.display(),
            public_key,
            "Invoking node-query script"
        );

        let output = Command::new(&self.config.script)
            .arg(format!("--public-key={}", public_key))
            .arg(format!("--node-address={}", self.config.node_address))
            .arg(format!("--contract-hash={}", self.config.contract_hash))
            .kill_on_drop(true)
            .output();

        let output = timeout(self.config.timeout, output)
            .await
            .map_err(|_| CertgateError::QueryTimeout {
                seconds: self.config.timeout.as_secs(),
            })??;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(CertgateError::QueryFailed(stderr))
        }
    }
}
