//! Certgate CLI
//!
//! Command-line interface for the certgate certification gateway.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use certgate_api::{ApiConfig, ApiServer};
use certgate_core::constants::{
    DEFAULT_BIND, DEFAULT_PORT, DEFAULT_QUERY_SCRIPT, DEFAULT_QUERY_TIMEOUT_SECS,
};
use certgate_core::traits::CertificationSource;
use certgate_core::types::CertStatus;
use certgate_query::{QueryConfig, ScriptQuery};

/// Certgate - Certification Lookup Gateway
#[derive(Parser)]
#[command(name = "certgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: String,
    },

    /// Look up the certification status of a public key once
    Check {
        /// Public key to look up
        public_key: String,
        /// Node address
        #[arg(long, env = "NODE_ADDRESS")]
        node_address: String,
        /// Contract hash
        #[arg(long, env = "CONTRACT_HASH")]
        contract_hash: String,
        /// Path of the node-query script
        #[arg(long, env = "QUERY_SCRIPT", default_value = DEFAULT_QUERY_SCRIPT)]
        script: String,
        /// Query timeout in seconds
        #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_SECS)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "certgate=debug,info"
    } else {
        "certgate=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Check {
            public_key,
            node_address,
            contract_hash,
            script,
            timeout,
        } => cmd_check(&public_key, node_address, contract_hash, script, timeout).await,
    }
}

/// Run the API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    let config = ApiConfig::from_env().context("Failed to load configuration")?;
    let ip: IpAddr = bind.parse().context("Invalid bind address")?;

    println!(
        "{} {}:{}",
        "🚀 Starting certgate API server on".cyan().bold(),
        bind,
        port
    );

    let server = ApiServer::new(config);
    server.run((ip, port)).await.context("Server error")
}

/// One-shot certification lookup, bypassing the HTTP layer
async fn cmd_check(
    public_key: &str,
    node_address: String,
    contract_hash: String,
    script: String,
    timeout: u64,
) -> Result<()> {
    println!("{} {}", "🔍 Checking:".cyan().bold(), public_key);

    let config = QueryConfig::new(node_address, contract_hash)
        .with_script(script)
        .with_timeout(Duration::from_secs(timeout));
    let query = ScriptQuery::new(config);

    let status = match query.query(public_key).await {
        Ok(raw) => CertStatus::from_query_output(&raw),
        Err(err) => {
            eprintln!("{} {}", "⚠️  Query failed:".yellow().bold(), err);
            CertStatus::not_certified()
        }
    };

    if status.is_not_certified() {
        println!("{} {}", "❌ Status:".red().bold(), status);
    } else {
        println!("{} {}", "✅ Status:".green().bold(), status);
    }

    Ok(())
}
