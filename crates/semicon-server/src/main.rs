// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Server Binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `semicon-server` - serve the semiconductor teaching API.
//!
//! ```bash
//! # defaults: 0.0.0.0:8000, prefix /api/v1
//! semicon-server
//!
//! # shipped config, local bind, debug logs
//! semicon-server --config config/server.json --bind 127.0.0.1:8080 -v
//! ```

use std::process::ExitCode;

use clap::Parser;
use semicon_server::build_router;
use semicon_types::config::ServerConfig;
use semicon_types::error::SemiconResult;
use tracing_subscriber::EnvFilter;

/// SCPN Semiconductor Lab HTTP API
#[derive(Parser)]
#[command(name = "semicon-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(short, long, env = "SEMICON_CONFIG")]
    config: Option<String>,

    /// Override the listen address
    #[arg(short, long, env = "SEMICON_BIND")]
    bind: Option<String>,

    /// Override the API prefix
    #[arg(long)]
    api_prefix: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(default_filter: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> SemiconResult<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.bind_addr = bind.clone();
    }
    if let Some(prefix) = &cli.api_prefix {
        config.api_prefix = prefix.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

async fn run(config: ServerConfig) -> SemiconResult<()> {
    let app = build_router(&config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        prefix = %config.api_prefix,
        origins = config.cors_origins.len(),
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("semicon-server: {e}");
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&config.log_filter, cli.verbose);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind(), "{e}");
            ExitCode::FAILURE
        }
    }
}
