//! Task Board Server
//!
//! A small REST backend exposing CRUD operations over an in-memory task list.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use task_board::cli::Cli;
use task_board::config::ServerConfig;
use task_board::server::{AppState, start_server};
use task_board::store::TaskStore;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // Load configuration, then apply CLI overrides
    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(env) = cli.env {
        config.environment = env;
    }

    let mut store = TaskStore::new();
    if cli.seed {
        store.seed_demo();
        info!("Preloaded sample tasks");
    }

    let state = AppState::new(store, config.environment.clone());
    let (shutdown_tx, addr, server) = start_server(state, config.port).await?;

    info!("Health check: http://{}/health", addr);
    info!("Tasks API: http://{}/tasks", addr);

    tokio::signal::ctrl_c().await?;
    let _ = shutdown_tx.send(());
    let _ = server.await;

    Ok(())
}
