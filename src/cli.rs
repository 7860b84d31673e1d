//! CLI definitions for the task board server.
//!
//! Defined with clap's derive macros; the binary has a single "serve" role,
//! so there are no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// Task board HTTP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides config file and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Environment name reported by the health endpoint (overrides APP_ENV)
    #[arg(long)]
    pub env: Option<String>,

    /// Preload the sample tasks at startup
    #[arg(long)]
    pub seed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from(["task-board", "--port", "8080", "--env", "staging", "--seed"]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.env.as_deref(), Some("staging"));
        assert!(cli.seed);
        assert_eq!(cli.log, "2");
    }
}
