//! # e9th
//!
//! Static build tool for the E9TH landing page.
//!
//! ```bash
//! e9th build --out dist          # write dist/index.html
//! e9th check                     # fail on broken anchors / bad tables
//! e9th content --json            # dump the content tables
//! ```

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "e9th")]
#[command(about = "Build and check the static E9TH landing page")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write <out>/index.html
    Build {
        /// Config file (default: ./e9th.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory (default: build.out_dir or "dist")
        #[arg(long)]
        out: Option<PathBuf>,
        /// Viewport width used to classify the prerendered layout
        #[arg(long)]
        viewport_width: Option<u32>,
    },
    /// Render the page and report broken anchors or invalid content tables
    Check {
        /// Config file (default: ./e9th.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the content tables
    Content {
        /// Emit JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(level: &str) {
    // Logs go to stderr; stdout carries command output (JSON for `content --json`).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    debug!("e9th v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Build {
            config,
            out,
            viewport_width,
        } => commands::build(config.as_deref(), out.as_deref(), viewport_width),
        Command::Check { config } => commands::check(config.as_deref()),
        Command::Content { json } => commands::content(json),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[e9th] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
