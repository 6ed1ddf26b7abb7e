//! busloop Binary
//!
//! Starts the interactive menu on stdin/stdout.

use std::io::BufReader;

use busloop::{Config, Session, Shell};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// busloop — interactive circular bus route modeling
#[derive(Parser, Debug)]
#[command(name = "busloop")]
#[command(about = "Model a single circular bus route from a numbered menu")]
#[command(version)]
struct Args {
    /// Route file used when a save/load prompt is left empty
    #[arg(short, long, default_value = "route.csv")]
    file: String,

    /// Populate the built-in sample route before the first prompt
    #[arg(short, long)]
    sample: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,busloop=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("busloop v{}", busloop::VERSION);
    tracing::info!("Default route file: {}", args.file);

    // Build config from args
    let config = Config::builder()
        .route_file(&args.file)
        .sample_on_start(args.sample)
        .build();

    let session = Session::new(config);
    let shell = Shell::new(session, BufReader::new(std::io::stdin()), std::io::stdout());

    if let Err(e) = shell.run() {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
