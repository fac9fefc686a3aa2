//! `clirouter` demo binary.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ clap (global options) ──▶ config ──▶ logging
//!                 │
//!                 └─ command tokens ──▶ Router::dispatch ──▶ middleware
//!                                            ▲                  │
//!   Ctrl-C ──▶ CancelSource ──▶ Context ─────┘                  ▼
//!                                                   resolvers ──▶ handler
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use clirouter::config::{load_config, AppConfig, LogFormat};
use clirouter::lifecycle::{signals, CancelSource};
use clirouter::observability::logging;
use clirouter::{Context, HelpFormatter};

use crate::commands::Workspace;

#[derive(Parser)]
#[command(name = "clirouter")]
#[command(about = "Component workspace CLI built on clirouter", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level or filter directive, overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Log format, overrides the config file.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Command tokens, passed to the router untouched.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.observability.log_format = format;
    }

    if let Err(e) = logging::init(&config.observability) {
        eprintln!("Error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let router = Arc::new(commands::router());
    let help = HelpFormatter::from_config(&config.help);

    if cli.args.is_empty() || cli.args == ["help"] {
        print!("{}", help.render(&router));
        return ExitCode::SUCCESS;
    }

    let cancel = Arc::new(CancelSource::new());
    let interrupt = signals::cancel_on_interrupt(cancel.clone());

    let context = Context::background()
        .with_cancellation(cancel.token())
        .with_value(Arc::new(Workspace::demo()));

    let dispatcher = router.clone();
    let args = cli.args;
    let result =
        tokio::task::spawn_blocking(move || dispatcher.dispatch(Some(context), &args)).await;
    interrupt.abort();
    if cancel.is_triggered() {
        tracing::info!("Command interrupted");
    }

    match result {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("Error: {}", e);
            if config.help.show_on_error {
                eprint!("{}", help.render(&router));
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Command task failed");
            ExitCode::FAILURE
        }
    }
}
