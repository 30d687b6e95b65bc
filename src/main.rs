mod cli;
mod config;
mod editor;
mod model;
mod notify;
mod render;
mod report;
mod session;
mod storage;

use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::Config;
use notify::Notice;
use session::Session;
use storage::Storage;

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("troca_turno={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(notice) = start(cli) {
        notice.show();
        process::exit(1);
    }
}

fn start(cli: Cli) -> Result<(), Notice> {
    let home = config::resolve_home(cli.home.as_deref()).map_err(|e| Notice::error(e.to_string()))?;
    let config = Config::load(&home).map_err(|e| Notice::error(e.to_string()))?;
    let storage = Storage::new(&home).map_err(|e| {
        Notice::error(format!("Falha ao abrir {}: {e}", home.display()))
    })?;
    tracing::debug!(home = %home.display(), "opened data directory");

    let (mut session, notice) = Session::open(storage);
    if let Some(notice) = notice {
        notice.show();
    }

    cli::run(cli.command, &config, &mut session)
}
