use std::process::ExitCode;

use clap::Parser;
use os101::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        if let Err(e) = init_debug_log() {
            eprintln!("Error: unable to open debug log: {e}");
            return ExitCode::FAILURE;
        }
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", cli::report(&e));
            ExitCode::FAILURE
        }
    }
}

fn init_debug_log() -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/os101-debug.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!("os101 debug log started — tail -f /tmp/os101-debug.log");
    Ok(())
}
