use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use altfeed::app::error::EXIT_USAGE;
use altfeed::app::{AppContext, Result};
use altfeed::cli::{commands, log_directive, Cli};
use altfeed::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Initialize tracing on stderr; stdout carries only the alt text
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_directive(cli.verbose))),
        )
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let layout = cli.layout(&config.output);
    let ctx = AppContext::new(config, cli.fetch_options())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::show_alt_text(&ctx, cli.back, layout, &mut out).await
}
