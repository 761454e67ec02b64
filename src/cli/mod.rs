pub mod commands;

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::Parser;

use crate::config::OutputConfig;
use crate::fetcher::FetchOptions;
use crate::format::Layout;

#[derive(Parser, Debug)]
#[command(name = "altfeed", version, long_version = long_version())]
#[command(about = "Prints the alt text for the most recent XKCD comic", long_about = None)]
pub struct Cli {
    /// Print alt text for the Nth previous strip. Without a value, N is 1
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 0,
        num_args = 0..=1,
        default_missing_value = "1"
    )]
    pub back: usize,

    /// Print alt text and attribution on one line
    #[arg(short, long)]
    pub one_line: bool,

    /// Log what the HTTP client is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip verification of the server's TLS certificate
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Column to wrap alt text at (overrides the config file)
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Path to a config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    format!(
        "{} ({}, {} {})",
        env!("CARGO_PKG_VERSION"),
        profile,
        std::env::consts::ARCH,
        std::env::consts::OS
    )
});

/// Version text for `--version`: crate version, build profile and target.
pub fn long_version() -> &'static str {
    LONG_VERSION.as_str()
}

/// Default tracing filter when `RUST_LOG` is unset.
///
/// reqwest only dumps connection traffic when its `reqwest::connect::verbose`
/// target is enabled at TRACE, so verbose mode turns that target up too.
pub fn log_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug,reqwest::connect=trace"
    } else {
        "warn"
    }
}

impl Cli {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            verbose: self.verbose,
            insecure: self.insecure,
        }
    }

    pub fn layout(&self, output: &OutputConfig) -> Layout {
        if self.one_line {
            Layout::OneLine
        } else {
            Layout::Fortune {
                width: self.width.unwrap_or(output.width),
                hard_wrap: output.hard_wrap,
            }
        }
    }
}
