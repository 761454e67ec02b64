use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;
use crate::document::DocumentError;

/// Exit status for a command line that clap rejected.
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_TRANSPORT: u8 = 2;
pub const EXIT_EXTRACTION: u8 = 3;
pub const EXIT_EMPTY_FEED: u8 = 4;
pub const EXIT_OUT_OF_RANGE: u8 = 5;
pub const EXIT_ENVIRONMENT: u8 = 6;

#[derive(Error, Debug)]
pub enum AltError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {}: {reason}", .status.as_u16())]
    Status { status: StatusCode, reason: String },

    #[error("Feed parsing error: {0}")]
    Parse(#[from] DocumentError),

    #[error("Could not extract '{field}' from feed item: {reason}")]
    Extraction { field: String, reason: String },

    #[error("Malformed feed: missing {0}")]
    Structure(String),

    #[error("Couldn't find any alt text in the feed")]
    EmptyFeed,

    #[error("Can only go back at most {max} items, not {requested}")]
    OutOfRange { max: usize, requested: usize },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AltError {
    pub fn extraction(field: &str, reason: impl ToString) -> Self {
        Self::Extraction {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Process exit status for this failure category.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Http(_) | Self::Status { .. } => EXIT_TRANSPORT,
            Self::Parse(_) | Self::Extraction { .. } | Self::Structure(_) => EXIT_EXTRACTION,
            Self::EmptyFeed => EXIT_EMPTY_FEED,
            Self::OutOfRange { .. } => EXIT_OUT_OF_RANGE,
            Self::InvalidUrl(_) | Self::Config(_) | Self::Io(_) => EXIT_ENVIRONMENT,
        }
    }
}

pub type Result<T> = std::result::Result<T, AltError>;
