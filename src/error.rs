//! Error taxonomy and exit code mapping.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit {
    use exitcode::ExitCode;

    pub const OK: ExitCode = exitcode::OK;
    /// Invalid command-line arguments.
    pub const CLI_ERROR: ExitCode = 1;
    /// The local environment file exists but could not be read.
    pub const ENV_FILE: ExitCode = 2;
    /// No usable text to translate.
    pub const INVALID_INPUT: ExitCode = 3;
    /// The translation request failed.
    pub const TRANSLATION: ExitCode = 4;
    /// The result could not be written.
    pub const OUTPUT: ExitCode = exitcode::IOERR;
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not read environment file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("failed to read from stdin")]
    InputRead(#[source] io::Error),

    #[error("missing {0} environment variable")]
    MissingCredential(&'static str),

    #[error("could not encode request")]
    Serialization(#[source] serde_json::Error),

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status code {status}")]
    Upstream { status: u16 },

    #[error("could not parse response")]
    ResponseParse(#[source] serde_json::Error),

    #[error("response contained no choices")]
    EmptyChoices,
}

impl AppError {
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::EnvFile { .. } => exit::ENV_FILE,
            Self::InvalidInput(_) | Self::InputRead(_) => exit::INVALID_INPUT,
            Self::MissingCredential(_)
            | Self::Serialization(_)
            | Self::Network { .. }
            | Self::Upstream { .. }
            | Self::ResponseParse(_)
            | Self::EmptyChoices => exit::TRANSLATION,
        }
    }
}

/// Maps an error bubbled up from a command to the process exit code.
///
/// Errors that do not originate from [`AppError`] only arise while writing
/// the result, so they map to [`exit::OUTPUT`].
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<AppError>()
        .map_or(exit::OUTPUT, AppError::exit_code)
}
