use std::process::ExitCode;
use thiserror::Error;

/// Process exit codes reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    GeneralError = 1,
    DataError = 2,
    ProtocolError = 3,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

#[derive(Error, Debug)]
pub enum SymcheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found at {0}")]
    ConfigNotFound(String),

    #[error("Reference table not found: {0}")]
    TableNotFound(String),

    #[error("Reference data error: {0}")]
    Data(String),

    #[error("Conversation protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SymcheckError {
    /// Map the error to its process exit status
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SymcheckError::Config(_)
            | SymcheckError::ConfigNotFound(_)
            | SymcheckError::Io(_)
            | SymcheckError::TomlParse(_)
            | SymcheckError::Json(_) => ExitStatus::GeneralError,

            SymcheckError::TableNotFound(_) | SymcheckError::Data(_) => ExitStatus::DataError,

            SymcheckError::Protocol(_) => ExitStatus::ProtocolError,
        }
    }
}

pub type Result<T> = std::result::Result<T, SymcheckError>;
