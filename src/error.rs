//! Application error taxonomy.
//!
//! Only configuration errors and a missing source folder are allowed to
//! surface to the user; everything per-item degrades and is logged.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error (fatal at startup)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// File / folder error
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// Semantic classifier error (absorbed by the cascade, never fatal)
    #[error("semantic classifier error: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing
    #[error("environment variable {var_name} is not set")]
    EnvVarNotFound { var_name: String },
    /// An environment variable holds an unparseable value
    #[error("environment variable {var_name}: value '{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// File and folder errors.
#[derive(Debug, Error)]
pub enum FileError {
    /// The source folder does not exist
    #[error("folder not found: {path}")]
    DirectoryNotFound { path: String },
    /// The source folder exists but holds no usable source files
    #[error("no source files found in {path}")]
    NoSources { path: String },
    /// Reading a source file failed
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Writing an export file failed
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the remote semantic classifier call.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-success HTTP status
    #[error("classifier returned status {status}")]
    BadStatus { status: u16 },
    /// Response body carries no balanced JSON object
    #[error("no JSON object found in classifier response")]
    NoJsonObject,
    /// Response body missing the expected candidate text
    #[error("classifier response has no candidate text")]
    EmptyCandidate,
    /// The extracted span is not valid JSON
    #[error("failed to parse classifier response: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

// ========== convenience constructors ==========

impl AppError {
    /// Missing-environment-variable config error.
    pub fn env_var_not_found(var_name: impl Into<String>) -> Self {
        AppError::Config(ConfigError::EnvVarNotFound {
            var_name: var_name.into(),
        })
    }

    /// Missing source/output folder.
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::DirectoryNotFound { path: path.into() })
    }

    /// File read failure.
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// Export write failure.
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;
