//! Error types for the mobiledeploy toolkit.
//!
//! Every operation returns one of the named error kinds below; the CLI entry
//! points pattern-match on the result to pick an exit code and message instead
//! of relying on a catch-all.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::NetworkConfig;

/// Main error type for mobiledeploy operations.
#[derive(Debug, Error)]
pub enum DeployError {
    // Conversion pipeline errors
    #[error("Model load failed: {message}")]
    ModelLoad { message: String },

    #[error("Conversion failed: {message}")]
    Conversion { message: String },

    #[error("Label manifest load failed at {path}: {message}")]
    ManifestLoad { path: PathBuf, message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Probe errors
    #[error("Missing API credential: pass it as the first argument or set {}", NetworkConfig::API_KEY_ENV)]
    MissingCredential,

    #[error("HTTP error {status_code}: {body}")]
    Http { status_code: u16, body: String },

    #[error("Network error: {message}")]
    Network { message: String },
}

/// Result type alias for mobiledeploy operations.
pub type Result<T> = std::result::Result<T, DeployError>;

// Conversion implementations for common error types

impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        DeployError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for DeployError {
    fn from(err: serde_json::Error) -> Self {
        DeployError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for DeployError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        DeployError::Network { message }
    }
}

impl DeployError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DeployError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Process exit code for this error.
    ///
    /// Every classified failure maps to 1; success is always 0. Kept as a
    /// method so the CLI never hardcodes the mapping.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::ModelLoad { .. }
            | DeployError::Conversion { .. }
            | DeployError::ManifestLoad { .. }
            | DeployError::Io { .. }
            | DeployError::Json { .. }
            | DeployError::MissingCredential
            | DeployError::Http { .. }
            | DeployError::Network { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeployError::ModelLoad {
            message: "source model not found: model.h5".into(),
        };
        assert_eq!(
            err.to_string(),
            "Model load failed: source model not found: model.h5"
        );

        let err = DeployError::Http {
            status_code: 403,
            body: "{\"error\":\"invalid key\"}".into(),
        };
        assert_eq!(err.to_string(), "HTTP error 403: {\"error\":\"invalid key\"}");
    }

    #[test]
    fn test_missing_credential_names_env_var() {
        let msg = DeployError::MissingCredential.to_string();
        assert!(msg.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DeployError::MissingCredential.exit_code(), 1);
        assert_eq!(
            DeployError::Network {
                message: "timeout".into()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn test_io_with_path_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DeployError::io_with_path(io, "assets/models/out.tflite");
        match err {
            DeployError::Io { path: Some(p), .. } => {
                assert!(p.ends_with("out.tflite"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
