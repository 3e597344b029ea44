//! Centralized configuration for the mobiledeploy toolkit.
//!
//! Fixed paths and endpoint parameters live here as explicit configuration
//! structures, constructed once at startup and passed into each operation.

use std::path::PathBuf;
use std::time::Duration;

/// Default filesystem layout for the conversion pipeline.
pub struct PathsConfig;

impl PathsConfig {
    pub const SOURCE_MODEL: &'static str = "classification/models/mobilenet/mobilenet_best.h5";
    pub const DEST_MODEL: &'static str = "assets/models/mobilenet_best.tflite";
    pub const SOURCE_LABELS: &'static str = "classification/models/class_names.json";
    pub const DEST_LABELS: &'static str = "assets/models/class_names.json";
    pub const CONVERTER_SCRIPT_DIR: &'static str = "scripts";
}

/// Network-related configuration for the API probe.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const ENDPOINT_BASE: &'static str =
        "https://generativelanguage.googleapis.com/v1beta/models";
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";
    pub const KEY_QUERY_PARAM: &'static str = "key";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";
    pub const DEFAULT_PROMPT: &'static str =
        "Say a short hello and tell me the current model name you are using.";
}

/// Source and destination paths for one deployment run.
#[derive(Debug, Clone)]
pub struct DeployPaths {
    /// Serialized trained model (read-only input).
    pub source_model: PathBuf,
    /// Mobile-optimized artifact, overwritten on each run.
    pub dest_model: PathBuf,
    /// Class-label manifest input.
    pub source_labels: PathBuf,
    /// Re-encoded manifest copy next to the deployed model.
    pub dest_labels: PathBuf,
}

impl Default for DeployPaths {
    fn default() -> Self {
        Self {
            source_model: PathBuf::from(PathsConfig::SOURCE_MODEL),
            dest_model: PathBuf::from(PathsConfig::DEST_MODEL),
            source_labels: PathBuf::from(PathsConfig::SOURCE_LABELS),
            dest_labels: PathBuf::from(PathsConfig::DEST_LABELS),
        }
    }
}

/// Configuration for a single API probe.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Model identifier interpolated into the endpoint template.
    pub model: String,
    /// Prompt text sent as the request body.
    pub prompt: String,
    /// Hard bound on the single HTTP round-trip.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            model: NetworkConfig::DEFAULT_MODEL.to_string(),
            prompt: NetworkConfig::DEFAULT_PROMPT.to_string(),
            timeout: NetworkConfig::REQUEST_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// Full `generateContent` endpoint URL for the configured model,
    /// without the key query parameter.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            NetworkConfig::ENDPOINT_BASE,
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_match_asset_layout() {
        let paths = DeployPaths::default();
        assert!(paths.source_model.ends_with("mobilenet_best.h5"));
        assert!(paths.dest_model.starts_with("assets/models"));
        assert_eq!(
            paths.dest_labels,
            PathBuf::from("assets/models/class_names.json")
        );
    }

    #[test]
    fn test_endpoint_url() {
        let config = ProbeConfig::default();
        assert_eq!(
            config.endpoint_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_timeout_default() {
        assert_eq!(ProbeConfig::default().timeout, Duration::from_secs(30));
    }
}
