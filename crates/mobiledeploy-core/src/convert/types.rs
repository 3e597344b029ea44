//! Types for the model conversion pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Size/latency optimization applied by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizeMode {
    /// Backend's default size/latency optimization.
    Default,
    /// No optimization pass.
    None,
}

impl OptimizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeMode::Default => "default",
            OptimizeMode::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(OptimizeMode::Default),
            "none" => Some(OptimizeMode::None),
            _ => None,
        }
    }
}

/// Numeric precision of weights in the output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPrecision {
    Float16,
    Float32,
}

impl WeightPrecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightPrecision::Float16 => "float16",
            WeightPrecision::Float32 => "float32",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "float16" | "f16" => Some(WeightPrecision::Float16),
            "float32" | "f32" => Some(WeightPrecision::Float32),
            _ => None,
        }
    }
}

/// Optimization policy handed to the backend.
///
/// The fixed production policy is default optimization with float16 weights;
/// both knobs are exposed so callers can override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizationPolicy {
    pub optimize: OptimizeMode,
    pub weight_precision: WeightPrecision,
}

impl Default for OptimizationPolicy {
    fn default() -> Self {
        Self {
            optimize: OptimizeMode::Default,
            weight_precision: WeightPrecision::Float16,
        }
    }
}

/// Outcome of a successful model conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Destination the optimized artifact was written to.
    pub output_path: PathBuf,
    /// Size of the written artifact; always equals the file's on-disk size.
    pub bytes_written: u64,
}

/// Outcome of a successful label manifest copy.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestCopyResult {
    pub output_path: PathBuf,
    /// Number of class entries carried over.
    pub entries: usize,
}

/// Combined report for one full deployment run.
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub model: ConversionResult,
    pub labels: ManifestCopyResult,
}
