//! The deployment pipeline: convert the model, then copy the label manifest.
//!
//! Both operations are single-shot transforms with exactly two outcomes,
//! success or a classified failure. They are independent and idempotent;
//! re-running either overwrites its destination with no side effects on the
//! other. Destinations are written atomically, so a failure never leaves a
//! truncated artifact behind.

use crate::config::DeployPaths;
use crate::convert::backend::ModelBackend;
use crate::convert::types::{
    ConversionResult, DeployReport, ManifestCopyResult, OptimizationPolicy,
};
use crate::{fsio, DeployError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Convert the serialized model at `source` and write the optimized artifact
/// to `dest`.
///
/// Fails with `ModelLoad` when the source is missing, unreadable, or empty;
/// backend failures surface as `ModelLoad` or `Conversion` per the backend's
/// classification; `Io` covers destination write failures.
pub fn convert_model(
    backend: &dyn ModelBackend,
    source: &Path,
    dest: &Path,
    policy: &OptimizationPolicy,
) -> Result<ConversionResult> {
    info!("Loading serialized model from {}", source.display());
    let model = fs::read(source).map_err(|e| DeployError::ModelLoad {
        message: format!("cannot read source model {}: {e}", source.display()),
    })?;
    if model.is_empty() {
        return Err(DeployError::ModelLoad {
            message: format!("source model {} is empty", source.display()),
        });
    }

    info!("Converting to mobile format");
    let blob = backend.convert(&model, policy)?;
    if blob.is_empty() {
        return Err(DeployError::Conversion {
            message: "backend returned an empty artifact".to_string(),
        });
    }

    fsio::atomic_write(dest, &blob)?;
    let bytes_written = blob.len() as u64;
    info!(
        "Optimized model saved to {} ({} bytes)",
        dest.display(),
        bytes_written
    );

    Ok(ConversionResult {
        output_path: dest.to_path_buf(),
        bytes_written,
    })
}

/// Re-encode the class-label manifest at `source` and write it to `dest`.
///
/// The manifest must parse as a JSON array of names or an object of
/// key-to-name pairs; anything else is `ManifestLoad`. Output is
/// pretty-printed with entry order preserved.
pub fn copy_label_manifest(source: &Path, dest: &Path) -> Result<ManifestCopyResult> {
    let raw = fs::read_to_string(source).map_err(|e| DeployError::ManifestLoad {
        path: source.to_path_buf(),
        message: e.to_string(),
    })?;

    let manifest: Value = serde_json::from_str(&raw).map_err(|e| DeployError::ManifestLoad {
        path: source.to_path_buf(),
        message: format!("invalid JSON: {e}"),
    })?;

    let entries = match &manifest {
        Value::Array(names) => names.len(),
        Value::Object(map) => map.len(),
        _ => {
            return Err(DeployError::ManifestLoad {
                path: source.to_path_buf(),
                message: "expected an array or object of class names".to_string(),
            });
        }
    };

    let serialized = serde_json::to_string_pretty(&manifest)?;
    fsio::atomic_write(dest, serialized.as_bytes())?;
    info!(
        "Class names copied to {} ({} entries)",
        dest.display(),
        entries
    );

    Ok(ManifestCopyResult {
        output_path: dest.to_path_buf(),
        entries,
    })
}

/// Run the full deployment: model conversion first, then the manifest copy.
/// The first failure aborts the run; the second step never runs after a
/// failed first step.
pub fn run(
    backend: &dyn ModelBackend,
    paths: &DeployPaths,
    policy: &OptimizationPolicy,
) -> Result<DeployReport> {
    let model = convert_model(backend, &paths.source_model, &paths.dest_model, policy)?;
    let labels = copy_label_manifest(&paths.source_labels, &paths.dest_labels)?;
    Ok(DeployReport { model, labels })
}
