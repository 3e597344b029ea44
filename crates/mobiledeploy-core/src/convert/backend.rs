//! Model conversion backends.
//!
//! The pipeline never talks to an ML framework directly; it hands the
//! serialized model to a [`ModelBackend`] and gets the optimized blob back.
//! The production backend shells out to an embedded Python converter script,
//! so the framework stays a black box behind a process boundary.

use crate::convert::types::OptimizationPolicy;
use crate::{fsio, DeployError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Converter script exit code when the input model cannot be loaded.
pub const EXIT_MODEL_LOAD: i32 = 2;
/// Converter script exit code when the conversion step itself fails.
pub const EXIT_CONVERSION: i32 = 3;

/// Opaque serialized-model-in, optimized-binary-out capability.
pub trait ModelBackend {
    fn convert(&self, model: &[u8], policy: &OptimizationPolicy) -> Result<Vec<u8>>;
}

/// Backend that drives an external converter script as a subprocess.
///
/// The model bytes are staged in a scratch directory, the script is invoked
/// with `--input`/`--output` paths plus the policy flags, and the optimized
/// blob is read back from the output path. The scratch directory is removed
/// when the call returns, on success or failure.
pub struct ScriptBackend {
    python: PathBuf,
    script: PathBuf,
}

impl ScriptBackend {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            python: PathBuf::from("python3"),
            script: script.into(),
        }
    }

    /// Override the interpreter used to run the converter script.
    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = python.into();
        self
    }
}

impl ModelBackend for ScriptBackend {
    fn convert(&self, model: &[u8], policy: &OptimizationPolicy) -> Result<Vec<u8>> {
        let workdir = tempfile::tempdir()?;
        let input_path = workdir.path().join("model.h5");
        let output_path = workdir.path().join("model.tflite");

        fs::write(&input_path, model)
            .map_err(|e| DeployError::io_with_path(e, &input_path))?;

        debug!(
            "Running converter {} {} (optimize={}, weight_precision={})",
            self.python.display(),
            self.script.display(),
            policy.optimize.as_str(),
            policy.weight_precision.as_str()
        );

        let output = Command::new(&self.python)
            .arg(&self.script)
            .arg("--input")
            .arg(&input_path)
            .arg("--output")
            .arg(&output_path)
            .arg("--optimize")
            .arg(policy.optimize.as_str())
            .arg("--weight-precision")
            .arg(policy.weight_precision.as_str())
            .output()
            .map_err(|e| DeployError::Conversion {
                message: format!("failed to launch converter {}: {e}", self.python.display()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(match output.status.code() {
                Some(EXIT_MODEL_LOAD) => DeployError::ModelLoad { message: stderr },
                Some(EXIT_CONVERSION) => DeployError::Conversion { message: stderr },
                code => DeployError::Conversion {
                    message: format!(
                        "converter exited with status {}: {stderr}",
                        code.unwrap_or(-1)
                    ),
                },
            });
        }

        fs::read(&output_path).map_err(|e| DeployError::Conversion {
            message: format!("converter produced no output file: {e}"),
        })
    }
}

/// Embedded Python converter script.
///
/// Written to disk on first use or when the embedded version changes, the
/// same way other conversion tooling ships its helper scripts.
pub const CONVERT_SCRIPT: &str = r#"#!/usr/bin/env python3
"""Convert a Keras H5 model to TFLite for mobile deployment.

Invoked by the deploy-model pipeline. Exit codes: 2 when the input model
cannot be loaded, 3 when the TFLite conversion fails.
"""
import argparse
import sys


def main():
    parser = argparse.ArgumentParser(description="Convert Keras H5 to TFLite")
    parser.add_argument("--input", required=True, help="Input H5 model path")
    parser.add_argument("--output", required=True, help="Output TFLite path")
    parser.add_argument("--optimize", choices=["default", "none"], default="default")
    parser.add_argument("--weight-precision", choices=["float16", "float32"],
                        default="float16")
    args = parser.parse_args()

    import tensorflow as tf

    try:
        model = tf.keras.models.load_model(args.input)
    except Exception as e:
        print(f"model load failed: {e}", file=sys.stderr)
        sys.exit(2)

    try:
        converter = tf.lite.TFLiteConverter.from_keras_model(model)
        if args.optimize == "default":
            converter.optimizations = [tf.lite.Optimize.DEFAULT]
        if args.weight_precision == "float16":
            converter.target_spec.supported_types = [tf.float16]
        blob = converter.convert()
    except Exception as e:
        print(f"conversion failed: {e}", file=sys.stderr)
        sys.exit(3)

    with open(args.output, "wb") as f:
        f.write(blob)


if __name__ == "__main__":
    main()
"#;

/// Write the embedded converter script into `dir` if it is missing or stale,
/// and return its path.
pub fn ensure_converter_script(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("convert_to_tflite.py");
    let current = fs::read(&path).ok();
    if current.as_deref() != Some(CONVERT_SCRIPT.as_bytes()) {
        fsio::atomic_write(&path, CONVERT_SCRIPT.as_bytes())?;
        info!("Wrote converter script to {}", path.display());
    }
    Ok(path)
}
