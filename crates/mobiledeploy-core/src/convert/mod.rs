//! Model conversion pipeline.
//!
//! Turns a training-time serialized model into a mobile-optimized artifact
//! via an injected [`ModelBackend`], and copies the class-label manifest
//! alongside it.

pub mod backend;
pub mod pipeline;
pub mod types;

pub use backend::{ensure_converter_script, ModelBackend, ScriptBackend};
pub use pipeline::{convert_model, copy_label_manifest, run};
pub use types::{
    ConversionResult, DeployReport, ManifestCopyResult, OptimizationPolicy, OptimizeMode,
    WeightPrecision,
};
