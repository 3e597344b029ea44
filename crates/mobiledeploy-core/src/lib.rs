//! mobiledeploy - deployment toolkit for an on-device image classifier.
//!
//! Two independent utilities share this crate:
//!
//! - the **conversion pipeline** ([`convert`]): transforms a training-time
//!   serialized model into a mobile-optimized artifact through an injected
//!   [`ModelBackend`] and copies the class-label manifest next to it;
//! - the **API probe** ([`probe`]): sends one bounded request to the hosted
//!   text-generation endpoint and classifies the outcome.
//!
//! Both are synchronous and single-shot; every failure is one of the named
//! [`DeployError`] kinds, so the CLI entry points pick exit codes by
//! pattern-matching instead of catch-all handling.
//!
//! # Example
//!
//! ```rust,no_run
//! use mobiledeploy::{convert, DeployPaths, OptimizationPolicy, ScriptBackend};
//!
//! fn main() -> mobiledeploy::Result<()> {
//!     let backend = ScriptBackend::new("scripts/convert_to_tflite.py");
//!     let report = convert::run(&backend, &DeployPaths::default(), &OptimizationPolicy::default())?;
//!     println!("wrote {} bytes", report.model.bytes_written);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod fsio;
pub mod probe;

// Re-export commonly used types
pub use config::{DeployPaths, NetworkConfig, PathsConfig, ProbeConfig};
pub use convert::{
    ensure_converter_script, ConversionResult, DeployReport, ManifestCopyResult, ModelBackend,
    OptimizationPolicy, OptimizeMode, ScriptBackend, WeightPrecision,
};
pub use error::{DeployError, Result};
pub use probe::{probe, resolve_api_key, HttpTransport, ProbeResponse, ReqwestTransport};
