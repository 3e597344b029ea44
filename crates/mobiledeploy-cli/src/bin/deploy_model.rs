//! deploy-model - convert the trained classifier and stage the mobile assets.
//!
//! Runs the model conversion first, then copies the class-label manifest.
//! Exit code 0 only when both steps succeed.

use clap::Parser;
use mobiledeploy::{
    convert, ensure_converter_script, DeployPaths, OptimizationPolicy, OptimizeMode, PathsConfig,
    ScriptBackend, WeightPrecision,
};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "deploy-model")]
#[command(about = "Convert the trained classifier to TFLite and stage mobile assets")]
struct Args {
    /// Serialized Keras model to convert
    #[arg(long, default_value = PathsConfig::SOURCE_MODEL)]
    source_model: PathBuf,

    /// Destination for the optimized TFLite artifact
    #[arg(long, default_value = PathsConfig::DEST_MODEL)]
    dest_model: PathBuf,

    /// Class-label manifest to copy
    #[arg(long, default_value = PathsConfig::SOURCE_LABELS)]
    source_labels: PathBuf,

    /// Destination for the re-encoded manifest
    #[arg(long, default_value = PathsConfig::DEST_LABELS)]
    dest_labels: PathBuf,

    /// Converter script (the embedded copy is staged under scripts/ when omitted)
    #[arg(long)]
    converter: Option<PathBuf>,

    /// Python interpreter used to run the converter script
    #[arg(long, default_value = "python3")]
    python: PathBuf,

    /// Size/latency optimization: default or none
    #[arg(long, default_value = "default", value_parser = parse_optimize)]
    optimize: OptimizeMode,

    /// Weight precision of the output artifact: float16 or float32
    #[arg(long, default_value = "float16", value_parser = parse_precision)]
    weight_precision: WeightPrecision,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_optimize(s: &str) -> Result<OptimizeMode, String> {
    OptimizeMode::from_str(s).ok_or_else(|| format!("unknown optimize mode: {s}"))
}

fn parse_precision(s: &str) -> Result<WeightPrecision, String> {
    WeightPrecision::from_str(s).ok_or_else(|| format!("unknown weight precision: {s}"))
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run(&args) {
        let code = e.exit_code();
        eprintln!("✗ Error: {:#}", anyhow::Error::from(e));
        std::process::exit(code);
    }
}

fn run(args: &Args) -> mobiledeploy::Result<()> {
    let script = match &args.converter {
        Some(path) => path.clone(),
        None => ensure_converter_script(Path::new(PathsConfig::CONVERTER_SCRIPT_DIR))?,
    };
    info!("Using converter script {}", script.display());

    let backend = ScriptBackend::new(script).with_python(&args.python);
    let paths = DeployPaths {
        source_model: args.source_model.clone(),
        dest_model: args.dest_model.clone(),
        source_labels: args.source_labels.clone(),
        dest_labels: args.dest_labels.clone(),
    };
    let policy = OptimizationPolicy {
        optimize: args.optimize,
        weight_precision: args.weight_precision,
    };

    let report = convert::run(&backend, &paths, &policy)?;

    println!("✓ TFLite model saved to: {}", report.model.output_path.display());
    println!(
        "  Model size: {:.2} MB",
        report.model.bytes_written as f64 / 1024.0 / 1024.0
    );
    println!("✓ Class names copied to: {}", report.labels.output_path.display());
    println!("  Total classes: {}", report.labels.entries);
    println!();
    println!("✓ Conversion complete! Model ready for mobile deployment.");
    Ok(())
}
