//! End-to-end tests for the deployment pipeline public interface.

use mobiledeploy::{
    convert, DeployError, DeployPaths, ModelBackend, OptimizationPolicy, Result,
};
use std::fs;
use tempfile::TempDir;

/// Backend producing a deterministic artifact derived from its input.
struct EchoBackend;

impl ModelBackend for EchoBackend {
    fn convert(&self, model: &[u8], _policy: &OptimizationPolicy) -> Result<Vec<u8>> {
        let mut blob = b"TFL3".to_vec();
        blob.extend_from_slice(model);
        Ok(blob)
    }
}

/// Lay out a source tree mirroring the training checkout.
fn create_source_tree() -> (TempDir, DeployPaths) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let paths = DeployPaths {
        source_model: root.join("classification/models/mobilenet/mobilenet_best.h5"),
        dest_model: root.join("assets/models/mobilenet_best.tflite"),
        source_labels: root.join("classification/models/class_names.json"),
        dest_labels: root.join("assets/models/class_names.json"),
    };

    fs::create_dir_all(paths.source_model.parent().unwrap()).unwrap();
    fs::write(&paths.source_model, b"keras-weights").unwrap();
    fs::write(
        &paths.source_labels,
        r#"{"0": "daisy", "1": "rose", "2": "tulip"}"#,
    )
    .unwrap();

    (temp_dir, paths)
}

#[test]
fn test_full_deploy_run() {
    let (_tree, paths) = create_source_tree();

    let report = convert::run(&EchoBackend, &paths, &OptimizationPolicy::default()).unwrap();

    assert_eq!(report.model.bytes_written, 4 + 13);
    assert_eq!(
        report.model.bytes_written,
        fs::metadata(&paths.dest_model).unwrap().len()
    );
    assert_eq!(report.labels.entries, 3);

    let copied: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.dest_labels).unwrap()).unwrap();
    assert_eq!(copied["1"], "rose");
}

#[test]
fn test_rerun_is_byte_identical() {
    let (_tree, paths) = create_source_tree();
    let policy = OptimizationPolicy::default();

    convert::run(&EchoBackend, &paths, &policy).unwrap();
    let model_first = fs::read(&paths.dest_model).unwrap();
    let labels_first = fs::read(&paths.dest_labels).unwrap();

    convert::run(&EchoBackend, &paths, &policy).unwrap();
    assert_eq!(fs::read(&paths.dest_model).unwrap(), model_first);
    assert_eq!(fs::read(&paths.dest_labels).unwrap(), labels_first);
}

#[test]
fn test_bad_manifest_still_deploys_model_but_fails_run() {
    let (_tree, paths) = create_source_tree();
    fs::write(&paths.source_labels, "not json").unwrap();

    let err = convert::run(&EchoBackend, &paths, &OptimizationPolicy::default()).unwrap_err();

    assert!(matches!(err, DeployError::ManifestLoad { .. }));
    // Model conversion ran first and its artifact is complete and valid
    assert!(paths.dest_model.exists());
    assert!(!paths.dest_labels.exists());
}

#[test]
fn test_operations_are_independent() {
    let (_tree, paths) = create_source_tree();

    // Copying the manifest alone works without the model ever converting
    let result = convert::copy_label_manifest(&paths.source_labels, &paths.dest_labels).unwrap();
    assert_eq!(result.entries, 3);
    assert!(!paths.dest_model.exists());
}
