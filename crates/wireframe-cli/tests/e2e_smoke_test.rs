use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use wireframe::WireframeError;
use wireframe_cli::{Args, Format, run};

/// Samples live at the workspace root, relative to the workspace not the crate
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path, format: Format, screen: Option<&str>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        format,
        screen: screen.map(str::to_string),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_json_files(samples_dir());
    assert!(
        !valid_samples.is_empty(),
        "No valid samples found in samples/"
    );

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let stem = sample_path.file_stem().unwrap().to_string_lossy();

        for (format, extension) in [(Format::Json, "json"), (Format::Svg, "svg")] {
            let output_path = temp_dir.path().join(format!("{stem}.{extension}"));
            let args = args(sample_path, &output_path, format, None);

            match run(&args) {
                Ok(()) => assert!(output_path.exists()),
                Err(e) => failed_samples.push((sample_path.clone(), format, e)),
            }
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, format, err) in &failed_samples {
            eprintln!("  - {} ({format:?}): {}", path.display(), err);
        }
        panic!("{} valid sample run(s) failed unexpectedly", failed_samples.len());
    }
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_json_files(samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.json",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);
        let args = args(sample_path, &output_path, Format::Json, None);

        match run(&args) {
            Ok(()) => unexpectedly_succeeded.push(sample_path.clone()),
            Err(err) => assert!(
                matches!(err, WireframeError::Json { .. }),
                "{}: expected a JSON error, got {err:?}",
                sample_path.display()
            ),
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_layout_output_is_placed() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("dashboard.json");

    run(&args(
        &samples_dir().join("dashboard.json"),
        &output_path,
        Format::Json,
        None,
    ))
    .expect("Failed to lay out dashboard sample");

    let output: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let shapes = output.as_array().unwrap();

    assert_eq!(shapes.len(), 11);
    assert_eq!(shapes[0]["type"], "navbar");
    assert_eq!(shapes[0]["width"], serde_json::json!(1024.0));
    assert_eq!(shapes[1]["type"], "sidebar");
    assert_eq!(shapes[1]["y"], serde_json::json!(56.0));
}

#[test]
fn e2e_blueprint_screen_selection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let blueprint = samples_dir().join("blueprint.json");

    let editor = temp_dir.path().join("editor.svg");
    run(&args(&blueprint, &editor, Format::Svg, Some("Invoice editor")))
        .expect("Failed to render editor screen");
    let svg = fs::read_to_string(&editor).unwrap();
    assert!(svg.contains("Line items"));
    assert!(!svg.contains("Outstanding"));

    let missing = temp_dir.path().join("missing.svg");
    let err = run(&args(&blueprint, &missing, Format::Svg, Some("scr-reports"))).unwrap_err();
    assert!(matches!(err, WireframeError::Screen(_)), "{err:?}");
    assert!(!missing.exists());
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let err = run(&args(
        &temp_dir.path().join("nope.json"),
        &temp_dir.path().join("out.json"),
        Format::Json,
        None,
    ))
    .unwrap_err();
    assert!(matches!(err, WireframeError::Io(_)), "{err:?}");
}
