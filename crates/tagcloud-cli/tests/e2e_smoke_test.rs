use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use tagcloud_cli::{Args, run};

/// Returns the path of the `demos` directory at the workspace root
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all tag list files from a directory, skipping configuration files
fn collect_tag_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some("toml")
                    && path.file_stem().and_then(|s| s.to_str()) != Some("config")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        width: None,
        height: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_tag_files(demos_dir());
    assert!(!demos.is_empty(), "No tag lists found in demos/");

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_filename = format!(
            "{}.layout.toml",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Ok(()) => {
                let output = fs::read_to_string(&output_path).expect("Output was not written");
                assert!(output.contains("content_width"), "{}", demo_path.display());
            }
            Err(e) => failed.push((demo_path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_tag_files(demos_dir().join("errors"));
    assert!(!demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &demos {
        let output_filename = format!(
            "error_{}.layout.toml",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_configured_viewport_and_skips() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("incomplete.layout.toml");

    let mut args = args_for(&demos_dir().join("incomplete.toml"), &output_path);
    args.config = Some(demos_dir().join("config.toml").to_string_lossy().to_string());
    run(&args).expect("Failed to lay out incomplete.toml");

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.contains("label = \"weighted\""));
    assert!(output.contains("[[skipped]]"));
    assert!(output.contains("label = \"forgotten\""));
}

#[test]
fn e2e_missing_input_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.toml");
    let output = temp_dir.path().join("out.toml");

    assert!(run(&args_for(&input, &output)).is_err());
    assert!(!output.exists());
}
