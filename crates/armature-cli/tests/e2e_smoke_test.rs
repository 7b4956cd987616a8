use std::fs;

use tempfile::tempdir;

use armature_cli::{Args, run};

fn args_for(out_dir: &std::path::Path, diagrams: Vec<String>) -> Args {
    Args {
        diagrams,
        out_dir: Some(out_dir.to_string_lossy().to_string()),
        list: false,
        config: None,
        log_level: "off".to_string(),
    }
}

/// Creates the asset directories the fixed output paths expect.
fn create_asset_dirs(root: &std::path::Path) {
    fs::create_dir_all(root.join("assets/images")).expect("Failed to create assets/images");
    fs::create_dir_all(root.join("assets/clog")).expect("Failed to create assets/clog");
}

#[test]
fn e2e_smoke_test_all_diagrams() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_asset_dirs(temp_dir.path());

    run(&args_for(temp_dir.path(), Vec::new())).expect("Regenerating all diagrams failed");

    let outputs = [
        "assets/images/context_dag.svg",
        "assets/clog/ccp_architecture.svg",
        "assets/clog/csd_architecture.svg",
        "assets/images/architecture.svg",
    ];

    for output in outputs {
        let path = temp_dir.path().join(output);
        let contents =
            fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing {output}: {e}"));
        assert!(contents.starts_with("<svg"), "{output} is not an SVG");
        assert!(contents.ends_with("</svg>"), "{output} is truncated");
    }
}

#[test]
fn e2e_reruns_are_byte_identical() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_asset_dirs(temp_dir.path());

    let args = args_for(temp_dir.path(), vec!["context-dag".to_string()]);
    let path = temp_dir.path().join("assets/images/context_dag.svg");

    run(&args).expect("First run failed");
    let first = fs::read(&path).unwrap();

    run(&args).expect("Second run failed");
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second, "Regeneration is not deterministic");
}

#[test]
fn e2e_missing_output_directory_fails() {
    // No assets/ subdirectories are created here, so the write must fail
    // and leave nothing behind.
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = args_for(temp_dir.path(), vec!["context-dag".to_string()]);
    assert!(run(&args).is_err());
    assert!(!temp_dir.path().join("assets/images/context_dag.svg").exists());
}

#[test]
fn e2e_unknown_diagram_name_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_asset_dirs(temp_dir.path());

    let args = args_for(temp_dir.path(), vec!["nonesuch".to_string()]);
    let err = run(&args).expect_err("Unknown diagram name should fail");
    assert!(err.to_string().contains("nonesuch"));
}

#[test]
fn e2e_config_background_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_asset_dirs(temp_dir.path());

    let config_path = temp_dir.path().join("armature.toml");
    fs::write(
        &config_path,
        "[style]\nbackground_color = \"#101010\"\n",
    )
    .unwrap();

    let mut args = args_for(temp_dir.path(), vec!["context-dag".to_string()]);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Run with config failed");

    // The context DAG has no background of its own; the override adds one.
    let contents = fs::read_to_string(temp_dir.path().join("assets/images/context_dag.svg")).unwrap();
    assert!(contents.contains("background-color"));
}
