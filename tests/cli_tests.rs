use std::fs;
use std::process::Command;

const SPEC: &str = r#"{
  "name": "buku",
  "id": { "type": "int", "strategy": "autoincrement" },
  "fields": [
    { "name": "name", "type": "string", "required": true },
    { "name": "price", "type": "number", "required": true }
  ]
}"#;

#[test]
fn test_cli_generates_crud_slice() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("buku.json");
    fs::write(&spec_path, SPEC).unwrap();

    let exe = env!("CARGO_BIN_EXE_nestgen");
    let status = Command::new(exe)
        .current_dir(dir.path())
        .arg(spec_path.to_str().unwrap())
        .status()
        .expect("run cli");
    assert!(status.success());
    assert!(dir.path().join("src/buku/buku.controller.ts").exists());
    assert!(dir.path().join("src/buku/buku.service.ts").exists());
    assert!(dir.path().join("src/buku/buku.validation.ts").exists());
    assert!(dir.path().join("src/buku/buku.module.ts").exists());
    assert!(dir.path().join("src/model/buku.model.ts").exists());
}

#[test]
fn test_cli_honors_output_root() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("buku.json");
    fs::write(&spec_path, SPEC).unwrap();
    let out = dir.path().join("backend");

    let exe = env!("CARGO_BIN_EXE_nestgen");
    let status = Command::new(exe)
        .arg(spec_path.to_str().unwrap())
        .arg("--output")
        .arg(out.to_str().unwrap())
        .status()
        .expect("run cli");
    assert!(status.success());
    assert!(out.join("src/buku/buku.service.ts").exists());
}

#[test]
fn test_cli_without_arguments_is_a_usage_error() {
    let exe = env!("CARGO_BIN_EXE_nestgen");
    let output = Command::new(exe).output().expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.to_lowercase().contains("usage"), "{stderr}");
}

#[test]
fn test_cli_fails_on_malformed_spec_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("broken.json");
    fs::write(&spec_path, "{ nope").unwrap();

    let exe = env!("CARGO_BIN_EXE_nestgen");
    let status = Command::new(exe)
        .current_dir(dir.path())
        .arg(spec_path.to_str().unwrap())
        .status()
        .expect("run cli");
    assert!(!status.success());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_cli_fails_on_missing_spec_file() {
    let dir = tempfile::tempdir().unwrap();
    let exe = env!("CARGO_BIN_EXE_nestgen");
    let status = Command::new(exe)
        .current_dir(dir.path())
        .arg("does-not-exist.json")
        .status()
        .expect("run cli");
    assert!(!status.success());
}
