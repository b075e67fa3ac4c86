use std::process::Command;

fn entrysum(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_entrysum"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run entrysum")
}

#[test]
fn default_run_prints_triple() {
    let out = entrysum(&[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "{366, 675, 979}\n");
}

#[test]
fn pair_with_product() {
    let out = entrysum(&["--size", "2", "--product"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "{299, 1721}\nproduct: 514579\n"
    );
}

#[test]
fn json_format() {
    let out = entrysum(&["--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["values"], serde_json::json!([366, 675, 979]));
    assert_eq!(v["target"], 2020);
}

#[test]
fn custom_values_and_negative_target() {
    let out = entrysum(&["--values", "-5,3,12,-20", "--target", "-22"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "{-20, -5, 3}\n");
}

#[test]
fn not_found_exits_with_error() {
    let out = entrysum(&["--target", "1"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("no 3 distinct values sum to 1"), "stderr: {err}");
}

#[test]
fn bad_size_rejected() {
    let out = entrysum(&["--size", "4"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--size 2 or --size 3"));
}

#[test]
fn stats_go_to_stderr() {
    let out = entrysum(&["--stats"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("pair scans"));
}

#[test]
fn csv_format() {
    let out = entrysum(&["--format", "csv", "--size", "2"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "299,1721\n");
}

#[test]
fn empty_values_rejected() {
    let out = entrysum(&["--values", ""]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("value set is empty"), "stderr: {err}");
}

#[test]
fn unknown_log_level_without_rust_log_fails() {
    let out = entrysum(&["--log-level", "verbose"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("unrecognised log level 'verbose'"), "stderr: {err}");
}

#[test]
fn unknown_log_level_falls_back_to_rust_log() {
    let out = Command::new(env!("CARGO_BIN_EXE_entrysum"))
        .args(["--log-level", "verbose"])
        .env("RUST_LOG", "debug")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run entrysum");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "{366, 675, 979}\n");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("triple found"), "stderr: {err}");
}

#[test]
fn known_log_level_overrides_rust_log() {
    let out = Command::new(env!("CARGO_BIN_EXE_entrysum"))
        .args(["--log-level", "warn"])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run entrysum");
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}
