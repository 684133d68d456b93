#![cfg(feature = "cli")]

use std::process::Command;

#[test]
fn version_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_slmx4"))
        .arg("version")
        .output()
        .expect("version command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_extended_prints_provenance() {
    let output = Command::new(env!("CARGO_BIN_EXE_slmx4"))
        .arg("version")
        .arg("--extended")
        .output()
        .expect("version command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name: slmx4"));
    assert!(stdout.contains("target_os:"));
}

#[test]
fn info_against_missing_device_fails_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_slmx4"))
        .arg("--log-level")
        .arg("error")
        .arg("info")
        .arg("/dev/does-not-exist-slmx4")
        .output()
        .expect("info command should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("connect failed"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_slmx4"))
        .arg("frobnicate")
        .output()
        .expect("command should run");

    assert!(!output.status.success());
}
