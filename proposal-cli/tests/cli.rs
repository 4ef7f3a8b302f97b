use std::fs;
use std::path::Path;
use std::time::Duration;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn proposal_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("create-proposal"));
    cmd.current_dir(cwd)
        .env_remove("PROPOSAL_TEMPLATES_DIR")
        .timeout(Duration::from_secs(30));
    cmd
}

#[test]
fn help_describes_the_tool() {
    let cwd = TempDir::new().expect("cwd");
    proposal_cmd(cwd.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Scaffold a new proposal directory"));
}

#[test]
fn version_is_printed() {
    let cwd = TempDir::new().expect("cwd");
    proposal_cmd(cwd.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn positional_arguments_are_rejected() {
    let cwd = TempDir::new().expect("cwd");
    proposal_cmd(cwd.path()).arg("my-idea").assert().failure();
    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn without_a_terminal_the_run_fails_and_creates_nothing() {
    let cwd = TempDir::new().expect("cwd");

    let output = proposal_cmd(cwd.path()).write_stdin("").output().expect("run");

    assert!(!output.status.success(), "must not succeed without a terminal");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("done"));
    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}
