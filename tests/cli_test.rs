//! End-to-end runs of the makezip binary in scratch submission directories

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_makezip"))
        .current_dir(dir)
        .output()
        .expect("failed to run makezip")
}

/// Keeps the run independent of whether make and zip are installed
fn use_missing_tools(dir: &Path) {
    fs::write(
        dir.join("makezip.toml"),
        "build-tool = \"makezip-no-such-make\"\narchiver = \"makezip-no-such-zip\"\n",
    )
    .unwrap();
}

#[test]
fn test_missing_group_info_fails_with_instructions() {
    let dir = tempfile::tempdir().unwrap();
    use_missing_tools(dir.path());

    let output = run_in(dir.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("groupinfo.txt not found"), "{}", stderr);
    assert!(stderr.contains("Group: [your group number]"), "{}", stderr);
    assert!(stderr.contains("Full Name 2 (userid2)"), "{}", stderr);
    assert!(stderr.contains("groupinfo.txt is required"), "{}", stderr);
}

#[test]
fn test_failed_discovery_still_packages_group_info() {
    let dir = tempfile::tempdir().unwrap();
    use_missing_tools(dir.path());
    fs::write(
        dir.path().join("groupinfo.txt"),
        "Group: 4\nJane Doe (jdoe)\nJohn Roe (jroe)\n",
    )
    .unwrap();

    let output = run_in(dir.path());
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let archive = dir.path().join("STY25-P9-jdoe-jroe.zip");
    assert!(archive.is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using groupinfo.txt:"), "{}", stdout);
    assert!(stdout.contains("Jane Doe (jdoe)"), "{}", stdout);
    assert!(stdout.contains("John Roe (jroe)"), "{}", stdout);
    assert!(stdout.contains("Selected files for inclusion: []"), "{}", stdout);
    assert!(stdout.contains("STY25-P9-jdoe-jroe.zip"), "{}", stdout);
}

#[test]
fn test_arguments_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_makezip"))
        .current_dir(dir.path())
        .arg("p1")
        .output()
        .expect("failed to run makezip");
    assert!(!output.status.success());
    assert!(!dir.path().join("STY25-P9-.zip").exists());
}

/// Submission directory whose second line has no `(userid)`
fn unnamed_submission() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    use_missing_tools(dir.path());
    fs::write(dir.path().join("groupinfo.txt"), "No group\nJane Doe\n").unwrap();
    dir
}

#[test]
fn test_missing_user_id_uses_login_name_from_env() {
    let dir = unnamed_submission();

    let output = Command::new(env!("CARGO_BIN_EXE_makezip"))
        .current_dir(dir.path())
        .env("LOGNAME", "jdoe-login")
        .env("USER", "someone-else")
        .output()
        .expect("failed to run makezip");
    assert!(output.status.success());
    assert!(dir.path().join("STY25-P9-jdoe-login.zip").is_file());
}

#[cfg(unix)]
#[test]
fn test_missing_user_id_without_env_uses_account_name() {
    let Ok(id) = Command::new("id").arg("-un").output() else {
        return;
    };
    let account = String::from_utf8_lossy(&id.stdout).trim().to_string();
    if !id.status.success() || account.is_empty() {
        return;
    }
    let dir = unnamed_submission();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_makezip"));
    cmd.current_dir(dir.path()).env_clear();
    if let Some(path) = std::env::var_os("PATH") {
        cmd.env("PATH", path);
    }
    let output = cmd.output().expect("failed to run makezip");

    assert!(output.status.success());
    let archive = dir.path().join(format!("STY25-P9-{}.zip", account));
    assert!(
        archive.is_file(),
        "{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_group_info_is_not_reported_missing() {
    let dir = tempfile::tempdir().unwrap();
    use_missing_tools(dir.path());
    fs::create_dir(dir.path().join("groupinfo.txt")).unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: IO error"), "{}", stderr);
    assert!(!stderr.contains("groupinfo.txt is required"), "{}", stderr);
    assert!(!stderr.contains("groupinfo.txt not found"), "{}", stderr);
}
