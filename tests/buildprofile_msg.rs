use assert_cmd::Command;
use std::fs;

const READ_FAILURE: &str = "An error occurred while read\n";

fn bin() -> Command {
    Command::cargo_bin("buildprofile-msg").unwrap()
}

#[test]
fn prints_bundled_message() {
    bin().assert().success().stdout("Hello, World!\n");
}

#[test]
fn prints_message_from_given_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resources.properties");
    fs::write(&path, "# greeting\n\nmsg = from a file \n").unwrap();

    bin().arg(&path).assert().success().stdout("from a file \n");
}

#[test]
fn missing_resource_prints_fixed_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resources.properties");

    let assert = bin().arg(&path).assert().success().stdout(READ_FAILURE);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("resource not found"), "stderr: {}", stderr);
}

#[test]
fn missing_key_prints_fixed_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resources.properties");
    fs::write(&path, "greeting=hi\n").unwrap();

    let assert = bin().arg(&path).assert().success().stdout(READ_FAILURE);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("key not found: msg"), "stderr: {}", stderr);
}

#[test]
fn unreadable_content_prints_fixed_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resources.properties");
    fs::write(&path, b"msg=\xff\n").unwrap();

    bin().arg(&path).assert().success().stdout(READ_FAILURE);
}

#[test]
fn error_log_level_keeps_stderr_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.properties");

    bin()
        .arg(&path)
        .args(["--log-level", "error"])
        .assert()
        .success()
        .stdout(READ_FAILURE)
        .stderr("");
}
