use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const ADDR: &str = "0x1234567890123456789012345678901234567890";

#[test]
fn hex2dec_converts_in_place_and_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.txt");
    fs::write(&path, "a=0xFF b=0x0 c=0xg\n").unwrap();

    let mut cmd = cargo_bin_cmd!("hex2dec");
    cmd.arg(path.to_str().unwrap());

    cmd.assert().success().code(0).stdout(format!(
        "Conversion successful. Hex numbers in '{}' converted to decimal.\n",
        path.display()
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a=255 b=0 c=0xg\n");
}

#[test]
fn hex2dec_keep_addresses_leaves_addresses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, format!("balance: 0x1A, addr: {ADDR}")).unwrap();

    let mut cmd = cargo_bin_cmd!("hex2dec");
    cmd.args([path.to_str().unwrap(), "--keep-addresses"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Ethereum addresses were left unchanged."));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("balance: 26, addr: {ADDR}")
    );
}

#[test]
fn hex2dec_missing_file_prints_error_and_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let mut cmd = cargo_bin_cmd!("hex2dec");
    cmd.arg(path.to_str().unwrap());

    cmd.assert()
        .success()
        .code(0)
        .stdout(format!("Error: File '{}' not found.\n", path.display()));
    assert!(!path.exists());
}

#[test]
fn hex2dec_other_failure_prints_cause() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("hex2dec");
    cmd.arg(dir.path().to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Error occurred: "));
}

#[test]
fn hex2dec_without_path_prints_usage() {
    let mut cmd = cargo_bin_cmd!("hex2dec");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn hex2dec_with_extra_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "0x10").unwrap();

    let mut cmd = cargo_bin_cmd!("hex2dec");
    cmd.args([path.to_str().unwrap(), "extra"]);

    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "0x10");
}
