use hex_rewrite::{rewrite_file, HexRewriteError, RewriteMode};
use std::fs;

const ADDR: &str = "0x1234567890123456789012345678901234567890";

#[test]
fn test_rewrite_file_in_place_keeping_addresses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, format!("balance: 0x1A, addr: {ADDR}")).unwrap();

    let report = rewrite_file(&path, RewriteMode::KeepAddresses).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("balance: 26, addr: {ADDR}")
    );
    assert_eq!(report.path, path);
    assert_eq!(report.mode, RewriteMode::KeepAddresses);
    assert_eq!(report.converted, 1);
    assert_eq!(report.kept, 1);
}

#[test]
fn test_rewrite_file_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocks.txt");
    fs::write(&path, "block 0x10\nslot 0x0\nraw 0xg\n").unwrap();

    rewrite_file(&path, RewriteMode::All).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    assert_eq!(first, "block 16\nslot 0\nraw 0xg\n");

    let report = rewrite_file(&path, RewriteMode::All).unwrap();
    assert_eq!(report.converted, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_missing_file_is_reported_and_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let err = rewrite_file(&path, RewriteMode::All).unwrap_err();

    assert!(matches!(err, HexRewriteError::FileNotFound(ref p) if *p == path));
    assert!(!path.exists());
}

#[test]
fn test_non_utf8_file_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.bin");
    let bytes = vec![0x30, 0x78, 0x31, 0xff, 0xfe];
    fs::write(&path, &bytes).unwrap();

    let err = rewrite_file(&path, RewriteMode::All).unwrap_err();

    assert!(matches!(err, HexRewriteError::Io { .. }));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_directory_path_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();

    let err = rewrite_file(dir.path(), RewriteMode::All).unwrap_err();

    assert!(matches!(err, HexRewriteError::Io { .. }));
}
