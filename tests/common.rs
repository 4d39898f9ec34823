#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sf() -> Command {
    cargo_bin_cmd!("seatfinder")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_seatfinder.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB (schema only)
pub fn init_db(db_path: &str) {
    sf().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and seat a small party:
/// table 1: John Smith, Sarah Johnson; table 2: Jennifer Martinez, David Wilson
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    sf().args([
        "--db",
        db_path,
        "add-batch",
        "--entry",
        "John Smith=1",
        "--entry",
        "Sarah Johnson=1",
        "--entry",
        "Jennifer Martinez=2",
        "--entry",
        "David Wilson=2",
    ])
    .assert()
    .success();
}
