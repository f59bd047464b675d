#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::PathBuf;

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Directory with the small chicago / new_york_city / washington fixtures
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// A config path that does not exist, so tests never read ~/.bikeshare
pub fn no_config(dir: &tempfile::TempDir) -> String {
    dir.path()
        .join("absent.conf")
        .to_string_lossy()
        .to_string()
}

/// Run the interactive session against the fixtures with the given stdin script
pub fn explore(script: &str) -> assert_cmd::assert::Assert {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = data_dir();
    bikeshare()
        .args([
            "--config",
            &no_config(&tmp),
            "--data-dir",
            &data.to_string_lossy(),
        ])
        .write_stdin(script)
        .assert()
}
