// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk fixtures for integration tests.

use std::fs;
use tempfile::TempDir;

/// Routes loader logs to the test harness; set `RUST_LOG=debug` to see them.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A temporary directory of config files, removed on drop.
pub struct ConfigDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl ConfigDir {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the fixture directory.
    pub fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    /// Writes `name`, replacing `{dir}` in `contents` with the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        let dir = self.dir.path().to_string_lossy();
        fs::write(&path, contents.replace("{dir}", &dir)).expect("failed to write fixture");
        path
    }

    /// Writes raw bytes to `name`, unchanged.
    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> String {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }
}
