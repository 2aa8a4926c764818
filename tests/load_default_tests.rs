// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Loader::load_default` against a temporary XDG config home.
//!
//! Kept in its own test binary because it mutates `XDG_CONFIG_HOME`.

#![cfg(target_os = "linux")]

use dotcfg::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_default_reads_from_xdg_config_home() {
    let home = TempDir::new().unwrap();
    let app_dir = home.path().join("myapp");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(
        app_dir.join("app.cfg"),
        format!("#INCLUDE {}\nname demo\n", app_dir.join("extra.cfg").display()),
    )
    .unwrap();
    fs::write(app_dir.join("extra.cfg"), "port 8080\n").unwrap();

    std::env::set_var("XDG_CONFIG_HOME", home.path());
    let loader = Loader::new();
    let store = loader.load_default("myapp", "com.example", "app.cfg");
    let missing = loader.load_default("myapp", "com.example", "missing.cfg");
    std::env::remove_var("XDG_CONFIG_HOME");

    let store = store.unwrap();
    assert_eq!(store.get(&["port"]).unwrap(), "8080");
    assert_eq!(store.get(&["name"]).unwrap(), "demo");

    match missing.unwrap_err() {
        ConfigError::FileOpen { path, .. } => {
            assert_eq!(path, app_dir.join("missing.cfg"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
