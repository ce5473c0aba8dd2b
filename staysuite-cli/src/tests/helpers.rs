//! Test helpers for writing catalog fixtures and capturing JSON output.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Temporary directory holding catalog and rule fixtures.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(path.as_std_path(), contents).expect("write fixture");
        path
    }

    /// Two-listing catalog using the front end's `pricePerNight` spelling.
    pub(super) fn write_small_catalog(&self) -> Utf8PathBuf {
        self.write(
            "catalog.json",
            r#"[
                {"id":"c1","name":"Harbour House","location":"Boston, MA","type":"Boutique",
                 "pricePerNight":240,"amenities":["Free Wi-Fi","Harbour View"]},
                {"id":"c2","name":"Summit Tower","location":"Denver, CO","type":"Business",
                 "pricePerNight":310,"amenities":["Coworking Space"],"rating":4.2}
            ]"#,
        )
    }
}

/// Parse captured writer output as JSON.
pub(super) fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}

/// Extract the `id` of every element in a JSON array.
pub(super) fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("output should be an array")
        .iter()
        .map(|item| item["id"].as_str().expect("id should be a string").to_owned())
        .collect()
}
