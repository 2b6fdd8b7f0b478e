//! Shared testing utilities for manifest-bundle CLI tests.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const OUTPUT_FILE: &str = "manifest_all_v1.1.0.json";

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled binary, run inside the work directory
    /// without any credential in its environment.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("manifest-bundle").expect("Failed to locate manifest-bundle binary");
        cmd.current_dir(self.work_dir()).env_remove("GITHUB_TOKEN");
        cmd
    }

    /// Write a manifest under `boards/` and return its `file://` location
    /// relative to the work directory.
    pub fn write_manifest(&self, name: &str, manifest: &Value) -> String {
        let dir = self.work_dir().join("boards");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), serde_json::to_string_pretty(manifest).unwrap()).unwrap();
        format!("file://boards/{}", name)
    }

    /// Write the default `manifests` source list.
    pub fn write_sources(&self, locations: &[String]) {
        self.write_file("manifests", &locations.join("\n"));
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn output_path(&self) -> PathBuf {
        self.work_dir().join(OUTPUT_FILE)
    }

    pub fn read_output(&self) -> Value {
        self.read_json(OUTPUT_FILE)
    }

    pub fn read_json(&self, name: &str) -> Value {
        let content = fs::read_to_string(self.work_dir().join(name))
            .unwrap_or_else(|_| panic!("{} should exist", name));
        serde_json::from_str(&content).unwrap()
    }

    pub fn output_names(&self) -> Vec<String> {
        self.read_output()
            .as_array()
            .expect("bundle should be an array")
            .iter()
            .map(|manifest| manifest["name"].as_str().unwrap().to_string())
            .collect()
    }
}

/// Schema-valid manifest whose asset links point at `assets` (a mock server URL).
#[allow(dead_code)]
pub fn manifest(name: &str, assets: &str) -> Value {
    json!({
        "name": name,
        "maintainer": "Board Team",
        "hostOperatingsystem": ["linux", "windows"],
        "environment": ["arduino"],
        "hardware": {
            "chipVendor": "Espressif",
            "manufacturer": "LilyGO",
            "specs": { "MCU": "ESP32", "RAM": "520KB", "Flash": "16MB", "GPU": null }
        },
        "description": format!("{} development board", name),
        "shortDescription": name,
        "urlToClone": format!("{}/repo.git", assets),
        "logos": [format!("{}/shared-logo.png", assets)],
        "image": format!("{}/{}.png", assets, name.to_lowercase()),
        "branches": ["main", "develop"],
        "settings": [
            {
                "type": "checkbox",
                "options": [{ "name": "Enable", "value": "on", "default": "false" }],
                "actions": [{ "ifValue": "on", "toAppend": "CONFIG_X=y", "filePath": "sdkconfig" }]
            }
        ]
    })
}

/// Answer HEAD with 200 for every path on the server.
#[allow(dead_code)]
pub fn serve_all_assets(server: &mut mockito::Server) -> mockito::Mock {
    server.mock("HEAD", mockito::Matcher::Any).with_status(200).create()
}
