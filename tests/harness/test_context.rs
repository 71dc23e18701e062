//! Shared testing harness for `wosum` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeModel;

pub(crate) const HEADER: &str =
    "Work Order ID,Asset ID,Failure Description,Resolution,Technician Comments";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `wosum` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wosum").expect("Failed to locate wosum binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Install a fake model outside the work directory.
    pub(crate) fn fake_model(&self, fail_on: Option<usize>) -> FakeModel {
        FakeModel::install(self.root.path(), fail_on)
    }

    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `count` work orders spread over assets `A-0`, `A-1` and `A-2`;
    /// row `i` carries failure `failure-i`.
    pub(crate) fn write_work_orders(&self, name: &str, count: usize) -> PathBuf {
        let mut content = format!("{}\n", HEADER);
        for i in 0..count {
            content.push_str(&format!("WO-{},A-{},failure-{},Fixed,checked\n", i + 1, i % 3, i));
        }
        self.write_file(name, &content)
    }

    /// Write `wosum.toml` wired to the fake model, plus any extra TOML.
    pub(crate) fn write_config(&self, model: &FakeModel, extra: &str) -> PathBuf {
        self.write_file("wosum.toml", &format!("{}{}", model.config_toml(), extra))
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub(crate) fn read_json(&self, relative: &str) -> Value {
        let text = fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e));
        serde_json::from_str(&text).expect("artifact is valid JSON")
    }

    /// Sorted names of the entries in the work directory.
    pub(crate) fn work_dir_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
