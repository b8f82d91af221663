//! Shared testing utilities for depgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `depgen` binary in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("depgen").expect("Failed to locate depgen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write a manifest into the project directory.
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.work_dir.join("depgen.yml"), content).expect("Failed to write manifest");
    }

    /// Path under the default generators root.
    pub fn generated(&self, relative: &str) -> PathBuf {
        self.work_dir.join("generators").join(relative)
    }

    /// Read a generated artifact.
    pub fn read_generated(&self, relative: &str) -> String {
        fs::read_to_string(self.generated(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Assert a generated artifact exists.
    pub fn assert_generated(&self, relative: &str) {
        assert!(self.generated(relative).exists(), "{} should exist", relative);
    }

    /// Assert a path under the generators root does not exist.
    pub fn assert_not_generated(&self, relative: &str) {
        assert!(!self.generated(relative).exists(), "{} should not exist", relative);
    }

    /// Snapshot every file under the generators root as (relative path, content).
    pub fn snapshot_generated(&self) -> Vec<(String, String)> {
        let root = self.work_dir.join("generators");
        let mut files = Vec::new();
        collect_files(&root, &root, &mut files);
        files.sort();
        files
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<(String, String)>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries {
        let path = entry.expect("Failed to read dir entry").path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let relative =
                path.strip_prefix(root).expect("generated file outside root").to_path_buf();
            let content = fs::read_to_string(&path).expect("Failed to read generated file");
            out.push((relative.to_string_lossy().to_string(), content));
        }
    }
}
