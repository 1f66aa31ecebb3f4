//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::init::MARKER_FILE_NAME;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// The layout used throughout the tests:
    /// `dir1/`, `dir2/subdir/`, `__pycache__/`, `dir3/exclude_me/`.
    pub fn sample() -> Self {
        let tree = Self::new();
        for dir in ["dir1", "dir2/subdir", "__pycache__", "dir3/exclude_me"] {
            tree.add_dir(dir);
        }
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory, including missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Path of the marker file inside `dir` (relative to the tree root).
    pub fn marker(&self, dir: &str) -> PathBuf {
        self.dir.path().join(dir).join(MARKER_FILE_NAME)
    }

    pub fn has_marker(&self, dir: &str) -> bool {
        self.marker(dir).exists()
    }

    /// Contents of the marker file inside `dir`, if present.
    pub fn read_marker(&self, dir: &str) -> Option<String> {
        fs::read_to_string(self.marker(dir)).ok()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
