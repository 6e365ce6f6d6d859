//! [`TestProject`] builder for knowledge and scaffolding scenarios.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use crate::fixtures;

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use biased_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_doc("notes.txt", "hello");
/// project.age("biased/docs/notes.txt", 60);
/// project.assert_file_exists("biased/docs/notes.txt");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a source document under `biased/docs/`.
    pub fn write_doc(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        self.write(&format!("biased/docs/{relative}"), content)
    }

    /// Create a directory (and parents) under the project.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Set the modification time of `relative`.
    pub fn set_mtime(&self, relative: &str, time: SystemTime) {
        let file = File::options().write(true).open(self.path(relative)).unwrap();
        file.set_modified(time).unwrap();
    }

    /// Move the modification time of `relative` `secs` seconds into the past.
    ///
    /// Keeps source timestamps clear of artifacts written in the same second
    /// on filesystems with coarse timestamps.
    pub fn age(&self, relative: &str, secs: u64) {
        self.set_mtime(relative, SystemTime::now() - Duration::from_secs(secs));
    }

    /// Read a file as text.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Write the five files the structural validator requires, all valid.
    pub fn write_valid_framework(&self) {
        for (relative, content) in fixtures::VALID_FRAMEWORK_FILES {
            self.write(relative, content);
        }
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
