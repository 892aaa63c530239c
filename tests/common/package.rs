//! Temporary installed-package helper

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unminify_bootstrap::Layout;
use unminify_bootstrap::paths::{CORE_SOURCE_DIR, ENTRY_FILE, SOURCE_DIR};

/// A temporary directory laid out like an installed unminify package
pub struct TempPackage {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TempPackage {
    /// Create an empty package root
    pub fn empty() -> Self {
        Self::from_dir(TempDir::new().expect("Failed to create temp directory"))
    }

    /// Create an empty package root inside `parent`
    pub fn empty_in(parent: &Path) -> Self {
        Self::from_dir(TempDir::new_in(parent).expect("Failed to create temp directory"))
    }

    fn from_dir(temp_dir: TempDir) -> Self {
        let path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Create a complete package whose entry script has `entry` as content
    pub fn installed(entry: &str) -> Self {
        let package = Self::empty();
        package.install(entry);
        package
    }

    /// Create both classpath roots and write the entry script
    pub fn install(&self, entry: &str) {
        fs::create_dir_all(self.path.join(SOURCE_DIR)).expect("Failed to create src");
        fs::create_dir_all(self.path.join(CORE_SOURCE_DIR)).expect("Failed to create core src");
        self.write_file(ENTRY_FILE, entry);
    }

    /// Get the package root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Layout rooted at this package
    pub fn layout(&self) -> Layout {
        Layout::new(&self.path)
    }

    /// Write a file relative to the package root
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write an executable script relative to the package root
    #[cfg(unix)]
    pub fn write_executable(&self, name: &str, content: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let file_path = self.write_file(name, content);
        let mut perms = fs::metadata(&file_path).expect("Failed to stat file").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&file_path, perms).expect("Failed to chmod file");
        file_path
    }
}
