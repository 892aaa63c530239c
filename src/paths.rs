//! Centralized path definitions for the installed package
//!
//! Every path the bootstrap touches is derived from the directory holding
//! the running executable (the install root).
//!
//! ## Package Layout
//!
//! ```text
//! <install root>/
//! ├── unminify                          # this executable
//! ├── unminify.toml                     # optional launcher config
//! ├── src/                              # classpath root 1
//! │   └── unminify/
//! │       └── cli.cljs                  # entry script
//! └── node_modules/@unminify/core/src/  # classpath root 2
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The package's own sources
pub const SOURCE_DIR: &str = "src";

/// Sources of the `@unminify/core` dependency
pub const CORE_SOURCE_DIR: &str = "node_modules/@unminify/core/src";

/// Entry script holding the CLI logic
pub const ENTRY_FILE: &str = "src/unminify/cli.cljs";

/// Optional launcher configuration file
pub const CONFIG_FILE: &str = "unminify.toml";

/// Errors raised while locating the install root
#[derive(Debug, Error)]
pub enum LocateError {
    /// The OS could not report the executable's path
    #[error("cannot determine the location of the running executable: {0}")]
    CurrentExe(#[source] io::Error),

    /// The executable path could not be made canonical
    #[error("cannot resolve executable path {path}: {source}")]
    Canonicalize {
        /// Path reported by the OS
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The executable path has no parent directory
    #[error("executable path has no parent directory: {0}")]
    NoParent(PathBuf),
}

/// Resolve the absolute directory containing the running executable.
///
/// Symlinks are followed, so a launcher linked into `~/.local/bin` still
/// resolves to the package it was installed from.
pub fn self_dir() -> Result<PathBuf, LocateError> {
    let exe = std::env::current_exe().map_err(LocateError::CurrentExe)?;
    let exe = exe
        .canonicalize()
        .map_err(|source| LocateError::Canonicalize { path: exe, source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(LocateError::NoParent(exe))
}

/// Absolute locations of everything inside an installed package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Build a layout rooted at `root`.
    ///
    /// A relative root is made absolute against the working directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// Layout of the package the running executable belongs to
    pub fn discover() -> Result<Self, LocateError> {
        self_dir().map(Self::new)
    }

    /// The install root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Classpath roots in registration order
    #[must_use]
    pub fn classpath_roots(&self) -> [PathBuf; 2] {
        [self.root.join(SOURCE_DIR), self.root.join(CORE_SOURCE_DIR)]
    }

    /// Path to the entry script
    #[must_use]
    pub fn entry_file(&self) -> PathBuf {
        self.root.join(ENTRY_FILE)
    }

    /// Path to `unminify.toml`
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}
