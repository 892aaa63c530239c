//! Ordered classpath roots handed to the host runtime
//!
//! The host searches roots in registration order, so the first root that
//! provides a namespace wins. Roots are only ever appended.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when registering a classpath root
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClasspathError {
    /// Roots must be absolute so resolution does not depend on the cwd
    #[error("classpath root is not absolute: {0}")]
    NotAbsolute(PathBuf),

    /// The root cannot be represented in a platform path list
    #[error("classpath root contains a path separator: {0}")]
    Unrepresentable(PathBuf),
}

/// An append-only, ordered list of absolute source roots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath {
    roots: Vec<PathBuf>,
    path_list: OsString,
}

impl Classpath {
    /// Create an empty classpath
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            path_list: OsString::new(),
        }
    }

    /// Append a root after every root registered so far
    pub fn push(&mut self, root: &Path) -> Result<(), ClasspathError> {
        if !root.is_absolute() {
            return Err(ClasspathError::NotAbsolute(root.to_path_buf()));
        }
        let joined = env::join_paths(self.roots.iter().map(PathBuf::as_path).chain([root]))
            .map_err(|_| ClasspathError::Unrepresentable(root.to_path_buf()))?;
        self.roots.push(root.to_path_buf());
        self.path_list = joined;
        Ok(())
    }

    /// Roots in registration order
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Number of registered roots
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Whether no root has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Platform path list (`a:b` on Unix, `a;b` on Windows)
    #[must_use]
    pub fn path_list(&self) -> &OsStr {
        &self.path_list
    }
}
