//! Recording host runtime for testing
//!
//! Captures every primitive call in order without starting a process.

use std::path::{Path, PathBuf};

use unminify_bootstrap::classpath::ClasspathError;
use unminify_bootstrap::{HostError, HostRuntime};

/// A call made against the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `add_classpath(root)`
    AddClasspath(PathBuf),
    /// `load_file(entry)`
    LoadFile(PathBuf),
}

/// Host that records calls and replays a configured outcome
pub struct RecordingHost {
    calls: Vec<HostCall>,
    reject_root: Option<PathBuf>,
    exit_code: i32,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            reject_root: None,
            exit_code: 0,
        }
    }

    /// Refuse to register `root`
    pub fn rejecting(mut self, root: &Path) -> Self {
        self.reject_root = Some(root.to_path_buf());
        self
    }

    /// Exit code the entry script "finishes" with
    pub fn exiting_with(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRuntime for RecordingHost {
    fn add_classpath(&mut self, root: &Path) -> Result<(), HostError> {
        self.calls.push(HostCall::AddClasspath(root.to_path_buf()));
        if self.reject_root.as_deref() == Some(root) {
            return Err(ClasspathError::Unrepresentable(root.to_path_buf()).into());
        }
        Ok(())
    }

    fn load_file(&mut self, entry: &Path) -> Result<i32, HostError> {
        self.calls.push(HostCall::LoadFile(entry.to_path_buf()));
        Ok(self.exit_code)
    }
}
