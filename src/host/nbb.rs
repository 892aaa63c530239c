//! `nbb` host adapter
//!
//! Runs the entry script in an external `nbb` process. Registered roots
//! are collected and passed as one `--classpath` list at launch, so the
//! child sees the complete search path before any namespace is required.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use log::{debug, info};

use super::{HostError, HostRuntime};
use crate::classpath::Classpath;
use crate::config::HostConfig;

/// Host runtime backed by an `nbb` child process
#[derive(Debug, Clone)]
pub struct NbbRuntime {
    command: String,
    host_args: Vec<String>,
    forwarded: Vec<OsString>,
    classpath: Classpath,
}

impl NbbRuntime {
    /// Create a runtime from host settings
    #[must_use]
    pub fn new(config: &HostConfig) -> Self {
        Self {
            command: config.command.clone(),
            host_args: config.args.clone(),
            forwarded: Vec::new(),
            classpath: Classpath::new(),
        }
    }

    /// Arguments passed through to the entry script after its path
    #[must_use]
    pub fn with_forwarded_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.forwarded = args.into_iter().map(Into::into).collect();
        self
    }

    /// Roots registered so far
    #[must_use]
    pub const fn classpath(&self) -> &Classpath {
        &self.classpath
    }

    /// Build the child process invocation for `entry`
    #[must_use]
    pub fn command(&self, entry: &Path) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.host_args);
        if !self.classpath.is_empty() {
            cmd.arg("--classpath").arg(self.classpath.path_list());
        }
        cmd.arg(entry).args(&self.forwarded);
        cmd
    }
}

impl HostRuntime for NbbRuntime {
    fn add_classpath(&mut self, root: &Path) -> Result<(), HostError> {
        self.classpath.push(root)?;
        debug!("classpath += {}", root.display());
        Ok(())
    }

    fn load_file(&mut self, entry: &Path) -> Result<i32, HostError> {
        if !entry.exists() {
            return Err(HostError::EntryNotFound(entry.to_path_buf()));
        }
        if !entry.is_file() {
            return Err(HostError::EntryNotAFile(entry.to_path_buf()));
        }

        let mut cmd = self.command(entry);
        info!("loading {} with {}", entry.display(), self.command);
        let status = cmd.status().map_err(|source| HostError::Spawn {
            command: self.command.clone(),
            source,
        })?;
        debug!("host exited with {status}");
        Ok(exit_code(status))
    }
}

/// Exit code of a finished host; a signal kill maps to `128 + signal`
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
