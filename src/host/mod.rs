//! Host runtime port
//!
//! The bootstrap talks to the ClojureScript host through exactly two
//! primitives: register a classpath root, then load and execute a file.

mod nbb;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::classpath::ClasspathError;

pub use nbb::NbbRuntime;

/// Errors surfaced by a host runtime
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused a classpath root
    #[error(transparent)]
    Classpath(#[from] ClasspathError),

    /// The entry file does not exist
    #[error("entry file not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    /// Something other than a regular file sits at the entry path
    #[error("entry path is not a file: {}", .0.display())]
    EntryNotAFile(PathBuf),

    /// The host executable could not be started
    #[error("failed to start host runtime `{command}`: {source}")]
    Spawn {
        /// Command that was attempted
        command: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

/// A scripting host able to resolve namespaces from classpath roots
pub trait HostRuntime {
    /// Append `root` to the host's module search path.
    ///
    /// Roots are searched in the order they were added.
    fn add_classpath(&mut self, root: &Path) -> Result<(), HostError>;

    /// Load and execute `entry` to completion.
    ///
    /// Returns the exit code the script finished with.
    fn load_file(&mut self, entry: &Path) -> Result<i32, HostError>;
}
