//! Setup-then-delegate sequence
//!
//! Registers the package's classpath roots with the host, in order, and
//! only then asks it to run the entry script. Any failure stops the
//! sequence and is returned unchanged.

use log::debug;

use crate::host::{HostError, HostRuntime};
use crate::paths::Layout;

/// Prepare `host` for `layout` and run the entry script.
///
/// Returns the entry script's exit code.
pub fn run<H>(host: &mut H, layout: &Layout) -> Result<i32, HostError>
where
    H: HostRuntime + ?Sized,
{
    debug!("install root: {}", layout.root().display());

    for root in layout.classpath_roots() {
        host.add_classpath(&root)?;
    }

    host.load_file(&layout.entry_file())
}
