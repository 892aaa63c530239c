//! unminify-bootstrap - launcher for the unminify command-line tool
//!
//! This library locates the installed package, assembles the ordered
//! classpath the ClojureScript host needs, and hands execution to the
//! `src/unminify/cli.cljs` entry script through a [`host::HostRuntime`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bootstrap;
pub mod classpath;
pub mod config;
pub mod host;
pub mod paths;

pub use bootstrap::run;
pub use classpath::Classpath;
pub use config::BootstrapConfig;
pub use host::{HostError, HostRuntime, NbbRuntime};
pub use paths::Layout;
