//! unminify - launcher for the unminify command-line tool
//!
//! Locates the installed package, registers its classpath with the host
//! runtime, and runs `src/unminify/cli.cljs`. Every command-line argument
//! belongs to the entry script and is forwarded untouched.

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

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use unminify_bootstrap::config::{BootstrapConfig, LOG_ENV};
use unminify_bootstrap::{Layout, NbbRuntime};

/// Main entry point for the unminify launcher
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    match run() {
        Ok(code) => ExitCode::from(exit_status_byte(code)),
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        },
    }
}

fn run() -> anyhow::Result<i32> {
    let layout = Layout::discover().context("cannot locate the unminify installation")?;
    let config = BootstrapConfig::resolve(&layout.config_file())?;

    let mut host = NbbRuntime::new(&config.host).with_forwarded_args(env::args_os().skip(1));
    Ok(unminify_bootstrap::run(&mut host, &layout)?)
}

/// Process exit status for a host exit code; out-of-range codes become `1`
fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
