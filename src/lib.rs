//! `idb` - source control for your brilliant ideas
//!
//! This crate provides the `idb` CLI on top of [`idb_lib`], which owns the
//! idea store and the content-hash identifiers.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Store location and log file resolution
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//! - [`presenter`] - Hash listing and interactive idea viewer

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod presenter;

pub use idb_lib::{IdbError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration, logging setup or the command fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
