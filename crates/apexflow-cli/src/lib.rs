#![warn(unused_crate_dependencies)]


use anyhow::Context as _;

pub mod cli;
mod commands;
pub mod tracing;

pub use commands::run;

/// Requests are spawned onto this runtime so it must be running for the
/// whole program
pub fn create_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("unable to create runtime")
}
