#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = apexflow_cli::cli::Cli::parse();

    if let Err(e) = apexflow_cli::tracing::init(&args) {
        eprintln!("Failed to start tracing: {e}");
    }

    let rt = apexflow_cli::create_runtime()?;
    rt.block_on(apexflow_cli::run(args))
}
