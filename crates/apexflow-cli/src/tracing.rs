use anyhow::bail;
use apexflow_shared::telemetry;

const APP_NAME: &str = "apexflow_cli";
const DEFAULT_FILTER: &str = "info";

pub fn init(cli: &super::cli::Cli) -> anyhow::Result<()> {
    if !cli.is_to_std_out {
        // Log to file
        match telemetry::init_to_file(APP_NAME, DEFAULT_FILTER) {
            Ok(file_path) => {
                eprintln!("Tracing started to file {file_path:?}");
                return Ok(());
            }
            Err(e) => {
                // Print error and fall though to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    // Log to stderr so command output stays clean
    match tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
