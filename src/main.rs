pub mod config;
pub mod io;
pub mod environment;
pub mod logger;

use std::process::ExitCode;

use config::Args;

use crate::io::source::config::SourceConfig;
use crate::io::sink::config::SinkConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // usage errors and --version exit here, before any file is opened
    let args = Args::create();

    if let Err(e) = logger::init_subscriber() {
        eprintln!("Unable to set a global logger instance: {}", e);
        return ExitCode::FAILURE;
    }
    tracing::debug!(
        build = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        rustc = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown"),
        opt_level = option_env!("VERGEN_CARGO_OPT_LEVEL").unwrap_or("unknown"),
        "cpchunk {}", config::VERSION
    );
    tracing::debug!("Args: {:?}", args);

    let source_cfg = SourceConfig::from(&args);
    let sink_cfg = SinkConfig::from(&args);

    match io::copy_chunk(&source_cfg, &sink_cfg).await {
        Ok(statistics) => {
            statistics.display();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
