use std::process::ExitCode;

use clap::Parser;
use promptc_lib::{init_tracing, load_dotenv, run_prompt, Cli, GeminiGenerator};
use tracing::{debug, error, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // .env has to be applied before clap reads env-backed flags
    let dotenv = load_dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(Some(path)) => debug!("Loaded environment variables from {}", path.display()),
        Ok(None) => {}
        Err(err) => warn!("Failed to load .env file: {err}"),
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?config, "configuration");

    let mut stdout = std::io::stdout().lock();
    match run_prompt(&config, GeminiGenerator::connect, &mut stdout).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
