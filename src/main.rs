// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, Command};
use commands::{handle_config_command, print_result, run_query};
use faceit_data::config::Config;
use faceit_data::error::AppError;
use faceit_data::FaceitData;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let Args {
        token,
        compact,
        debug,
        log_file,
        command,
    } = Args::parse();

    // Config commands work without a token, so they skip validation and logging
    let query = match command {
        Command::Config(command) => return handle_config_command(command).await,
        Command::Query(query) => query,
    };

    let config = Config::load_with_token(token).await?;

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) =
        logging::setup_logging(debug, log_file.as_deref(), config.log_file_path.as_deref())
            .await?;
    info!("Logs are being written to: {log_file_path}");

    let faceit = FaceitData::from_config(&config)?;
    let result = run_query(&faceit, query).await.inspect_err(|e| {
        error!("Query failed: {e}");
    })?;

    print_result(result.as_ref(), compact)
}
