use std::process::ExitCode;

use clap::Parser;
use stockfolio_cli::config::Config;
use stockfolio_cli::{build_state, execute, init_tracing, Cli};
use stockfolio_core::Error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config).await?;

    let output = execute(cli.command, &state).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::Validation(validation)) => {
            eprintln!("Validation failed:");
            for field in &validation.errors {
                eprintln!("  {} {}", field.field, field.message);
            }
        }
        _ => eprintln!("Error: {:#}", err),
    }
}
