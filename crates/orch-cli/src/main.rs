//! Orchestrator client binary entrypoint.
//!
//! This is the main entry point for the `orchestrator-client` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orch_cli::cli::{Cli, Commands};
use orch_cli::commands::{ListCommand, RunCommand, UsageCommand};
use orch_cli::output::OutputFormat;
use orch_client::OrchestratorClient;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), orch_cli::CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();
    let index = cli.load_index()?;

    match &cli.command {
        Commands::Run(args) => {
            let client = OrchestratorClient::with_index(index, cli.client_config());
            RunCommand::new(client).execute(&mut stdout, &format, args)?;
        }
        Commands::Call(args) => {
            let client = OrchestratorClient::with_index(index, cli.client_config());
            RunCommand::new(client).execute_method(&mut stdout, &format, args)?;
        }
        Commands::Commands => {
            ListCommand::new(&index).execute(&mut stdout, &format)?;
        }
        Commands::Usage { command } => {
            UsageCommand::new(&index).execute(&mut stdout, &format, command)?;
        }
    }

    Ok(())
}
