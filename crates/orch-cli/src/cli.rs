//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use orch_client::ClientConfig;
use orch_endpoints::CommandIndex;
use tracing::debug;

use crate::error::CliError;

/// Orchestrator API client.
#[derive(Parser, Debug, Clone)]
#[command(name = "orchestrator-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the Orchestrator service.
    ///
    /// Defaults to `https://orchestrator` when unset.
    #[arg(short, long, env = "ORCHESTRATOR_URL")]
    pub url: Option<String>,

    /// Username for HTTP Basic authentication.
    #[arg(long, env = "ORCHESTRATOR_USERNAME", default_value = "")]
    pub username: String,

    /// Password for HTTP Basic authentication.
    #[arg(long, env = "ORCHESTRATOR_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Endpoint grammar file to use instead of the bundled one.
    #[arg(short, long, env = "ORCHESTRATOR_ENDPOINTS")]
    pub endpoints: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum Format {
    /// Human-readable output.
    #[default]
    Table,
    /// Compact JSON for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run an Orchestrator command, e.g. `run relocate db-1 3306 db-2 3306`.
    Run(InvokeArgs),

    /// Run a command by its method name, e.g. `call begin_downtime ...`.
    Call(InvokeArgs),

    /// List supported commands and their arguments.
    Commands,

    /// Show the accepted arguments of one command.
    Usage {
        /// Command to describe.
        command: String,
    },
}

/// Arguments for `run` and `call`.
#[derive(Args, Debug, Clone)]
pub struct InvokeArgs {
    /// Command or method name.
    pub name: String,

    /// Positional arguments, in path order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Compile the endpoint grammar selected by `--endpoints`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar file cannot be read.
    pub fn load_index(&self) -> Result<CommandIndex, CliError> {
        match &self.endpoints {
            Some(path) => {
                debug!(path = %path.display(), "loading endpoint grammar");
                let text = std::fs::read_to_string(path).map_err(|source| CliError::Endpoints {
                    path: path.clone(),
                    source,
                })?;
                Ok(CommandIndex::compile(&text))
            }
            None => Ok(CommandIndex::bundled()),
        }
    }

    /// Client configuration from the connection flags.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::resolve(self.url.as_deref()).with_credentials(&self.username, &self.password)
    }
}
