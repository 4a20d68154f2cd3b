//! Command invocation.

use std::io::Write;

use orch_client::{OrchestratorClient, Transport};
use tracing::debug;

use crate::cli::InvokeArgs;
use crate::error::CliError;
use crate::output::{OutputFormat, Response};

/// Run command executor.
pub struct RunCommand<T> {
    client: OrchestratorClient<T>,
}

impl<T: Transport> RunCommand<T> {
    /// Create a new run command.
    #[must_use]
    pub fn new(client: OrchestratorClient<T>) -> Self {
        Self { client }
    }

    /// Run a command by its wire name and print the decoded reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &InvokeArgs,
    ) -> Result<(), CliError> {
        debug!(command = %args.name, args = ?args.args, "running command");
        let value = self.client.run(&args.name, &args.args)?;
        format.write(writer, &Response(value))
    }

    /// Run a command by its method name and print the decoded reply.
    ///
    /// # Errors
    ///
    /// Returns an error if no command has that method name, the call fails,
    /// or output fails.
    pub fn execute_method<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &InvokeArgs,
    ) -> Result<(), CliError> {
        debug!(method = %args.name, args = ?args.args, "calling method");
        let value = self.client.invoke(&args.name, &args.args)?;
        format.write(writer, &Response(value))
    }
}
