//! Usage of a single command.

use std::io::Write;

use orch_client::ClientError;
use orch_endpoints::CommandIndex;

use crate::error::CliError;
use crate::output::{CommandUsage, OutputFormat};

/// Usage executor.
pub struct UsageCommand<'a> {
    index: &'a CommandIndex,
}

impl<'a> UsageCommand<'a> {
    /// Create a new usage command over `index`.
    #[must_use]
    pub fn new(index: &'a CommandIndex) -> Self {
        Self { index }
    }

    /// Print the accepted argument shapes of `command`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownCommand`] if the command is not in the
    /// grammar, or an error if output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &str,
    ) -> Result<(), CliError> {
        let usage = CommandUsage::from_index(self.index, command).ok_or_else(|| {
            ClientError::UnknownCommand {
                command: command.to_string(),
            }
        })?;
        format.write(writer, &usage)
    }
}
