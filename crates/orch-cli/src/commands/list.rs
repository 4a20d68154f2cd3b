//! Supported commands overview.

use std::io::Write;

use orch_endpoints::CommandIndex;

use crate::error::CliError;
use crate::output::{CommandList, OutputFormat};

/// Commands listing executor.
pub struct ListCommand<'a> {
    index: &'a CommandIndex,
}

impl<'a> ListCommand<'a> {
    /// Create a new listing over `index`.
    #[must_use]
    pub fn new(index: &'a CommandIndex) -> Self {
        Self { index }
    }

    /// Print every command with its usage hints.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    pub fn execute<W: Write>(&self, writer: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        format.write(writer, &CommandList::from_index(self.index))
    }
}
