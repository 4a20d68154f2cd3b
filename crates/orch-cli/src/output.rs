//! Rendering of command results.
//!
//! `--format table` prints responses as indented JSON and listings as
//! aligned columns; `--format json` prints one compact JSON document per
//! invocation so output can be piped into `jq`.

use std::io::Write;

use orch_endpoints::CommandIndex;
use serde::Serialize;
use serde_json::Value;

use crate::cli::Format;
use crate::error::CliError;

/// Renders results in the format selected on the command line.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Renderer for `format`.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Write `value` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => value.write_table(writer)?,
        }
        Ok(())
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Human-readable rendering used by `--format table`.
pub trait TableDisplay {
    /// Write the value for a terminal reader.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Decoded body of a successful command.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Response(pub Value);

impl TableDisplay for Response {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut *writer, &self.0)
            .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Usage of a single command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandUsage {
    /// Command name as sent on the wire.
    pub command: String,
    /// Method name accepted by `call`.
    pub method: String,
    /// One rendered usage hint per accepted argument shape.
    pub usages: Vec<String>,
}

impl CommandUsage {
    /// Usage of `command` from `index`, or `None` if it is unknown.
    #[must_use]
    pub fn from_index(index: &CommandIndex, command: &str) -> Option<Self> {
        index.contains(command).then(|| Self {
            command: command.to_string(),
            method: orch_client::methods::method_name(command),
            usages: index.usage_hints(command),
        })
    }
}

impl TableDisplay for CommandUsage {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Command:  {}", self.command)?;
        writeln!(writer, "Method:   {}", self.method)?;
        writeln!(writer, "Usage:")?;
        for usage in &self.usages {
            writeln!(writer, "  {} {usage}", self.command)?;
        }
        Ok(())
    }
}

/// Every supported command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandList {
    /// Commands, sorted by name.
    pub commands: Vec<CommandUsage>,
}

impl CommandList {
    /// List every command in `index`.
    #[must_use]
    pub fn from_index(index: &CommandIndex) -> Self {
        let commands = index
            .commands()
            .filter_map(|command| CommandUsage::from_index(index, command))
            .collect();
        Self { commands }
    }
}

impl TableDisplay for CommandList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.commands.is_empty() {
            writeln!(writer, "No commands registered")?;
            return Ok(());
        }

        let width = self
            .commands
            .iter()
            .map(|entry| entry.command.len())
            .max()
            .unwrap_or_default()
            .max("COMMAND".len());

        // Header
        writeln!(writer, "{:<width$}  USAGE", "COMMAND")?;
        writeln!(writer, "{}", "─".repeat(width + 40))?;

        // Rows, one per shape
        for entry in &self.commands {
            for (i, usage) in entry.usages.iter().enumerate() {
                let name = if i == 0 { entry.command.as_str() } else { "" };
                writeln!(writer, "{name:<width$}  {usage}")?;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} command(s)", self.commands.len())?;
        Ok(())
    }
}
