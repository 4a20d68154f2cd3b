//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`run`] - Command invocation, by command or method name
//! - [`list`] - Supported commands overview
//! - [`usage`] - Accepted arguments of one command

pub mod list;
pub mod run;
pub mod usage;

pub use list::ListCommand;
pub use run::RunCommand;
pub use usage::UsageCommand;
