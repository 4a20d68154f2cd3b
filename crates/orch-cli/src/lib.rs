//! # orch-cli
//!
//! Command-line front-end for the Orchestrator API client.
//!
//! Provides commands for:
//! - Running any command from the endpoint grammar
//! - Calling a command through its method name
//! - Listing supported commands and their usage
//!
//! # Architecture
//!
//! The CLI compiles the endpoint grammar (bundled, or loaded from
//! `--endpoints`) and hands it to an [`orch_client::OrchestratorClient`],
//! which talks to Orchestrator over HTTP.
//!
//! ```text
//! ┌──────────────────────┐     HTTP GET /api/...     ┌────────────────┐
//! │ orchestrator-client  │──────────────────────────►│  Orchestrator  │
//! └──────────────────────┘        (JSON reply)       └────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format, InvokeArgs};
pub use error::CliError;
pub use output::OutputFormat;
