//! # orch-endpoints
//!
//! Endpoint grammar compiler for the Orchestrator API client.
//!
//! The Orchestrator API is a flat set of path-shaped `GET` commands. Rather
//! than binding each one by hand, the client describes them in a compact
//! line-oriented grammar:
//!
//! ```text
//! clusters
//! cluster/:clusterHint
//! relocate/:host/:port/:belowHost/:belowPort
//! end-maintenance/:host/:port
//! end-maintenance/:maintenanceKey
//! ```
//!
//! The first token of each line is the command, the rest are placeholder
//! names. A command may appear on several lines with different arities.
//! [`CommandIndex::compile`] turns that text into an immutable index that the
//! dispatcher validates calls against.
//!
//! ```rust
//! use orch_endpoints::CommandIndex;
//!
//! let index = CommandIndex::compile("clusters/:hint\nrelocate/:from-host/:from-port/:to-host/:to-port\n");
//! assert_eq!(index.arities("relocate"), vec![4]);
//! assert_eq!(index.usage_hints("clusters"), vec!["['hint']".to_string()]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bundled;
pub mod grammar;
pub mod index;

pub use bundled::SUPPORTED_ENDPOINTS;
pub use grammar::{compile, parse_line};
pub use index::{ArgumentShape, CommandIndex};
