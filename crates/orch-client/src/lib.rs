//! # orch-client
//!
//! Schema-driven client for the Orchestrator HTTP API.
//!
//! Every supported command comes from an endpoint grammar compiled by
//! [`orch_endpoints`]. A call is validated against the accepted argument
//! counts, turned into a `GET {base}/api/{command}/{arg}/...` request, and
//! the response is classified into a JSON value or a [`ClientError`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   compile   ┌──────────────┐
//! │ grammar text │────────────►│ CommandIndex │
//! └──────────────┘             └──────┬───────┘
//!                                     │ validate
//!                              ┌──────▼───────┐   GET    ┌──────────────┐
//!                              │  dispatch()  │─────────►│  Transport   │
//!                              └──────────────┘          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use orch_client::{ClientConfig, OrchestratorClient};
//!
//! # fn example() -> Result<(), orch_client::ClientError> {
//! let client = OrchestratorClient::new(ClientConfig::new("http://localhost:3000"));
//! let clusters = client.run("clusters", Vec::<String>::new())?;
//! let instance = client.invoke("instance", ["db-1", "3306"])?;
//! println!("{clusters} {instance}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod methods;
pub mod transport;

pub use client::OrchestratorClient;
pub use config::{ClientConfig, Credentials};
pub use dispatch::{build_path, classify, dispatch};
pub use error::{ClientError, ErrorKind};
pub use methods::MethodTable;
pub use orch_endpoints::{ArgumentShape, CommandIndex};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
