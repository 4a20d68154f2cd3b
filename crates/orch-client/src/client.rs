//! Orchestrator API client.

use std::fmt::{self, Display};
use std::sync::Arc;

use orch_endpoints::CommandIndex;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::dispatch::{build_path, dispatch};
use crate::error::ClientError;
use crate::methods::MethodTable;
use crate::transport::{ReqwestTransport, Transport};

/// Client for the Orchestrator HTTP API.
///
/// Holds the compiled [`CommandIndex`], its [`MethodTable`], the connection
/// settings and a [`Transport`]. All of them are immutable after
/// construction; clones share the index and the transport.
pub struct OrchestratorClient<T = ReqwestTransport> {
    index: Arc<CommandIndex>,
    methods: Arc<MethodTable>,
    config: ClientConfig,
    transport: Arc<T>,
}

impl<T> Clone for OrchestratorClient<T> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
            methods: Arc::clone(&self.methods),
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> fmt::Debug for OrchestratorClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrchestratorClient")
            .field("base_url", &self.config.base_url())
            .field("commands", &self.index.len())
            .field("authenticated", &self.config.credentials().is_some())
            .finish_non_exhaustive()
    }
}

impl OrchestratorClient<ReqwestTransport> {
    /// Client for the bundled endpoint grammar over `reqwest`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_index(CommandIndex::bundled(), config)
    }

    /// Client for a custom endpoint grammar over `reqwest`.
    #[must_use]
    pub fn with_index(index: CommandIndex, config: ClientConfig) -> Self {
        Self::with_transport(index, config, ReqwestTransport::new())
    }

    /// Client for the bundled grammar, configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: Transport> OrchestratorClient<T> {
    /// Client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(index: CommandIndex, config: ClientConfig, transport: T) -> Self {
        let methods = MethodTable::from_index(&index);
        Self {
            index: Arc::new(index),
            methods: Arc::new(methods),
            config,
            transport: Arc::new(transport),
        }
    }

    /// The compiled command index.
    #[must_use]
    pub fn index(&self) -> &CommandIndex {
        &self.index
    }

    /// Connection settings.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The method-name lookup table.
    #[must_use]
    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full request URL for a call, without sending it.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`OrchestratorClient::run`].
    pub fn request_url<I, A>(&self, command: &str, args: I) -> Result<String, ClientError>
    where
        I: IntoIterator<Item = A>,
        A: Display,
    {
        let args = stringify(args);
        let path = build_path(&self.index, command, &args)?;
        Ok(self.config.endpoint_url(&path))
    }

    /// Run `command` with positional `args`.
    ///
    /// Arguments of any [`Display`] type are accepted and stringified.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownCommand`] or
    /// [`ClientError::ArgumentCountMismatch`] without sending a request;
    /// otherwise returns transport failures and non-success responses.
    pub fn run<I, A>(&self, command: &str, args: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = A>,
        A: Display,
    {
        let args = stringify(args);
        dispatch(&self.index, &*self.transport, &self.config, command, &args)
    }

    /// Run the command registered under a method name such as
    /// `begin_downtime`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoSuchMethod`] if no command maps to `method`,
    /// otherwise the same errors as [`OrchestratorClient::run`].
    pub fn invoke<I, A>(&self, method: &str, args: I) -> Result<Value, ClientError>
    where
        I: IntoIterator<Item = A>,
        A: Display,
    {
        let command = self
            .methods
            .resolve(method)
            .ok_or_else(|| ClientError::NoSuchMethod {
                name: method.to_string(),
            })?;
        self.run(command, args)
    }
}

fn stringify<I, A>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = A>,
    A: Display,
{
    args.into_iter().map(|arg| arg.to_string()).collect()
}
