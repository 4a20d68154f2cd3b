//! Method-name lookup table.
//!
//! Commands such as `begin-downtime` are also reachable by an identifier
//! friendly name, `begin_downtime`. The table is built once from the index.

use std::collections::BTreeMap;

use orch_endpoints::CommandIndex;

/// Convert a command name to its method name.
#[must_use]
pub fn method_name(command: &str) -> String {
    command.replace('-', "_")
}

/// Explicit mapping from method name to command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTable {
    methods: BTreeMap<String, String>,
}

impl MethodTable {
    /// Build the table for every command in `index`.
    ///
    /// A command that already contains `_` is reachable by its own name
    /// unless a hyphenated command normalizes to the same method name, in
    /// which case the hyphenated command wins.
    #[must_use]
    pub fn from_index(index: &CommandIndex) -> Self {
        let mut methods = BTreeMap::new();

        for command in index.commands() {
            let method = method_name(command);
            if command.contains('-') || !methods.contains_key(&method) {
                methods.insert(method, command.to_string());
            }
        }

        Self { methods }
    }

    /// Command invoked by `method`.
    #[must_use]
    pub fn resolve(&self, method: &str) -> Option<&str> {
        self.methods.get(method).map(String::as_str)
    }

    /// Method names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Number of methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
