//! Compiled command index.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One accepted positional-argument layout for a command.
///
/// Only the number of placeholders is used when validating a call; the
/// names themselves are documentation and show up in usage hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArgumentShape {
    placeholders: Vec<String>,
}

impl ArgumentShape {
    /// Create a shape from its placeholder names.
    pub fn new<I, S>(placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            placeholders: placeholders.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of positional arguments this shape accepts.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.placeholders.len()
    }

    /// Placeholder names, in positional order.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Render the shape as a usage hint, e.g. `['host', 'port']`.
    #[must_use]
    pub fn render(&self) -> String {
        let quoted: Vec<String> = self
            .placeholders
            .iter()
            .map(|name| format!("'{name}'"))
            .collect();
        format!("[{}]", quoted.join(", "))
    }
}

impl fmt::Display for ArgumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Mapping from command name to every argument shape registered for it.
///
/// Built once by [`CommandIndex::compile`] and read-only afterwards, so a
/// single index can be shared freely between threads. Commands iterate in
/// lexicographic order; shapes keep their registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandIndex {
    commands: BTreeMap<String, Vec<ArgumentShape>>,
}

impl CommandIndex {
    /// Compile an endpoint grammar. See [`crate::grammar`].
    #[must_use]
    pub fn compile(spec: &str) -> Self {
        crate::grammar::compile(spec)
    }

    /// Append a shape to a command, keeping shapes registered earlier.
    pub(crate) fn register(&mut self, command: &str, shape: ArgumentShape) {
        self.commands
            .entry(command.to_string())
            .or_default()
            .push(shape);
    }

    /// Whether the command is known.
    #[must_use]
    pub fn contains(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Shapes registered for a command, in registration order.
    #[must_use]
    pub fn shapes(&self, command: &str) -> Option<&[ArgumentShape]> {
        self.commands.get(command).map(Vec::as_slice)
    }

    /// Accepted argument counts for a command, in registration order.
    ///
    /// Empty when the command is unknown.
    #[must_use]
    pub fn arities(&self, command: &str) -> Vec<usize> {
        self.shapes(command)
            .map(|shapes| shapes.iter().map(ArgumentShape::arity).collect())
            .unwrap_or_default()
    }

    /// Whether `count` arguments is an accepted call shape for `command`.
    #[must_use]
    pub fn accepts(&self, command: &str, count: usize) -> bool {
        self.shapes(command)
            .is_some_and(|shapes| shapes.iter().any(|shape| shape.arity() == count))
    }

    /// One rendered usage hint per registered shape.
    #[must_use]
    pub fn usage_hints(&self, command: &str) -> Vec<String> {
        self.shapes(command)
            .map(|shapes| shapes.iter().map(ArgumentShape::render).collect())
            .unwrap_or_default()
    }

    /// Command names, sorted.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Commands together with their shapes, sorted by command.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ArgumentShape])> {
        self.commands
            .iter()
            .map(|(command, shapes)| (command.as_str(), shapes.as_slice()))
    }

    /// Number of distinct commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromStr for CommandIndex {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::compile(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommandIndex {
        CommandIndex::compile("relocate/:host/:port/:belowHost/:belowPort\nrelocate/:host/:port\nclusters\n")
    }

    #[test]
    fn shape_render_quotes_each_placeholder() {
        let shape = ArgumentShape::new(["host", "port"]);
        assert_eq!(shape.render(), "['host', 'port']");
        assert_eq!(shape.to_string(), "['host', 'port']");
    }

    #[test]
    fn empty_shape_renders_empty_brackets() {
        assert_eq!(ArgumentShape::default().render(), "[]");
    }

    #[test]
    fn usage_hints_one_per_shape() {
        let index = sample();
        assert_eq!(
            index.usage_hints("relocate"),
            vec![
                "['host', 'port', 'belowHost', 'belowPort']".to_string(),
                "['host', 'port']".to_string(),
            ]
        );
        assert_eq!(index.usage_hints("clusters"), vec!["[]".to_string()]);
    }

    #[test]
    fn unknown_command_has_no_arities() {
        let index = sample();
        assert!(!index.contains("nope"));
        assert!(index.shapes("nope").is_none());
        assert!(index.arities("nope").is_empty());
        assert!(index.usage_hints("nope").is_empty());
    }

    #[test]
    fn accepts_checks_arity_membership() {
        let index = sample();
        assert!(index.accepts("relocate", 2));
        assert!(index.accepts("relocate", 4));
        assert!(!index.accepts("relocate", 3));
        assert!(index.accepts("clusters", 0));
        assert!(!index.accepts("nope", 0));
    }

    #[test]
    fn commands_are_sorted() {
        let index = sample();
        let commands: Vec<&str> = index.commands().collect();
        assert_eq!(commands, vec!["clusters", "relocate"]);
    }

    #[test]
    fn command_names_are_case_sensitive() {
        let index = CommandIndex::compile("Clusters\nclusters/:hint\n");
        assert_eq!(index.len(), 2);
        assert_eq!(index.arities("Clusters"), vec![0]);
        assert_eq!(index.arities("clusters"), vec![1]);
    }

    #[test]
    fn from_str_matches_compile() {
        let parsed: CommandIndex = "clusters\n".parse().expect("infallible");
        assert_eq!(parsed, CommandIndex::compile("clusters\n"));
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let index = CommandIndex::compile("instance/:host/:port\n");
        let json = serde_json::to_value(&index).expect("serializable");
        assert_eq!(json, serde_json::json!({ "instance": [["host", "port"]] }));
    }
}
