//! Endpoint grammar parsing.
//!
//! Each line of the grammar is a `/`-separated token sequence. The first
//! token is the command name, taken verbatim. Every following token is a
//! placeholder name; surrounding `:` characters are stripped and carry no
//! meaning beyond documentation.
//!
//! Parsing stops at the first empty line or at end of input. Malformed lines
//! are never rejected: a line without `/` simply registers a command that
//! takes no arguments.

use tracing::debug;

use crate::index::{ArgumentShape, CommandIndex};

/// Compile an endpoint grammar into a [`CommandIndex`].
///
/// This never fails. Content after the first empty line is ignored.
#[must_use]
pub fn compile(spec: &str) -> CommandIndex {
    let mut index = CommandIndex::default();

    for line in spec.lines() {
        if line.is_empty() {
            break;
        }

        let (command, shape) = parse_line(line);
        debug!(command = %command, arguments = ?shape.placeholders(), "registering command");
        index.register(command, shape);
    }

    index
}

/// Split a single grammar line into its command name and argument shape.
///
/// Surrounding whitespace is trimmed from the line before splitting.
#[must_use]
pub fn parse_line(line: &str) -> (&str, ArgumentShape) {
    let mut tokens = line.trim().split('/');
    let command = tokens.next().unwrap_or_default();
    let shape = ArgumentShape::new(tokens.map(|token| token.trim_matches(':')));
    (command, shape)
}
