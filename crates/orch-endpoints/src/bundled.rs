//! Endpoint grammar shipped with the client.

use crate::index::CommandIndex;

/// Orchestrator API endpoints supported out of the box.
///
/// One command variant per line, in the grammar understood by
/// [`crate::compile`]. The list must not contain blank lines: the first one
/// ends the grammar.
pub const SUPPORTED_ENDPOINTS: &str = include_str!("../endpoints/orchestrator.endpoints");

impl CommandIndex {
    /// Compile the bundled [`SUPPORTED_ENDPOINTS`] grammar.
    #[must_use]
    pub fn bundled() -> Self {
        Self::compile(SUPPORTED_ENDPOINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_grammar_compiles() {
        let index = CommandIndex::bundled();
        assert!(!index.is_empty());
        assert!(index.contains("clusters"));
        assert!(index.contains("relocate"));
    }

    #[test]
    fn bundled_grammar_has_no_blank_lines() {
        let lines = SUPPORTED_ENDPOINTS.lines().count();
        let registered: usize = CommandIndex::bundled()
            .iter()
            .map(|(_, shapes)| shapes.len())
            .sum();
        assert_eq!(lines, registered);
    }

    #[test]
    fn bundled_grammar_has_polymorphic_commands() {
        let index = CommandIndex::bundled();
        assert_eq!(index.arities("end-maintenance"), vec![2, 1]);
        assert_eq!(index.arities("begin-downtime"), vec![4, 5]);
        assert_eq!(index.arities("recover"), vec![2, 4]);
    }

    #[test]
    fn bundled_grammar_has_zero_argument_commands() {
        let index = CommandIndex::bundled();
        assert_eq!(index.arities("clusters"), vec![0]);
        assert_eq!(index.arities("health"), vec![0]);
    }
}
