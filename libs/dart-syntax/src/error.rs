//! # Import Errors

use dart_psi::{Span, SyntaxError};
use thiserror::Error;

/// Errors that can occur while building a PSI tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Node type that names no PSI kind.
    #[error("unknown node type `{node_type}` at byte {start}")]
    UnknownKind {
        /// Type as written in the input.
        node_type: String,
        /// Start of the offending node.
        start: usize,
    },

    /// Span whose start lies after its end.
    #[error("invalid span {start}..{end}")]
    InvalidSpan { start: usize, end: usize },

    /// Child reaching outside its parent.
    #[error("child {child:?} lies outside parent {parent:?}")]
    ChildOutOfBounds { child: Span, parent: Span },

    /// Nesting beyond the configured depth limit.
    #[error("tree nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    /// Error or missing regions found by strict import.
    #[error("{} syntax error(s) in tree", .0.len())]
    SyntaxErrors(Vec<SyntaxError>),

    /// Malformed serialized input.
    #[error("malformed serialized tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The Dart grammar is incompatible with the linked tree-sitter.
    #[cfg(feature = "native-parser")]
    #[error("failed to load the Dart grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// tree-sitter gave up without producing a tree.
    #[cfg(feature = "native-parser")]
    #[error("tree-sitter returned no tree")]
    ParseCancelled,
}
