//! # Syntax Errors
//!
//! Error regions reported by the parser that produced a tree. They are data
//! attached to a [`PsiFile`](crate::PsiFile), not failures of the tree layer.
//!
//! ```rust
//! use dart_psi::{Span, SyntaxError};
//!
//! let error = SyntaxError::missing(";", Span::new(12, 12));
//! assert_eq!(error.to_string(), "missing `;` at byte 12");
//! ```

use serde::{Deserialize, Serialize};

use crate::span::Span;

// =============================================================================
// SYNTAX ERROR
// =============================================================================

/// A syntax error with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind} at byte {}", .span.start())]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Source location of the error region.
    pub span: Span,
}

impl SyntaxError {
    pub const fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Source the parser could not fit into the grammar.
    pub fn unexpected(text: Option<String>, span: Span) -> Self {
        Self::new(SyntaxErrorKind::Unexpected { text }, span)
    }

    /// A token the parser had to insert.
    pub fn missing(expected: impl Into<String>, span: Span) -> Self {
        Self::new(
            SyntaxErrorKind::Missing {
                expected: expected.into(),
            },
            span,
        )
    }
}

// =============================================================================
// SYNTAX ERROR KIND
// =============================================================================

/// Kinds of syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxErrorKind {
    /// Unparseable region, with its source text when known.
    #[error("unexpected {}", describe_unexpected(.text))]
    Unexpected { text: Option<String> },

    /// Inserted token, e.g. a `;` the source left out.
    #[error("missing `{expected}`")]
    Missing { expected: String },
}

fn describe_unexpected(text: &Option<String>) -> String {
    match text {
        Some(text) => format!("`{text}`"),
        None => "input".to_string(),
    }
}
