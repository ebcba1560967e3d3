//! # Dart PSI
//!
//! Classification and typed visitor dispatch over the Dart program structure
//! tree.
//!
//! ## Architecture
//!
//! ```text
//! grammar table → NodeKind / Category → psi wrappers → DartVisitor
//! ```
//!
//! Every node kind belongs to exactly one category, and categories form a
//! tree rooted at `Element`. Each visitor operation forwards to the
//! operation of its category by default, so overriding `visit_expression`
//! covers every expression kind that is not overridden on its own.
//!
//! ## Example
//!
//! ```rust
//! use dart_psi::{psi, DartVisitor, NodeKind, PsiNode, Span};
//!
//! #[derive(Default)]
//! struct CountExpressions(usize);
//!
//! impl DartVisitor for CountExpressions {
//!     fn visit_expression(&mut self, _element: psi::Expression<'_>) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let node = PsiNode::new(NodeKind::AdditiveExpression, Span::new(0, 5));
//! let mut visitor = CountExpressions::default();
//! node.accept(&mut visitor);
//! assert_eq!(visitor.0, 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! dart-syntax (JSON / tree-sitter) → dart-psi → visitors
//! ```

mod macros;

mod classification;
mod element;
mod error;
mod grammar;
mod span;
mod tree;

pub use classification::{Ancestors, UnknownKind};
pub use element::PsiElement;
pub use error::{SyntaxError, SyntaxErrorKind};
pub use grammar::{psi, Category, DartVisitor, NodeKind};
pub use span::Span;
pub use tree::{Descendants, PsiFile, PsiNode};
