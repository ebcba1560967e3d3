//! # Dart Syntax
//!
//! Builds [`dart_psi`] trees from external parser output.
//!
//! ## Architecture
//!
//! ```text
//! Serialized CST (JSON) → serialized → PsiFile
//! Dart source → tree-sitter → native → PsiFile
//! ```
//!
//! Both importers report error recovery regions as
//! [`SyntaxError`](dart_psi::SyntaxError)s on the resulting file and fail
//! with [`TreeError`] only when the input cannot be turned into a tree.
//!
//! ## Example
//!
//! ```rust
//! use dart_psi::{psi, DartVisitor};
//!
//! #[derive(Default)]
//! struct Classes(usize);
//!
//! impl DartVisitor for Classes {
//!     fn visit_class(&mut self, _element: psi::Class<'_>) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let json = r#"{ "roots": [
//!     { "type": "class_definition", "startIndex": 0, "endIndex": 10 },
//!     { "type": "interface_definition", "startIndex": 11, "endIndex": 20 }
//! ] }"#;
//! let file = dart_syntax::parse_file_json(json).unwrap();
//! let mut classes = Classes::default();
//! file.walk(&mut classes);
//! assert_eq!(classes.0, 2);
//! ```

pub mod error;
#[cfg(feature = "native-parser")]
pub mod native;
pub mod serialized;

pub use error::TreeError;
#[cfg(feature = "native-parser")]
pub use native::{parse_source, parse_source_with};
pub use serialized::{
    build_file, build_file_with, build_node, parse_file_json, parse_file_json_with, to_file_json,
    SerializedFile, SerializedNode, TreeBuilder,
};
