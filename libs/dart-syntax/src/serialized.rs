//! # Serialized CST Import
//!
//! Builds PSI trees from a serialized Concrete Syntax Tree, so parsing can
//! happen elsewhere (an analysis server, a browser parser) and the tree can
//! still be visited in Rust.
//!
//! ## Format
//!
//! ```text
//! { "name": "main.dart", "sourceLength": 12,
//!   "roots": [ { "type": "return_statement", "startIndex": 0, "endIndex": 12,
//!                "children": [ ... ] } ] }
//! ```
//!
//! `type` is a PSI kind name such as `additive_expression`. Two special types
//! come from error recovery: `ERROR` wraps source that did not parse, and
//! `MISSING <token>` marks a token the parser had to insert. Both become
//! [`SyntaxError`]s on the file; the children of an `ERROR` node take its
//! place in the tree.
//!
//! ## Example
//!
//! ```rust
//! use dart_psi::NodeKind;
//! use dart_syntax::parse_file_json;
//!
//! let json = r#"{ "roots": [ { "type": "break_statement", "startIndex": 0, "endIndex": 6 } ] }"#;
//! let file = parse_file_json(json).unwrap();
//! assert_eq!(file.roots[0].kind, NodeKind::BreakStatement);
//! ```

use config::constants::{
    ImportLimits, ERROR_NODE_TYPE, MISSING_NODE_PREFIX, STACKER_RED_ZONE_BYTES,
    STACKER_STACK_SIZE_BYTES,
};
use std::fmt;

use dart_psi::{NodeKind, PsiFile, PsiNode, Span, SyntaxError};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stacker::maybe_grow;

use crate::error::TreeError;

// =============================================================================
// SERIALIZED TYPES
// =============================================================================

/// A serialized tree node.
///
/// Serialized as `{ "type", "text"?, "startIndex", "endIndex", "children"? }`.
/// Both directions grow the stack per level, so any tree the builder accepts
/// also survives a JSON round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedNode {
    /// PSI kind name, `ERROR`, or `MISSING <token>`.
    pub node_type: String,

    /// Token text for leaves.
    pub text: Option<String>,

    /// Byte offset where this node starts
    pub start_index: usize,

    /// Byte offset where this node ends
    pub end_index: usize,

    pub children: Vec<SerializedNode>,
}

const NODE_FIELDS: &[&str] = &["type", "text", "startIndex", "endIndex", "children"];

impl Serialize for SerializedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let len = 3 + usize::from(self.text.is_some()) + usize::from(!self.children.is_empty());
            let mut state = serializer.serialize_struct("SerializedNode", len)?;
            state.serialize_field("type", &self.node_type)?;
            match &self.text {
                Some(text) => state.serialize_field("text", text)?,
                None => state.skip_field("text")?,
            }
            state.serialize_field("startIndex", &self.start_index)?;
            state.serialize_field("endIndex", &self.end_index)?;
            if self.children.is_empty() {
                state.skip_field("children")?;
            } else {
                state.serialize_field("children", &self.children)?;
            }
            state.end()
        })
    }
}

impl<'de> Deserialize<'de> for SerializedNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            deserializer.deserialize_struct("SerializedNode", NODE_FIELDS, NodeVisitor)
        })
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = SerializedNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a serialized tree node")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SerializedNode, A::Error> {
        let mut node_type: Option<String> = None;
        let mut text: Option<String> = None;
        let mut start_index: Option<usize> = None;
        let mut end_index: Option<usize> = None;
        let mut children: Option<Vec<SerializedNode>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "type" => node_type = Some(map.next_value()?),
                "text" => text = map.next_value()?,
                "startIndex" => start_index = Some(map.next_value()?),
                "endIndex" => end_index = Some(map.next_value()?),
                "children" => children = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let missing = <A::Error as de::Error>::missing_field;
        Ok(SerializedNode {
            node_type: node_type.ok_or_else(|| missing("type"))?,
            text,
            start_index: start_index.ok_or_else(|| missing("startIndex"))?,
            end_index: end_index.ok_or_else(|| missing("endIndex"))?,
            children: children.unwrap_or_default(),
        })
    }
}

impl SerializedNode {
    pub fn span(&self) -> Span {
        Span::new(self.start_index, self.end_index)
    }

    /// Finds the first child of the given type.
    pub fn find_child(&self, node_type: &str) -> Option<&SerializedNode> {
        self.children.iter().find(|c| c.node_type == node_type)
    }

    /// True if this node represents a syntax error.
    pub fn is_error(&self) -> bool {
        self.node_type == ERROR_NODE_TYPE
    }

    /// True if this node was inserted by error recovery.
    pub fn is_missing(&self) -> bool {
        self.node_type.starts_with(MISSING_NODE_PREFIX)
    }

    /// The token a missing node stands for.
    fn missing_token(&self) -> &str {
        let token = self.node_type[MISSING_NODE_PREFIX.len()..].trim();
        if token.is_empty() {
            &self.node_type
        } else {
            token
        }
    }
}

impl From<&PsiNode> for SerializedNode {
    fn from(node: &PsiNode) -> Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || Self {
            node_type: node.kind.name().to_string(),
            text: node.text.clone(),
            start_index: node.span.start(),
            end_index: node.span.end(),
            children: node.children.iter().map(SerializedNode::from).collect(),
        })
    }
}

/// A serialized file: its top-level nodes and optional metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Byte length of the source; roots must end within it.
    #[serde(
        rename = "sourceLength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_length: Option<usize>,

    pub roots: Vec<SerializedNode>,
}

impl From<&PsiFile> for SerializedFile {
    fn from(file: &PsiFile) -> Self {
        Self {
            name: file.name.clone(),
            source_length: Some(file.source_len),
            roots: file.roots.iter().map(SerializedNode::from).collect(),
        }
    }
}

// =============================================================================
// TREE BUILDER
// =============================================================================

/// Converts serialized nodes into PSI nodes, collecting syntax errors.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    limits: ImportLimits,
    errors: Vec<SyntaxError>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(ImportLimits::default())
    }
}

impl TreeBuilder {
    pub fn new(limits: ImportLimits) -> Self {
        Self {
            limits,
            errors: Vec::new(),
        }
    }

    /// Syntax errors collected so far.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Builds `node` and appends the result to `out`.
    ///
    /// A regular node appends one PSI node, an `ERROR` node appends its
    /// converted children, and a `MISSING` node appends nothing.
    ///
    /// # Arguments
    ///
    /// * `node` - Serialized node to convert
    /// * `parent` - Span the node must lie within, `None` for roots
    /// * `depth` - Nesting level of `node`, roots are at 1
    /// * `out` - Receives the converted nodes
    pub fn build_into(
        &mut self,
        node: &SerializedNode,
        parent: Option<Span>,
        depth: usize,
        out: &mut Vec<PsiNode>,
    ) -> Result<(), TreeError> {
        let ImportLimits {
            stack_red_zone,
            stack_size,
            ..
        } = self.limits;
        maybe_grow(stack_red_zone, stack_size, || {
            self.build_inner(node, parent, depth, out)
        })
    }

    fn build_inner(
        &mut self,
        node: &SerializedNode,
        parent: Option<Span>,
        depth: usize,
        out: &mut Vec<PsiNode>,
    ) -> Result<(), TreeError> {
        if depth > self.limits.max_tree_depth {
            return Err(TreeError::TooDeep {
                limit: self.limits.max_tree_depth,
            });
        }
        if node.start_index > node.end_index {
            return Err(TreeError::InvalidSpan {
                start: node.start_index,
                end: node.end_index,
            });
        }
        let span = node.span();
        if let Some(parent) = parent {
            if !parent.encloses(&span) {
                return Err(TreeError::ChildOutOfBounds {
                    child: span,
                    parent,
                });
            }
        }

        if node.is_missing() {
            self.errors
                .push(SyntaxError::missing(node.missing_token(), span));
            return Ok(());
        }
        if node.is_error() {
            self.errors
                .push(SyntaxError::unexpected(node.text.clone(), span));
            for child in &node.children {
                self.build_into(child, Some(span), depth + 1, out)?;
            }
            return Ok(());
        }

        let kind =
            NodeKind::from_name(&node.node_type).ok_or_else(|| TreeError::UnknownKind {
                node_type: node.node_type.clone(),
                start: node.start_index,
            })?;

        let mut children = Vec::with_capacity(node.children.len());
        for child in &node.children {
            self.build_into(child, Some(span), depth + 1, &mut children)?;
        }
        out.push(PsiNode {
            kind,
            span,
            children,
            text: node.text.clone(),
        });
        Ok(())
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Builds a single node, rejecting any error or missing region.
///
/// # Example
///
/// ```rust
/// use dart_syntax::{build_node, SerializedNode};
///
/// let node = SerializedNode {
///     node_type: "id".to_string(),
///     text: Some("x".to_string()),
///     start_index: 0,
///     end_index: 1,
///     children: Vec::new(),
/// };
/// assert_eq!(build_node(&node).unwrap().text_or_empty(), "x");
/// ```
pub fn build_node(node: &SerializedNode) -> Result<PsiNode, TreeError> {
    let mut builder = TreeBuilder::default();
    let mut out = Vec::with_capacity(1);
    builder.build_into(node, None, 1, &mut out)?;

    let errors = builder.into_errors();
    match out.pop() {
        Some(root) if errors.is_empty() => Ok(root),
        _ => Err(TreeError::SyntaxErrors(errors)),
    }
}

/// Builds a file with the default limits.
pub fn build_file(file: &SerializedFile) -> Result<PsiFile, TreeError> {
    build_file_with(file, ImportLimits::default())
}

/// Builds a file; error regions are recorded on the file, not returned.
pub fn build_file_with(file: &SerializedFile, limits: ImportLimits) -> Result<PsiFile, TreeError> {
    let mut builder = TreeBuilder::new(limits);
    let bounds = file.source_length.map(|len| Span::new(0, len));

    let mut roots = Vec::with_capacity(file.roots.len());
    for root in &file.roots {
        builder.build_into(root, bounds, 1, &mut roots)?;
    }

    let errors = builder.into_errors();
    tracing::debug!(
        name = file.name.as_deref().unwrap_or("<anonymous>"),
        roots = roots.len(),
        errors = errors.len(),
        "built file from serialized tree"
    );

    let mut psi = PsiFile::new(roots, errors);
    if let Some(len) = file.source_length {
        psi.source_len = len;
    }
    psi.name = file.name.clone();
    Ok(psi)
}

/// Parses and builds a serialized file from JSON with the default limits.
pub fn parse_file_json(json: &str) -> Result<PsiFile, TreeError> {
    parse_file_json_with(json, ImportLimits::default())
}

/// Parses and builds a serialized file from JSON.
///
/// JSON nesting is not capped by the reader; `limits.max_tree_depth` is the
/// only depth bound, reported as [`TreeError::TooDeep`].
pub fn parse_file_json_with(json: &str, limits: ImportLimits) -> Result<PsiFile, TreeError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let file = SerializedFile::deserialize(&mut deserializer)?;
    deserializer.end()?;

    let built = build_file_with(&file, limits);
    dismantle(file.roots);
    built
}

/// Drops serialized nodes without recursing once per level.
fn dismantle(roots: Vec<SerializedNode>) {
    let mut pending = roots;
    while let Some(mut node) = pending.pop() {
        pending.append(&mut node.children);
    }
}

/// Serializes a file to JSON in the import format.
pub fn to_file_json(file: &PsiFile) -> Result<String, TreeError> {
    let serialized = SerializedFile::from(file);
    let json = serde_json::to_string(&serialized);
    dismantle(serialized.roots);
    Ok(json?)
}

// =============================================================================
// TESTS
// =============================================================================
