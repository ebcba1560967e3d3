//! # PSI Tree
//!
//! Owned concrete tree nodes and the file that holds them.
//!
//! Each node owns its children, so a node has exactly one parent and the
//! tree cannot contain cycles. Trees are read-only while visitors run over
//! them and can be shared between threads.
//!
//! ## Example
//!
//! ```rust
//! use dart_psi::{NodeKind, PsiNode, Span};
//!
//! let mut block = PsiNode::new(NodeKind::Block, Span::new(0, 10));
//! block.add_child(PsiNode::new(NodeKind::ReturnStatement, Span::new(2, 9)));
//! assert!(block.find_child(NodeKind::ReturnStatement).is_some());
//! assert_eq!(block.descendants().count(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::grammar::{psi, DartVisitor, NodeKind};
use crate::span::Span;

// =============================================================================
// PSI FILE
// =============================================================================

/// A parsed Dart file: the forest of top-level nodes plus the syntax errors
/// found while parsing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsiFile {
    /// File name, when the tree came from a named source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Length of the parsed source in bytes.
    pub source_len: usize,
    /// Top-level nodes in source order.
    pub roots: Vec<PsiNode>,
    /// Syntax errors reported by the parser.
    #[serde(default)]
    pub errors: Vec<SyntaxError>,
}

impl PsiFile {
    /// Creates a file from its roots; the source length is taken from the
    /// furthest root end.
    pub fn new(roots: Vec<PsiNode>, errors: Vec<SyntaxError>) -> Self {
        let source_len = roots.iter().map(|r| r.span.end()).max().unwrap_or(0);
        Self {
            name: None,
            source_len,
            roots,
            errors,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn roots(&self) -> &[PsiNode] {
        &self.roots
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Whether parsing produced no syntax errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Accepts the visitor on each root, without descending.
    pub fn accept_children<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        for root in &self.roots {
            root.accept(visitor);
        }
    }

    /// Accepts the visitor on every node of every root, in preorder.
    pub fn walk<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        tracing::trace!(
            name = self.name.as_deref().unwrap_or("<anonymous>"),
            roots = self.roots.len(),
            "walking file"
        );
        for node in self.descendants() {
            node.accept(visitor);
        }
    }

    /// Every node of every root, in preorder.
    pub fn descendants(&self) -> impl Iterator<Item = &PsiNode> {
        self.roots.iter().flat_map(|root| root.descendants())
    }
}

// =============================================================================
// PSI NODE
// =============================================================================

/// A node of the Dart PSI tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsiNode {
    /// Node type.
    pub kind: NodeKind,
    /// Source span.
    pub span: Span,
    /// Child nodes in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PsiNode>,
    /// Token text for leaves such as identifiers and literals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PsiNode {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
            text: None,
        }
    }

    /// Create node with text content.
    pub fn with_text(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Create node with children.
    pub fn with_children(kind: NodeKind, span: Span, children: Vec<PsiNode>) -> Self {
        Self {
            kind,
            span,
            children,
            text: None,
        }
    }

    pub fn add_child(&mut self, child: PsiNode) {
        self.children.push(child);
    }

    /// Get text content, or empty string if none.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Find first child with given kind.
    pub fn find_child(&self, kind: NodeKind) -> Option<&PsiNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Find all children with given kind.
    pub fn find_children(&self, kind: NodeKind) -> Vec<&PsiNode> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// This node and everything below it, in preorder.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Calls the visitor operation for this node's kind.
    ///
    /// Only this node is visited. An operation that wants the subtree calls
    /// [`accept_children`](Self::accept_children) itself.
    pub fn accept<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        psi::dispatch(self, visitor)
    }

    /// Accepts the visitor on each direct child, in order.
    pub fn accept_children<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        for child in &self.children {
            child.accept(visitor);
        }
    }

    /// Accepts the visitor on this node and every descendant, in preorder.
    ///
    /// Uses an explicit stack, so depth is bounded by memory only.
    pub fn walk<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        tracing::trace!(kind = %self.kind, "walking subtree");
        for node in self.descendants() {
            node.accept(visitor);
        }
    }
}

/// Preorder iterator over a subtree, see [`PsiNode::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a PsiNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a PsiNode;

    fn next(&mut self) -> Option<&'a PsiNode> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

// =============================================================================
// TESTS
// =============================================================================
