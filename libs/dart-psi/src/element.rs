//! # Typed Elements
//!
//! [`PsiElement`] is implemented by every wrapper in [`psi`]. A wrapper is a
//! borrowed [`PsiNode`] whose kind has been checked against the wrapper, so
//! visitor operations can take exact types instead of raw nodes.
//!
//! ## Example
//!
//! ```rust
//! use dart_psi::{psi, NodeKind, PsiElement, PsiNode, Span};
//!
//! let node = PsiNode::new(NodeKind::IfStatement, Span::new(0, 12));
//! assert!(psi::IfStatement::cast(&node).is_some());
//! assert!(psi::ReturnStatement::cast(&node).is_none());
//! assert!(psi::PsiCompositeElement::cast(&node).is_some());
//! ```

use crate::grammar::{psi, DartVisitor, NodeKind};
use crate::span::Span;
use crate::tree::PsiNode;

// =============================================================================
// PSI ELEMENT
// =============================================================================

/// A typed view of a tree node.
pub trait PsiElement<'a>: Copy + Sized {
    /// Whether nodes of `kind` can be viewed as `Self`.
    fn can_cast(kind: NodeKind) -> bool;

    /// Views `node` as `Self` if its kind allows it.
    fn cast(node: &'a PsiNode) -> Option<Self>;

    /// The underlying node.
    fn node(&self) -> &'a PsiNode;

    fn kind(&self) -> NodeKind {
        self.node().kind
    }

    fn span(&self) -> Span {
        self.node().span
    }

    /// Token text of the node, if the parser recorded one.
    fn text(&self) -> Option<&'a str> {
        self.node().text.as_deref()
    }

    /// Dispatches to the visitor operation of the node's own kind,
    /// regardless of how the node is viewed.
    fn accept<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        self.node().accept(visitor)
    }

    fn accept_children<V: DartVisitor + ?Sized>(&self, visitor: &mut V) {
        self.node().accept_children(visitor)
    }

    /// First direct child viewable as `T`.
    fn find_child_of<T: PsiElement<'a>>(&self) -> Option<T> {
        self.node().children.iter().find_map(T::cast)
    }

    /// Every direct child viewable as `T`, in order.
    fn find_children_of<T: PsiElement<'a>>(&self) -> Vec<T> {
        self.node().children.iter().filter_map(T::cast).collect()
    }

    /// Upcast to the root view.
    fn as_element(&self) -> psi::Element<'a> {
        psi::Element::of(self.node())
    }
}

/// Calls the visitor operation that takes `Self`.
///
/// The generated default operations use it to forward a wrapper to its
/// parent category without naming the parent's operation.
pub(crate) trait OperationTarget {
    fn visit_with<V: DartVisitor + ?Sized>(self, visitor: &mut V);
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl<'a> psi::FinalVarOrType<'a> {
    /// Declared type, absent for `var` and untyped `final`.
    pub fn type_ref(&self) -> Option<psi::Type<'a>> {
        self.find_child_of()
    }
}

impl<'a> psi::Component<'a> {
    pub fn component_name(&self) -> Option<psi::ComponentName<'a>> {
        self.find_child_of()
    }

    /// Declared name as written in the source.
    pub fn name(&self) -> Option<&'a str> {
        self.component_name().and_then(|name| name.name())
    }
}

impl<'a> psi::Class<'a> {
    pub fn component_name(&self) -> Option<psi::ComponentName<'a>> {
        self.find_child_of()
    }

    /// Class or interface body.
    pub fn body(&self) -> Option<psi::ExecutionScope<'a>> {
        self.find_child_of()
    }
}

impl<'a> psi::ComponentName<'a> {
    /// Identifier text, taken from the `id` child or from the node itself.
    pub fn name(&self) -> Option<&'a str> {
        self.find_child_of::<psi::Id<'a>>()
            .and_then(|id| id.text())
            .or_else(|| self.text())
    }
}
