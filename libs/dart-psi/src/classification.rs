//! # Node Classification
//!
//! Queries over the generated [`NodeKind`] → [`Category`] table.
//!
//! Dispatch follows the single-parent chain only. Facets answer "does this
//! kind also behave like X?" without adding a second dispatch parent.
//!
//! ## Example
//!
//! ```rust
//! use dart_psi::{Category, NodeKind};
//!
//! let kind = NodeKind::AdditiveExpression;
//! assert_eq!(kind.category(), Category::Expression);
//! assert!(kind.is_a(Category::PsiCompositeElement));
//! assert!(!kind.is_a(Category::Reference));
//! assert!(kind.is_reference_like());
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::MAX_CATEGORY_DEPTH;

use crate::grammar::{Category, NodeKind};

// =============================================================================
// CATEGORY
// =============================================================================

impl Category {
    /// Whether this is the root category.
    pub const fn is_root(self) -> bool {
        self.parent().is_none()
    }

    /// Iterates from this category up to the root, both included.
    pub fn ancestors(self) -> Ancestors {
        Ancestors {
            next: Some(self),
            remaining: MAX_CATEGORY_DEPTH + 1,
        }
    }

    /// Number of parent hops to the root.
    pub fn depth(self) -> usize {
        self.ancestors().count() - 1
    }

    /// Whether `self` is `other` or one of its descendants.
    pub fn is_within(self, other: Category) -> bool {
        self.ancestors().any(|c| c == other)
    }

    /// Whether nodes of `kind` are members of this category, through dispatch
    /// or as a facet.
    pub fn admits(self, kind: NodeKind) -> bool {
        kind.is_a(self) || kind.has_facet(self)
    }

    /// Kinds whose direct category is this one.
    pub fn direct_kinds(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a category and its ancestors, see [`Category::ancestors`].
///
/// Stops after [`MAX_CATEGORY_DEPTH`] hops even if the table were cyclic.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<Category>,
    remaining: usize,
}

impl Iterator for Ancestors {
    type Item = Category;

    fn next(&mut self) -> Option<Category> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

impl NodeKind {
    /// Categories from the direct one up to the root, in forwarding order.
    pub fn category_chain(self) -> Ancestors {
        self.category().ancestors()
    }

    /// Whether the dispatch chain of this kind passes through `category`.
    pub fn is_a(self, category: Category) -> bool {
        self.category().is_within(category)
    }

    /// Whether `category` is one of this kind's facets.
    pub fn has_facet(self, category: Category) -> bool {
        self.facets().contains(&category)
    }

    /// Whether nodes of this kind resolve like references.
    pub fn is_reference_like(self) -> bool {
        Category::Reference.admits(self)
    }

    /// Whether nodes of this kind declare a component.
    pub fn is_component_like(self) -> bool {
        Category::Component.admits(self)
    }

    /// Looks a kind up by its grammar name.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::from_name(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
