//! # PSI Generator
//!
//! `define_psi!` expands the grammar table in `grammar.rs` into:
//!
//! - the `Category` and `NodeKind` enums with their classification functions,
//! - the `psi` module with one typed wrapper per category and per kind,
//! - the `DartVisitor` trait with one forwarding operation per wrapper,
//! - the `accept` dispatch match.
//!
//! The table is the only place a kind or category is named. A kind row that
//! omits its category does not match the macro, and a category named in a
//! row but not declared fails to resolve, so an unclassified kind cannot be
//! compiled.
//!
//! ## Table Syntax
//!
//! ```text
//! root Element => visit_element;
//! top {
//!     PsiCompositeElement => visit_psi_composite_element;
//! }
//! categories {
//!     Expression: PsiCompositeElement => visit_expression;
//! }
//! kinds {
//!     AdditiveExpression: Expression [Reference] => visit_additive_expression, "additive_expression";
//! }
//! ```
//!
//! `top` lists the categories whose parent is the root. Bracketed categories
//! after a kind's category are facets: queryable, never dispatched.
//!
//! Every wrapper upcasts with `From` to its dispatch parent and to the root
//! wrapper. A `categories` row naming the root as parent, or a kind row
//! naming the root as category, yields two identical `From` impls and does
//! not compile.

macro_rules! define_psi {
    (
        root $root:ident => $root_visit:ident;

        top {
            $( $top:ident => $top_visit:ident; )*
        }

        categories {
            $( $cat:ident : $cat_parent:ident => $cat_visit:ident; )*
        }

        kinds { $( $kinds:tt )* }
    ) => {
        $crate::macros::define_psi! {
            @expand
            root $root => $root_visit;

            categories {
                $( $top : $root => $top_visit; )*
                $( $cat : $cat_parent => $cat_visit; )*
            }

            nested { $( $cat )* }

            kinds { $( $kinds )* }
        }
    };

    (
        @expand
        root $root:ident => $root_visit:ident;

        categories {
            $( $cat:ident : $cat_parent:ident => $cat_visit:ident; )*
        }

        nested { $( $nested:ident )* }

        kinds {
            $(
                $kind:ident : $kind_cat:ident $( [ $( $facet:ident ),* ] )?
                    => $kind_visit:ident, $kind_name:literal;
            )*
        }
    ) => {
        // =====================================================================
        // CATEGORY
        // =====================================================================

        /// Abstract grouping of node kinds sharing default traversal behavior.
        ///
        /// Categories form a tree rooted at the generic element category.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum Category {
            #[doc = concat!("Root category; `", stringify!($root_visit), "` ends every chain.")]
            $root,
            $(
                #[doc = concat!("Visited through `", stringify!($cat_visit), "`.")]
                $cat,
            )*
        }

        impl Category {
            /// Every category, root first.
            pub const ALL: &'static [Category] = &[Category::$root, $( Category::$cat ),*];

            /// The single category without a parent.
            pub const ROOT: Category = Category::$root;

            /// Direct parent category, `None` for the root.
            pub const fn parent(self) -> Option<Category> {
                match self {
                    Category::$root => None,
                    $( Category::$cat => Some(Category::$cat_parent), )*
                }
            }

            /// Category name as written in the grammar table.
            pub const fn name(self) -> &'static str {
                match self {
                    Category::$root => stringify!($root),
                    $( Category::$cat => stringify!($cat), )*
                }
            }

            /// Name of the visitor operation for this category.
            pub const fn operation(self) -> &'static str {
                match self {
                    Category::$root => stringify!($root_visit),
                    $( Category::$cat => stringify!($cat_visit), )*
                }
            }
        }

        // =====================================================================
        // NODE KIND
        // =====================================================================

        /// Concrete syntactic identity of a tree node.
        ///
        /// Serialized with the snake_case grammar name.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum NodeKind {
            $(
                #[doc = concat!("`", $kind_name, "` node.")]
                $kind,
            )*
        }

        impl NodeKind {
            /// Every kind, in grammar table order.
            pub const ALL: &'static [NodeKind] = &[$( NodeKind::$kind ),*];

            /// Direct dispatch category.
            pub const fn category(self) -> Category {
                match self {
                    $( NodeKind::$kind => Category::$kind_cat, )*
                }
            }

            /// Secondary categories that never take part in dispatch.
            pub const fn facets(self) -> &'static [Category] {
                match self {
                    $( NodeKind::$kind => &[ $( $( Category::$facet ),* )? ], )*
                }
            }

            /// Grammar name of the kind, e.g. `additive_expression`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$kind => $kind_name, )*
                }
            }

            /// Name of the visitor operation for this kind.
            pub const fn operation(self) -> &'static str {
                match self {
                    $( NodeKind::$kind => stringify!($kind_visit), )*
                }
            }
        }

        // =====================================================================
        // TYPED ELEMENTS
        // =====================================================================

        /// Typed views over [`PsiNode`](crate::tree::PsiNode)s, one per
        /// category and one per kind.
        ///
        /// A view can only be obtained through
        /// [`PsiElement::cast`](crate::element::PsiElement::cast) or an upcast,
        /// so the node behind it always matches the view.
        pub mod psi {
            use super::{Category, DartVisitor, NodeKind};
            use $crate::element::{OperationTarget, PsiElement};
            use $crate::tree::PsiNode;

            /// Any element; the root of the category tree.
            #[derive(Debug, Clone, Copy)]
            pub struct $root<'a> {
                node: &'a PsiNode,
            }

            impl<'a> $root<'a> {
                /// Views any node as a generic element.
                pub fn of(node: &'a PsiNode) -> Self {
                    Self { node }
                }
            }

            impl<'a> PsiElement<'a> for $root<'a> {
                fn can_cast(_kind: NodeKind) -> bool {
                    true
                }

                fn cast(node: &'a PsiNode) -> Option<Self> {
                    Some(Self { node })
                }

                fn node(&self) -> &'a PsiNode {
                    self.node
                }
            }

            impl<'a> OperationTarget for $root<'a> {
                fn visit_with<V: DartVisitor + ?Sized>(self, visitor: &mut V) {
                    visitor.$root_visit(self)
                }
            }

            $(
                #[doc = concat!("Element of the `", stringify!($cat), "` category.")]
                #[derive(Debug, Clone, Copy)]
                pub struct $cat<'a> {
                    node: &'a PsiNode,
                }

                impl<'a> $cat<'a> {
                    /// Casts a node whose kind carries this category either
                    /// through dispatch or as a facet.
                    pub fn cast_facet(node: &'a PsiNode) -> Option<Self> {
                        Category::$cat.admits(node.kind).then_some(Self { node })
                    }
                }

                impl<'a> PsiElement<'a> for $cat<'a> {
                    fn can_cast(kind: NodeKind) -> bool {
                        kind.is_a(Category::$cat)
                    }

                    fn cast(node: &'a PsiNode) -> Option<Self> {
                        Self::can_cast(node.kind).then_some(Self { node })
                    }

                    fn node(&self) -> &'a PsiNode {
                        self.node
                    }
                }

                impl<'a> OperationTarget for $cat<'a> {
                    fn visit_with<V: DartVisitor + ?Sized>(self, visitor: &mut V) {
                        visitor.$cat_visit(self)
                    }
                }

                impl<'a> From<$cat<'a>> for $cat_parent<'a> {
                    fn from(element: $cat<'a>) -> Self {
                        Self { node: element.node }
                    }
                }
            )*

            $(
                impl<'a> From<$nested<'a>> for $root<'a> {
                    fn from(element: $nested<'a>) -> Self {
                        Self { node: element.node }
                    }
                }
            )*

            $(
                #[doc = concat!("`", $kind_name, "` element.")]
                #[derive(Debug, Clone, Copy)]
                pub struct $kind<'a> {
                    node: &'a PsiNode,
                }

                impl<'a> PsiElement<'a> for $kind<'a> {
                    fn can_cast(kind: NodeKind) -> bool {
                        kind == NodeKind::$kind
                    }

                    fn cast(node: &'a PsiNode) -> Option<Self> {
                        Self::can_cast(node.kind).then_some(Self { node })
                    }

                    fn node(&self) -> &'a PsiNode {
                        self.node
                    }
                }

                impl<'a> OperationTarget for $kind<'a> {
                    fn visit_with<V: DartVisitor + ?Sized>(self, visitor: &mut V) {
                        visitor.$kind_visit(self)
                    }
                }

                impl<'a> From<$kind<'a>> for $kind_cat<'a> {
                    fn from(element: $kind<'a>) -> Self {
                        Self { node: element.node }
                    }
                }

                impl<'a> From<$kind<'a>> for $root<'a> {
                    fn from(element: $kind<'a>) -> Self {
                        Self { node: element.node }
                    }
                }
            )*

            /// Calls the operation matching the node's own kind.
            pub(crate) fn dispatch<V: DartVisitor + ?Sized>(node: &PsiNode, visitor: &mut V) {
                match node.kind {
                    $( NodeKind::$kind => visitor.$kind_visit($kind { node }), )*
                }
            }
        }

        // =====================================================================
        // VISITOR
        // =====================================================================

        /// Visitor over the Dart PSI tree.
        ///
        /// Every kind operation forwards to its category's operation, and every
        /// category operation forwards to its parent's, ending at the no-op
        #[doc = concat!("`", stringify!($root_visit), "`.")]
        /// Override an operation to intercept it for that kind or for every
        /// kind below that category. Forwarding never inspects the node again;
        /// the only runtime decision is made by `accept`.
        ///
        /// Operations act on the element only. To descend, call
        /// `accept_children` from the override.
        pub trait DartVisitor {
            /// Root operation. The default does nothing.
            fn $root_visit(&mut self, _element: psi::$root<'_>) {}

            $(
                #[doc = concat!("Forwards to the `", stringify!($cat_parent), "` operation by default.")]
                fn $cat_visit(&mut self, element: psi::$cat<'_>) {
                    $crate::element::OperationTarget::visit_with(
                        psi::$cat_parent::from(element),
                        self,
                    )
                }
            )*

            $(
                fn $kind_visit(&mut self, element: psi::$kind<'_>) {
                    $crate::element::OperationTarget::visit_with(
                        psi::$kind_cat::from(element),
                        self,
                    )
                }
            )*
        }
    };
}

pub(crate) use define_psi;
