//! Default forwarding of `DartVisitor` operations.

mod common;

use dart_psi::{psi, Category, DartVisitor, NodeKind, PsiElement, PsiNode, Span};

fn node(kind: NodeKind) -> PsiNode {
    PsiNode::new(kind, Span::new(0, 1))
}

// =============================================================================
// CHAIN RECORDER
// =============================================================================

/// Overrides every category operation, records it, and forwards the way the
/// default would.
#[derive(Default)]
struct ChainRecorder {
    hits: Vec<Category>,
}

impl DartVisitor for ChainRecorder {
    fn visit_element(&mut self, _element: psi::Element<'_>) {
        self.hits.push(Category::Element);
    }

    fn visit_psi_composite_element(&mut self, element: psi::PsiCompositeElement<'_>) {
        self.hits.push(Category::PsiCompositeElement);
        self.visit_element(element.into());
    }

    fn visit_class(&mut self, element: psi::Class<'_>) {
        self.hits.push(Category::Class);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_component(&mut self, element: psi::Component<'_>) {
        self.hits.push(Category::Component);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_execution_scope(&mut self, element: psi::ExecutionScope<'_>) {
        self.hits.push(Category::ExecutionScope);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_expression(&mut self, element: psi::Expression<'_>) {
        self.hits.push(Category::Expression);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_named_element(&mut self, element: psi::NamedElement<'_>) {
        self.hits.push(Category::NamedElement);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_operator(&mut self, element: psi::Operator<'_>) {
        self.hits.push(Category::Operator);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_q_named_element(&mut self, element: psi::QNamedElement<'_>) {
        self.hits.push(Category::QNamedElement);
        self.visit_psi_composite_element(element.into());
    }

    fn visit_reference(&mut self, element: psi::Reference<'_>) {
        self.hits.push(Category::Reference);
        self.visit_psi_composite_element(element.into());
    }
}

#[test]
fn test_every_kind_forwards_along_its_category_chain() {
    common::init_tracing();
    for kind in NodeKind::ALL {
        let mut recorder = ChainRecorder::default();
        node(*kind).accept(&mut recorder);
        let expected: Vec<_> = kind.category_chain().collect();
        assert_eq!(recorder.hits, expected, "{kind}");
    }
}

// =============================================================================
// SINGLE-OPERATION VISITORS
// =============================================================================

/// Declares a visitor overriding only one category operation.
macro_rules! only {
    ($name:ident, $op:ident, $ty:ident) => {
        #[derive(Default)]
        struct $name(Vec<NodeKind>);

        impl DartVisitor for $name {
            fn $op(&mut self, element: psi::$ty<'_>) {
                self.0.push(element.kind());
            }
        }
    };
}

only!(OnlyElement, visit_element, Element);
only!(OnlyComposite, visit_psi_composite_element, PsiCompositeElement);
only!(OnlyClass, visit_class, Class);
only!(OnlyComponent, visit_component, Component);
only!(OnlyExecutionScope, visit_execution_scope, ExecutionScope);
only!(OnlyExpression, visit_expression, Expression);
only!(OnlyNamedElement, visit_named_element, NamedElement);
only!(OnlyOperator, visit_operator, Operator);
only!(OnlyQNamedElement, visit_q_named_element, QNamedElement);
only!(OnlyReference, visit_reference, Reference);

fn hits_with<V: DartVisitor + Default>(kind: NodeKind, take: impl Fn(V) -> Vec<NodeKind>) -> usize {
    let mut visitor = V::default();
    node(kind).accept(&mut visitor);
    take(visitor).len()
}

#[test]
fn test_category_override_covers_exactly_its_descendants() {
    for kind in NodeKind::ALL {
        let kind = *kind;
        let expect = |category: Category| usize::from(kind.is_a(category));

        assert_eq!(hits_with(kind, |v: OnlyElement| v.0), 1, "{kind}");
        assert_eq!(
            hits_with(kind, |v: OnlyComposite| v.0),
            expect(Category::PsiCompositeElement),
            "{kind}"
        );
        assert_eq!(hits_with(kind, |v: OnlyClass| v.0), expect(Category::Class), "{kind}");
        assert_eq!(
            hits_with(kind, |v: OnlyComponent| v.0),
            expect(Category::Component),
            "{kind}"
        );
        assert_eq!(
            hits_with(kind, |v: OnlyExecutionScope| v.0),
            expect(Category::ExecutionScope),
            "{kind}"
        );
        assert_eq!(
            hits_with(kind, |v: OnlyExpression| v.0),
            expect(Category::Expression),
            "{kind}"
        );
        assert_eq!(
            hits_with(kind, |v: OnlyNamedElement| v.0),
            expect(Category::NamedElement),
            "{kind}"
        );
        assert_eq!(
            hits_with(kind, |v: OnlyOperator| v.0),
            expect(Category::Operator),
            "{kind}"
        );
        assert_eq!(
            hits_with(kind, |v: OnlyQNamedElement| v.0),
            expect(Category::QNamedElement),
            "{kind}"
        );
        assert_eq!(
            hits_with(kind, |v: OnlyReference| v.0),
            expect(Category::Reference),
            "{kind}"
        );
    }
}

#[test]
fn test_overridden_operation_receives_the_visited_node() {
    let mut visitor = OnlyExpression::default();
    node(NodeKind::TernaryExpression).accept(&mut visitor);
    node(NodeKind::IfStatement).accept(&mut visitor);
    node(NodeKind::CallExpression).accept(&mut visitor);
    assert_eq!(
        visitor.0,
        vec![NodeKind::TernaryExpression, NodeKind::CallExpression]
    );
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_additive_expression_reaches_root_through_expression() {
    let mut recorder = ChainRecorder::default();
    node(NodeKind::AdditiveExpression).accept(&mut recorder);
    assert_eq!(
        recorder.hits,
        vec![
            Category::Expression,
            Category::PsiCompositeElement,
            Category::Element
        ]
    );
}

#[derive(Default)]
struct FunctionsAndComponents {
    functions: usize,
    components: usize,
}

impl DartVisitor for FunctionsAndComponents {
    fn visit_function_declaration(&mut self, _element: psi::FunctionDeclaration<'_>) {
        self.functions += 1;
    }

    fn visit_component(&mut self, _element: psi::Component<'_>) {
        self.components += 1;
    }
}

#[test]
fn test_kind_override_shadows_category_override() {
    let mut visitor = FunctionsAndComponents::default();
    node(NodeKind::FunctionDeclaration).accept(&mut visitor);
    assert_eq!((visitor.functions, visitor.components), (1, 0));

    node(NodeKind::MethodDeclaration).accept(&mut visitor);
    assert_eq!((visitor.functions, visitor.components), (1, 1));
}

/// Operation name, element kind and node address seen by an override.
type Received = (&'static str, NodeKind, *const PsiNode);

fn received<'a>(operation: &'static str, element: impl PsiElement<'a>) -> Received {
    (operation, element.kind(), element.node() as *const PsiNode)
}

/// Overrides a kind operation with a body that calls its category operation.
#[derive(Default)]
struct ExplicitForward(Vec<Received>);

impl DartVisitor for ExplicitForward {
    fn visit_additive_expression(&mut self, element: psi::AdditiveExpression<'_>) {
        self.0.push(received("visit_additive_expression", element));
        self.visit_expression(element.into());
    }

    fn visit_expression(&mut self, element: psi::Expression<'_>) {
        self.0.push(received("visit_expression", element));
    }

    fn visit_psi_composite_element(&mut self, element: psi::PsiCompositeElement<'_>) {
        self.0.push(received("visit_psi_composite_element", element));
    }
}

/// Same recording, but the kind operation keeps its default body.
#[derive(Default)]
struct DefaultForward(Vec<Received>);

impl DartVisitor for DefaultForward {
    fn visit_expression(&mut self, element: psi::Expression<'_>) {
        self.0.push(received("visit_expression", element));
    }

    fn visit_psi_composite_element(&mut self, element: psi::PsiCompositeElement<'_>) {
        self.0.push(received("visit_psi_composite_element", element));
    }
}

#[test]
fn test_explicit_forward_matches_default_chain() {
    let sum = PsiNode::new(NodeKind::AdditiveExpression, Span::new(3, 8));
    let product = PsiNode::new(NodeKind::MultiplicativeExpression, Span::new(9, 12));

    let mut explicit = ExplicitForward::default();
    sum.accept(&mut explicit);
    product.accept(&mut explicit);

    let mut implicit = DefaultForward::default();
    sum.accept(&mut implicit);
    product.accept(&mut implicit);

    // The kind override sees the node first, then hands the same node on.
    assert_eq!(
        explicit.0,
        vec![
            ("visit_additive_expression", NodeKind::AdditiveExpression, &sum as *const PsiNode),
            ("visit_expression", NodeKind::AdditiveExpression, &sum as *const PsiNode),
            ("visit_expression", NodeKind::MultiplicativeExpression, &product as *const PsiNode),
        ]
    );
    let forwarded: Vec<Received> = explicit
        .0
        .into_iter()
        .filter(|(operation, ..)| *operation != "visit_additive_expression")
        .collect();
    assert_eq!(forwarded, implicit.0);
}

// =============================================================================
// ROOT AND DISPATCH ENTRY POINTS
// =============================================================================

#[test]
fn test_each_accept_reaches_the_root_once() {
    for kind in NodeKind::ALL {
        let mut visitor = OnlyElement::default();
        node(*kind).accept(&mut visitor);
        assert_eq!(visitor.0, vec![*kind]);
    }
}

struct Silent;

impl DartVisitor for Silent {}

#[test]
fn test_default_visitor_does_nothing() {
    let tree = common::function_with_sum();
    let mut visitor = Silent;
    tree.accept(&mut visitor);
    tree.walk(&mut visitor);
}

#[test]
fn test_accept_through_category_view_uses_the_kind_operation() {
    let tree = PsiNode::new(NodeKind::FunctionDeclaration, Span::new(0, 10));
    let view = psi::PsiCompositeElement::cast(&tree).unwrap();

    let mut visitor = FunctionsAndComponents::default();
    view.accept(&mut visitor);
    view.as_element().accept(&mut visitor);
    assert_eq!(visitor.functions, 2);
    assert_eq!(visitor.components, 0);
}

#[test]
fn test_visitor_is_object_safe() {
    let mut visitor = OnlyExpression::default();
    {
        let dynamic: &mut dyn DartVisitor = &mut visitor;
        node(NodeKind::LiteralExpression).accept(dynamic);
        node(NodeKind::Block).accept(dynamic);
    }
    assert_eq!(visitor.0, vec![NodeKind::LiteralExpression]);
}

#[test]
fn test_facets_do_not_dispatch() {
    // Expressions with a Reference facet never reach visit_reference.
    let mut visitor = OnlyReference::default();
    node(NodeKind::ReferenceExpression).accept(&mut visitor);
    node(NodeKind::FunctionExpression).accept(&mut visitor);
    node(NodeKind::LibraryId).accept(&mut visitor);
    assert_eq!(visitor.0, vec![NodeKind::LibraryId]);

    let mut visitor = OnlyComponent::default();
    node(NodeKind::FunctionExpression).accept(&mut visitor);
    assert!(visitor.0.is_empty());
}

// =============================================================================
// DESCENT
// =============================================================================

/// Collects identifiers, descending through every composite.
#[derive(Default)]
struct Identifiers(Vec<String>);

impl DartVisitor for Identifiers {
    fn visit_psi_composite_element(&mut self, element: psi::PsiCompositeElement<'_>) {
        element.accept_children(self);
    }

    fn visit_reference_expression(&mut self, element: psi::ReferenceExpression<'_>) {
        self.0.push(element.text().unwrap_or_default().to_string());
    }

    fn visit_id(&mut self, element: psi::Id<'_>) {
        self.0.push(element.text().unwrap_or_default().to_string());
    }
}

#[test]
fn test_descent_is_up_to_the_operation() {
    let tree = common::function_with_sum();

    let mut shallow = OnlyComponent::default();
    tree.accept(&mut shallow);
    assert_eq!(shallow.0, vec![NodeKind::FunctionDeclarationWithBodyOrNative]);

    let mut deep = Identifiers::default();
    tree.accept(&mut deep);
    assert_eq!(deep.0, vec!["add", "a", "b"]);
}
