//! Parsing Dart source through tree-sitter.

#![cfg(feature = "native-parser")]

mod common;

use config::constants::ImportLimits;
use dart_psi::{psi, Category, DartVisitor, NodeKind, PsiElement};
use dart_syntax::{parse_file_json, parse_source, parse_source_with, to_file_json, TreeError};
use indoc::indoc;

const SHAPES: &str = indoc! {r#"
    import 'dart:math';

    class Point {
      final int x;
      final int y;

      Point(this.x, this.y);

      int sum() {
        return x + y;
      }
    }

    double area(double r) {
      if (r < 0) {
        return 0;
      }
      return pi * r * r;
    }
"#};

#[derive(Default)]
struct Kinds {
    classes: usize,
    components: usize,
    statements: Vec<NodeKind>,
}

impl DartVisitor for Kinds {
    fn visit_class(&mut self, _element: psi::Class<'_>) {
        self.classes += 1;
    }

    fn visit_component(&mut self, _element: psi::Component<'_>) {
        self.components += 1;
    }

    fn visit_return_statement(&mut self, element: psi::ReturnStatement<'_>) {
        self.statements.push(element.kind());
    }

    fn visit_if_statement(&mut self, element: psi::IfStatement<'_>) {
        self.statements.push(element.kind());
    }
}

#[test]
fn test_parse_and_walk() {
    common::init_tracing();
    let file = parse_source(SHAPES).unwrap();
    assert!(file.is_ok(), "unexpected errors: {:?}", file.errors);
    assert_eq!(file.source_len, SHAPES.len());

    let mut kinds = Kinds::default();
    file.walk(&mut kinds);
    assert_eq!(kinds.classes, 1);
    assert!(kinds.components >= 2, "{}", kinds.components);
    assert_eq!(
        kinds.statements,
        vec![
            NodeKind::ReturnStatement,
            NodeKind::IfStatement,
            NodeKind::ReturnStatement,
            NodeKind::ReturnStatement,
        ]
    );
}

#[test]
fn test_identifiers_carry_text() {
    let file = parse_source(SHAPES).unwrap();
    let ids: Vec<_> = file
        .descendants()
        .filter(|n| n.kind == NodeKind::Id)
        .map(|n| n.text_or_empty())
        .collect();
    assert!(ids.contains(&"Point"), "{ids:?}");
    assert!(ids.contains(&"area"), "{ids:?}");

    // Every id sits under a name or a reference wrapper.
    for node in file.descendants() {
        for child in &node.children {
            if child.kind == NodeKind::Id {
                assert!(
                    matches!(node.kind, NodeKind::ComponentName | NodeKind::ReferenceExpression),
                    "id under {}",
                    node.kind
                );
            }
        }
    }
}

#[test]
fn test_spans_nest() {
    let file = parse_source(SHAPES).unwrap();
    for node in file.descendants() {
        assert!(node.span.end() <= SHAPES.len());
        for child in &node.children {
            assert!(node.span.encloses(&child.span), "{} in {}", child.kind, node.kind);
        }
    }
}

#[test]
fn test_class_lookup() {
    let file = parse_source(SHAPES).unwrap();
    let class = file
        .descendants()
        .find_map(psi::Class::cast)
        .unwrap();
    assert_eq!(class.kind(), NodeKind::ClassDefinition);
    let body = class.body().unwrap();
    assert!(body.kind().is_a(Category::ExecutionScope));
}

#[test]
fn test_syntax_errors_are_reported() {
    let file = parse_source("void main() { var x = ; }").unwrap();
    assert!(!file.is_ok());
    for error in &file.errors {
        assert!(error.span.end() <= 25);
    }
}

#[test]
fn test_depth_limit() {
    let source = format!("var x = {}1{};", "(".repeat(40), ")".repeat(40));
    let limits = ImportLimits::default().with_max_tree_depth(10).unwrap();
    assert!(matches!(
        parse_source_with(&source, limits),
        Err(TreeError::TooDeep { limit: 10 })
    ));
    assert!(parse_source(&source).unwrap().is_ok());
}

#[test]
fn test_deeply_nested_source_survives_json() {
    let source = format!("var x = {}1{};", "(".repeat(1500), ")".repeat(1500));
    let file = parse_source(&source).unwrap();
    assert!(file.is_ok());

    let json = to_file_json(&file).unwrap();
    let back = parse_file_json(&json).unwrap();
    assert_eq!(back.source_len, file.source_len);
    assert_eq!(back.descendants().count(), file.descendants().count());
    assert!(back
        .descendants()
        .filter(|n| n.kind == NodeKind::ParenthesizedExpression)
        .count()
        >= 1500);
}
