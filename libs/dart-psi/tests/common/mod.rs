//! Shared helpers for the dart-psi integration tests.

#![allow(dead_code)]

use dart_psi::{NodeKind, PsiNode, Span};

/// Installs a tracing subscriber for the test binary.
///
/// Honors `RUST_LOG`; repeated calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// `a + b` inside a return statement inside a function body.
pub fn function_with_sum() -> PsiNode {
    let sum = PsiNode::with_children(
        NodeKind::AdditiveExpression,
        Span::new(20, 25),
        vec![
            PsiNode::with_text(NodeKind::ReferenceExpression, Span::new(20, 21), "a"),
            PsiNode::with_text(NodeKind::AdditiveOperator, Span::new(22, 23), "+"),
            PsiNode::with_text(NodeKind::ReferenceExpression, Span::new(24, 25), "b"),
        ],
    );
    let ret = PsiNode::with_children(NodeKind::ReturnStatement, Span::new(13, 26), vec![sum]);
    let body = PsiNode::with_children(NodeKind::FunctionBody, Span::new(11, 28), vec![ret]);
    let name = PsiNode::with_children(
        NodeKind::ComponentName,
        Span::new(4, 7),
        vec![PsiNode::with_text(NodeKind::Id, Span::new(4, 7), "add")],
    );
    PsiNode::with_children(
        NodeKind::FunctionDeclarationWithBodyOrNative,
        Span::new(0, 28),
        vec![name, body],
    )
}
