//! # Native Dart Parser
//!
//! Parses Dart source with tree-sitter and converts the syntax tree into
//! PSI nodes.
//!
//! tree-sitter node types are mapped to PSI kinds through [`KIND_MAP`].
//! Named nodes without a mapping are transparent: their children take their
//! place. Anonymous tokens (punctuation, keywords) are dropped. An
//! `identifier` in the `name` field of its parent becomes a
//! `component_name` wrapping an `id`; any other identifier becomes a
//! `reference_expression` wrapping an `id`.
//!
//! The converted tree keeps the tree-sitter shape, so a function signature
//! and its body may be siblings rather than parent and child.

use config::constants::ImportLimits;
use dart_psi::{NodeKind, PsiFile, PsiNode, Span, SyntaxError};
use stacker::maybe_grow;
use tree_sitter::{Node, Parser, Tree};

use crate::error::TreeError;

// =============================================================================
// KIND MAP
// =============================================================================

/// tree-sitter node types with a PSI counterpart.
pub const KIND_MAP: &[(&str, NodeKind)] = &[
    // Directives
    ("library_name", NodeKind::LibraryStatement),
    ("library_import", NodeKind::ImportStatement),
    ("library_export", NodeKind::ExportStatement),
    ("part_directive", NodeKind::SourceStatement),
    ("part_of_directive", NodeKind::PartOfStatement),
    ("uri", NodeKind::PathOrLibraryReference),
    ("configurable_uri", NodeKind::PathOrLibraryReference),
    ("dotted_identifier_list", NodeKind::LibraryId),
    ("annotation", NodeKind::Metadata),
    // Classes
    ("class_definition", NodeKind::ClassDefinition),
    ("class_body", NodeKind::ClassBody),
    ("superclass", NodeKind::Superclass),
    ("interfaces", NodeKind::Interfaces),
    ("mixins", NodeKind::Mixins),
    ("type_alias", NodeKind::FunctionTypeAlias),
    // Members and functions
    ("function_signature", NodeKind::FunctionDeclarationWithBodyOrNative),
    ("method_signature", NodeKind::MethodDeclaration),
    ("getter_signature", NodeKind::GetterDeclaration),
    ("setter_signature", NodeKind::SetterDeclaration),
    ("operator_signature", NodeKind::OperatorDeclaration),
    ("constructor_signature", NodeKind::NamedConstructorDeclaration),
    ("constant_constructor_signature", NodeKind::NamedConstructorDeclaration),
    ("factory_constructor_signature", NodeKind::FactoryConstructorDeclaration),
    (
        "redirecting_factory_constructor_signature",
        NodeKind::FactoryConstructorDeclaration,
    ),
    ("function_body", NodeKind::FunctionBody),
    ("function_expression_body", NodeKind::FunctionExpressionBody),
    ("formal_parameter_list", NodeKind::FormalParameterList),
    ("formal_parameter", NodeKind::NormalFormalParameter),
    ("optional_formal_parameters", NodeKind::NamedFormalParameters),
    ("initializers", NodeKind::Initializers),
    ("field_initializer", NodeKind::FieldInitializer),
    // Types
    ("type_identifier", NodeKind::Type),
    ("void_type", NodeKind::Type),
    ("function_type", NodeKind::Type),
    ("type_arguments", NodeKind::TypeArguments),
    ("type_parameters", NodeKind::TypeParameters),
    ("type_parameter", NodeKind::TypeParameter),
    // Variables
    ("local_variable_declaration", NodeKind::VarDeclarationList),
    ("initialized_variable_definition", NodeKind::VarDeclarationList),
    ("initialized_identifier", NodeKind::VarDeclarationListPart),
    ("static_final_declaration", NodeKind::VarDeclarationListPart),
    // Statements
    ("block", NodeKind::Block),
    ("if_statement", NodeKind::IfStatement),
    ("for_statement", NodeKind::ForStatement),
    ("for_loop_parts", NodeKind::ForLoopParts),
    ("while_statement", NodeKind::WhileStatement),
    ("do_statement", NodeKind::DoWhileStatement),
    ("switch_statement", NodeKind::SwitchStatement),
    ("switch_statement_case", NodeKind::SwitchCase),
    ("switch_statement_default", NodeKind::DefaultCase),
    ("try_statement", NodeKind::TryStatement),
    ("catch_clause", NodeKind::CatchPart),
    ("finally_clause", NodeKind::FinallyPart),
    ("return_statement", NodeKind::ReturnStatement),
    ("break_statement", NodeKind::BreakStatement),
    ("continue_statement", NodeKind::ContinueStatement),
    ("assert_statement", NodeKind::AssertStatement),
    ("throw_expression", NodeKind::ThrowStatement),
    ("label", NodeKind::Label),
    // Expressions
    ("assignment_expression", NodeKind::AssignExpression),
    ("conditional_expression", NodeKind::TernaryExpression),
    ("logical_or_expression", NodeKind::LogicOrExpression),
    ("logical_and_expression", NodeKind::LogicAndExpression),
    ("equality_expression", NodeKind::CompareExpression),
    ("relational_expression", NodeKind::CompareExpression),
    ("bitwise_or_expression", NodeKind::BitwiseExpression),
    ("bitwise_xor_expression", NodeKind::BitwiseExpression),
    ("bitwise_and_expression", NodeKind::BitwiseExpression),
    ("shift_expression", NodeKind::ShiftExpression),
    ("additive_expression", NodeKind::AdditiveExpression),
    ("multiplicative_expression", NodeKind::MultiplicativeExpression),
    ("unary_expression", NodeKind::PrefixExpression),
    ("postfix_expression", NodeKind::SuffixExpression),
    ("parenthesized_expression", NodeKind::ParenthesizedExpression),
    ("new_expression", NodeKind::NewExpression),
    ("const_object_expression", NodeKind::ConstConstructorExpression),
    ("lambda_expression", NodeKind::FunctionExpression),
    ("type_cast_expression", NodeKind::AsExpression),
    ("type_test_expression", NodeKind::IsExpression),
    ("cascade_section", NodeKind::CascadeReferenceExpression),
    ("this", NodeKind::ThisExpression),
    ("super", NodeKind::SuperExpression),
    ("arguments", NodeKind::Arguments),
    ("named_argument", NodeKind::NamedArgument),
    // Literals
    ("list_literal", NodeKind::ListLiteralExpression),
    ("set_or_map_literal", NodeKind::MapLiteralExpression),
    ("pair", NodeKind::MapLiteralEntry),
    ("string_literal", NodeKind::StringLiteralExpression),
    ("template_substitution", NodeKind::LongTemplateEntry),
    ("decimal_integer_literal", NodeKind::LiteralExpression),
    ("hex_integer_literal", NodeKind::LiteralExpression),
    ("decimal_floating_point_literal", NodeKind::LiteralExpression),
    ("true", NodeKind::LiteralExpression),
    ("false", NodeKind::LiteralExpression),
    ("null_literal", NodeKind::LiteralExpression),
    // Operators
    ("additive_operator", NodeKind::AdditiveOperator),
    ("multiplicative_operator", NodeKind::MultiplicativeOperator),
    ("relational_operator", NodeKind::RelationalOperator),
    ("equality_operator", NodeKind::EqualityOperator),
    ("shift_operator", NodeKind::ShiftOperator),
    ("prefix_operator", NodeKind::PrefixOperator),
];

/// PSI kind for a tree-sitter node type.
pub fn map_kind(ts_type: &str) -> Option<NodeKind> {
    KIND_MAP
        .iter()
        .find(|(name, _)| *name == ts_type)
        .map(|(_, kind)| *kind)
}

const IDENTIFIER: &str = "identifier";
const NAME_FIELD: &str = "name";

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parses Dart source into a tree-sitter tree.
pub fn parse_tree(source: &str) -> Result<Tree, TreeError> {
    let mut parser = Parser::new();
    parser.set_language(&harper_tree_sitter_dart::LANGUAGE.into())?;
    parser.parse(source, None).ok_or(TreeError::ParseCancelled)
}

/// Parses Dart source into a PSI file.
///
/// # Example
///
/// ```rust
/// use dart_psi::NodeKind;
///
/// let file = dart_syntax::parse_source("class Point {}").unwrap();
/// assert!(file.is_ok());
/// assert!(file.descendants().any(|n| n.kind == NodeKind::ClassDefinition));
/// ```
pub fn parse_source(source: &str) -> Result<PsiFile, TreeError> {
    parse_source_with(source, ImportLimits::default())
}

pub fn parse_source_with(source: &str, limits: ImportLimits) -> Result<PsiFile, TreeError> {
    let tree = parse_tree(source)?;
    let mut converter = Converter {
        source,
        limits,
        errors: Vec::new(),
    };

    let mut roots = Vec::new();
    converter.convert_children(tree.root_node(), 0, &mut roots)?;

    tracing::debug!(
        bytes = source.len(),
        roots = roots.len(),
        errors = converter.errors.len(),
        "converted tree-sitter tree"
    );

    let mut file = PsiFile::new(roots, converter.errors);
    file.source_len = source.len();
    Ok(file)
}

// =============================================================================
// CONVERTER
// =============================================================================

struct Converter<'s> {
    source: &'s str,
    limits: ImportLimits,
    errors: Vec<SyntaxError>,
}

impl Converter<'_> {
    /// Converts every child of `node`, `depth` being the level of `node`.
    fn convert_children(
        &mut self,
        node: Node<'_>,
        depth: usize,
        out: &mut Vec<PsiNode>,
    ) -> Result<(), TreeError> {
        let mut cursor = node.walk();
        if !cursor.goto_first_child() {
            return Ok(());
        }
        loop {
            let child = cursor.node();
            let field = cursor.field_name();
            self.convert(child, field, depth + 1, out)?;
            if !cursor.goto_next_sibling() {
                return Ok(());
            }
        }
    }

    fn convert(
        &mut self,
        node: Node<'_>,
        field: Option<&str>,
        depth: usize,
        out: &mut Vec<PsiNode>,
    ) -> Result<(), TreeError> {
        let ImportLimits {
            stack_red_zone,
            stack_size,
            max_tree_depth,
        } = self.limits;
        if depth > max_tree_depth {
            return Err(TreeError::TooDeep {
                limit: max_tree_depth,
            });
        }
        maybe_grow(stack_red_zone, stack_size, || {
            self.convert_inner(node, field, depth, out)
        })
    }

    fn convert_inner(
        &mut self,
        node: Node<'_>,
        field: Option<&str>,
        depth: usize,
        out: &mut Vec<PsiNode>,
    ) -> Result<(), TreeError> {
        let span = Span::new(node.start_byte(), node.end_byte());

        if node.is_missing() {
            self.errors.push(SyntaxError::missing(node.kind(), span));
            return Ok(());
        }
        if node.is_error() {
            let text = self.text(node).map(str::to_string);
            self.errors.push(SyntaxError::unexpected(text, span));
            return self.convert_children(node, depth, out);
        }
        if !node.is_named() || node.is_extra() {
            return Ok(());
        }

        if node.kind() == IDENTIFIER {
            let id = PsiNode::with_text(NodeKind::Id, span, self.text(node).unwrap_or_default());
            let wrapper = if field == Some(NAME_FIELD) {
                NodeKind::ComponentName
            } else {
                NodeKind::ReferenceExpression
            };
            out.push(PsiNode::with_children(wrapper, span, vec![id]));
            return Ok(());
        }

        let Some(kind) = map_kind(node.kind()) else {
            tracing::trace!(ts_type = node.kind(), "hoisting unmapped node");
            return self.convert_children(node, depth, out);
        };

        let mut converted = PsiNode::new(kind, span);
        self.convert_children(node, depth, &mut converted.children)?;
        if node.named_child_count() == 0 {
            converted.text = self.text(node).map(str::to_string);
        }
        out.push(converted);
        Ok(())
    }

    fn text(&self, node: Node<'_>) -> Option<&str> {
        self.source.get(node.byte_range())
    }
}
