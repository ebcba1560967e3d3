//! # Dart Grammar Table
//!
//! Classification of every Dart PSI node kind. Each row names a kind, its
//! direct dispatch category, optional facets, its visitor operation and its
//! grammar name. All kind and category types are generated from this table;
//! see [`crate::macros`] for the row syntax.
//!
//! Facets record classifications that must stay queryable without becoming
//! a second dispatch parent: most expressions also behave as references, and
//! a function expression also declares a component.

use crate::macros::define_psi;

define_psi! {
    root Element => visit_element;

    top {
        PsiCompositeElement => visit_psi_composite_element;
    }

    categories {
        Class: PsiCompositeElement => visit_class;
        Component: PsiCompositeElement => visit_component;
        ExecutionScope: PsiCompositeElement => visit_execution_scope;
        Expression: PsiCompositeElement => visit_expression;
        NamedElement: PsiCompositeElement => visit_named_element;
        Operator: PsiCompositeElement => visit_operator;
        QNamedElement: PsiCompositeElement => visit_q_named_element;
        Reference: PsiCompositeElement => visit_reference;
    }

    kinds {
        AbstractOperatorDeclaration: Operator => visit_abstract_operator_declaration, "abstract_operator_declaration";
        AdditiveExpression: Expression [Reference] => visit_additive_expression, "additive_expression";
        AdditiveOperator: PsiCompositeElement => visit_additive_operator, "additive_operator";
        ArgumentList: PsiCompositeElement => visit_argument_list, "argument_list";
        Arguments: PsiCompositeElement => visit_arguments, "arguments";
        ArrayAccessExpression: Expression [Reference] => visit_array_access_expression, "array_access_expression";
        AsExpression: Expression [Reference] => visit_as_expression, "as_expression";
        AssertStatement: PsiCompositeElement => visit_assert_statement, "assert_statement";
        AssignExpression: Expression => visit_assign_expression, "assign_expression";
        AssignmentOperator: PsiCompositeElement => visit_assignment_operator, "assignment_operator";
        BitwiseExpression: Expression [Reference] => visit_bitwise_expression, "bitwise_expression";
        BitwiseOperator: PsiCompositeElement => visit_bitwise_operator, "bitwise_operator";
        Block: PsiCompositeElement => visit_block, "block";
        BreakStatement: PsiCompositeElement => visit_break_statement, "break_statement";
        CallExpression: Expression [Reference] => visit_call_expression, "call_expression";
        CascadeReferenceExpression: Expression [Reference] => visit_cascade_reference_expression, "cascade_reference_expression";
        CatchPart: PsiCompositeElement => visit_catch_part, "catch_part";
        ClassBody: ExecutionScope => visit_class_body, "class_body";
        ClassDefinition: Class => visit_class_definition, "class_definition";
        CompareExpression: Expression [Reference] => visit_compare_expression, "compare_expression";
        ComponentName: NamedElement => visit_component_name, "component_name";
        CompoundLiteralExpression: Expression [Reference] => visit_compound_literal_expression, "compound_literal_expression";
        ConstConstructorExpression: Expression [Reference] => visit_const_constructor_expression, "const_constructor_expression";
        ContinueStatement: PsiCompositeElement => visit_continue_statement, "continue_statement";
        DefaultCase: PsiCompositeElement => visit_default_case, "default_case";
        DefaultFactory: PsiCompositeElement => visit_default_factory, "default_factory";
        DefaultFormalNamedParameter: PsiCompositeElement => visit_default_formal_named_parameter, "default_formal_named_parameter";
        DoWhileStatement: PsiCompositeElement => visit_do_while_statement, "do_while_statement";
        EqualityOperator: PsiCompositeElement => visit_equality_operator, "equality_operator";
        ExportStatement: PsiCompositeElement => visit_export_statement, "export_statement";
        ExpressionList: PsiCompositeElement => visit_expression_list, "expression_list";
        FactoryConstructorDeclaration: Component => visit_factory_constructor_declaration, "factory_constructor_declaration";
        FactorySpecification: PsiCompositeElement => visit_factory_specification, "factory_specification";
        FieldFormalParameter: PsiCompositeElement => visit_field_formal_parameter, "field_formal_parameter";
        FieldInitializer: PsiCompositeElement => visit_field_initializer, "field_initializer";
        FinalVarOrType: PsiCompositeElement => visit_final_var_or_type, "final_var_or_type";
        FinallyPart: PsiCompositeElement => visit_finally_part, "finally_part";
        ForInPart: PsiCompositeElement => visit_for_in_part, "for_in_part";
        ForLoopParts: PsiCompositeElement => visit_for_loop_parts, "for_loop_parts";
        ForLoopPartsInBraces: PsiCompositeElement => visit_for_loop_parts_in_braces, "for_loop_parts_in_braces";
        ForStatement: PsiCompositeElement => visit_for_statement, "for_statement";
        FormalParameterList: PsiCompositeElement => visit_formal_parameter_list, "formal_parameter_list";
        FunctionBody: PsiCompositeElement => visit_function_body, "function_body";
        FunctionDeclaration: Component => visit_function_declaration, "function_declaration";
        FunctionDeclarationWithBody: Component => visit_function_declaration_with_body, "function_declaration_with_body";
        FunctionDeclarationWithBodyOrNative: Component => visit_function_declaration_with_body_or_native, "function_declaration_with_body_or_native";
        FunctionExpression: Expression [Component] => visit_function_expression, "function_expression";
        FunctionExpressionBody: PsiCompositeElement => visit_function_expression_body, "function_expression_body";
        FunctionTypeAlias: Component => visit_function_type_alias, "function_type_alias";
        GetterDeclaration: Component => visit_getter_declaration, "getter_declaration";
        HideCombinator: PsiCompositeElement => visit_hide_combinator, "hide_combinator";
        Id: PsiCompositeElement => visit_id, "id";
        IfStatement: PsiCompositeElement => visit_if_statement, "if_statement";
        ImportStatement: PsiCompositeElement => visit_import_statement, "import_statement";
        Initializers: PsiCompositeElement => visit_initializers, "initializers";
        InterfaceBody: ExecutionScope => visit_interface_body, "interface_body";
        InterfaceDefinition: Class => visit_interface_definition, "interface_definition";
        Interfaces: PsiCompositeElement => visit_interfaces, "interfaces";
        IsExpression: Expression => visit_is_expression, "is_expression";
        IteratorExpression: Expression => visit_iterator_expression, "iterator_expression";
        Label: Component => visit_label, "label";
        LibraryComponentReferenceExpression: Expression [Reference] => visit_library_component_reference_expression, "library_component_reference_expression";
        LibraryId: Reference => visit_library_id, "library_id";
        LibraryReferenceList: PsiCompositeElement => visit_library_reference_list, "library_reference_list";
        LibraryStatement: PsiCompositeElement => visit_library_statement, "library_statement";
        ListLiteralExpression: Expression [Reference] => visit_list_literal_expression, "list_literal_expression";
        LiteralExpression: Expression [Reference] => visit_literal_expression, "literal_expression";
        LogicAndExpression: Expression [Reference] => visit_logic_and_expression, "logic_and_expression";
        LogicOrExpression: Expression [Reference] => visit_logic_or_expression, "logic_or_expression";
        LongTemplateEntry: PsiCompositeElement => visit_long_template_entry, "long_template_entry";
        MapLiteralEntry: PsiCompositeElement => visit_map_literal_entry, "map_literal_entry";
        MapLiteralExpression: Expression [Reference] => visit_map_literal_expression, "map_literal_expression";
        Metadata: PsiCompositeElement => visit_metadata, "metadata";
        MethodDeclaration: Component => visit_method_declaration, "method_declaration";
        MethodPrototypeDeclaration: Component => visit_method_prototype_declaration, "method_prototype_declaration";
        Mixins: PsiCompositeElement => visit_mixins, "mixins";
        MultiplicativeExpression: Expression [Reference] => visit_multiplicative_expression, "multiplicative_expression";
        MultiplicativeOperator: PsiCompositeElement => visit_multiplicative_operator, "multiplicative_operator";
        NamedArgument: PsiCompositeElement => visit_named_argument, "named_argument";
        NamedConstructorDeclaration: Component => visit_named_constructor_declaration, "named_constructor_declaration";
        NamedFormalParameters: PsiCompositeElement => visit_named_formal_parameters, "named_formal_parameters";
        NativeStatement: PsiCompositeElement => visit_native_statement, "native_statement";
        NewExpression: Expression [Reference] => visit_new_expression, "new_expression";
        NormalFormalParameter: PsiCompositeElement => visit_normal_formal_parameter, "normal_formal_parameter";
        OnPart: PsiCompositeElement => visit_on_part, "on_part";
        OperatorDeclaration: Operator => visit_operator_declaration, "operator_declaration";
        OperatorPrototype: Operator => visit_operator_prototype, "operator_prototype";
        ParenthesizedExpression: Expression [Reference] => visit_parenthesized_expression, "parenthesized_expression";
        PartOfStatement: PsiCompositeElement => visit_part_of_statement, "part_of_statement";
        PathOrLibraryReference: Reference => visit_path_or_library_reference, "path_or_library_reference";
        PrefixExpression: Expression [Reference] => visit_prefix_expression, "prefix_expression";
        PrefixOperator: PsiCompositeElement => visit_prefix_operator, "prefix_operator";
        QualifiedComponentName: QNamedElement => visit_qualified_component_name, "qualified_component_name";
        Redirection: PsiCompositeElement => visit_redirection, "redirection";
        ReferenceExpression: Expression [Reference] => visit_reference_expression, "reference_expression";
        RelationalOperator: PsiCompositeElement => visit_relational_operator, "relational_operator";
        ResourceStatement: PsiCompositeElement => visit_resource_statement, "resource_statement";
        ReturnStatement: PsiCompositeElement => visit_return_statement, "return_statement";
        ReturnType: PsiCompositeElement => visit_return_type, "return_type";
        SetterDeclaration: Component => visit_setter_declaration, "setter_declaration";
        ShiftExpression: Expression [Reference] => visit_shift_expression, "shift_expression";
        ShiftOperator: PsiCompositeElement => visit_shift_operator, "shift_operator";
        ShiftRightOperator: PsiCompositeElement => visit_shift_right_operator, "shift_right_operator";
        ShortTemplateEntry: PsiCompositeElement => visit_short_template_entry, "short_template_entry";
        ShowCombinator: PsiCompositeElement => visit_show_combinator, "show_combinator";
        SourceStatement: PsiCompositeElement => visit_source_statement, "source_statement";
        Statements: ExecutionScope => visit_statements, "statements";
        StringLiteralExpression: Expression [Reference] => visit_string_literal_expression, "string_literal_expression";
        SuffixExpression: Expression [Reference] => visit_suffix_expression, "suffix_expression";
        SuperCallOrFieldInitializer: PsiCompositeElement => visit_super_call_or_field_initializer, "super_call_or_field_initializer";
        SuperExpression: Expression [Reference] => visit_super_expression, "super_expression";
        Superclass: PsiCompositeElement => visit_superclass, "superclass";
        Superinterfaces: PsiCompositeElement => visit_superinterfaces, "superinterfaces";
        SwitchCase: PsiCompositeElement => visit_switch_case, "switch_case";
        SwitchStatement: PsiCompositeElement => visit_switch_statement, "switch_statement";
        TernaryExpression: Expression => visit_ternary_expression, "ternary_expression";
        ThisExpression: Expression [Reference] => visit_this_expression, "this_expression";
        ThrowStatement: PsiCompositeElement => visit_throw_statement, "throw_statement";
        TryStatement: PsiCompositeElement => visit_try_statement, "try_statement";
        Type: PsiCompositeElement => visit_type, "type";
        TypeArguments: PsiCompositeElement => visit_type_arguments, "type_arguments";
        TypeList: PsiCompositeElement => visit_type_list, "type_list";
        TypeParameter: Component => visit_type_parameter, "type_parameter";
        TypeParameters: PsiCompositeElement => visit_type_parameters, "type_parameters";
        UserDefinableOperator: PsiCompositeElement => visit_user_definable_operator, "user_definable_operator";
        ValueExpression: Expression => visit_value_expression, "value_expression";
        VarAccessDeclaration: Component => visit_var_access_declaration, "var_access_declaration";
        VarDeclaration: PsiCompositeElement => visit_var_declaration, "var_declaration";
        VarDeclarationList: PsiCompositeElement => visit_var_declaration_list, "var_declaration_list";
        VarDeclarationListPart: Component => visit_var_declaration_list_part, "var_declaration_list_part";
        VarInit: PsiCompositeElement => visit_var_init, "var_init";
        WhileStatement: PsiCompositeElement => visit_while_statement, "while_statement";
    }
}
