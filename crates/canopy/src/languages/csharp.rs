//! C# language adapter.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, class_refinement, function_refinement};

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "method_declaration",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "local_function_statement",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "constructor_declaration",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::CONSTRUCTOR,
                N::FindIdentifier,
                V::FunctionWithParams,
            ),
        ),
        (
            "lambda_expression",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::None,
                V::ArrowFunction,
            ),
        ),
        (
            "class_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "interface_declaration",
            NodeConfig::construct(
                s::DEFINITION_CLASS | class_refinement::ABSTRACT,
                N::FindIdentifier,
                V::ClassWithInheritance,
            ),
        ),
        (
            "struct_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "record_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "enum_declaration",
            NodeConfig::construct(
                s::DEFINITION_CLASS | class_refinement::ENUM,
                N::FindIdentifier,
                V::ClassWithMethods,
            ),
        ),
        (
            "property_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "field_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "variable_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "variable_declarator",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::None),
        ),
        // Types
        ("predefined_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("generic_name", NodeConfig::typed(s::TYPE_GENERIC)),
        ("nullable_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("array_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("base_list", NodeConfig::typed(s::TYPE_REFERENCE)),
        // Names and access
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("qualified_name", NodeConfig::text(s::NAME_QUALIFIED)),
        (
            "member_access_expression",
            NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
        ),
        ("element_access_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        ("this_expression", NodeConfig::text(s::NAME_SCOPED)),
        ("base_expression", NodeConfig::text(s::NAME_SCOPED)),
        // Literals
        ("integer_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("real_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("verbatim_string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("interpolated_string_expression", NodeConfig::typed(s::LITERAL_STRING)),
        ("character_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("boolean_literal", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("null_literal", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("initializer_expression", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        // Calls and expressions
        (
            "invocation_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::METHOD,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        (
            "object_creation_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::CONSTRUCTOR,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        ("binary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("prefix_unary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("postfix_unary_expression", NodeConfig::typed(s::EXECUTION_MUTATION)),
        ("conditional_expression", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        (
            "assignment_expression",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Control flow
        ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("switch_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("switch_expression", NodeConfig::typed(s::PATTERN_MATCH)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("foreach_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("do_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("await_expression", NodeConfig::typed(s::FLOW_SYNC)),
        ("yield_statement", NodeConfig::typed(s::FLOW_SYNC)),
        ("lock_statement", NodeConfig::typed(s::FLOW_SYNC)),
        // Error handling
        ("try_statement", NodeConfig::typed(s::ERROR_TRY)),
        ("catch_clause", NodeConfig::typed(s::ERROR_CATCH)),
        ("throw_statement", NodeConfig::typed(s::ERROR_THROW)),
        ("finally_clause", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("compilation_unit", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("declaration_list", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("parameter_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("argument_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "attribute_list",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::None, V::None),
        ),
        ("modifier", NodeConfig::text(s::NAME_KEYWORD)),
        (
            "namespace_declaration",
            NodeConfig::construct(s::DEFINITION_MODULE, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "using_directive",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
    ])
});

/// C# adapter.
pub struct CSharpAdapter;

impl LanguageAdapter for CSharpAdapter {
    fn language_name(&self) -> &'static str {
        "csharp"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["c#", "cs"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_c_sharp::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
