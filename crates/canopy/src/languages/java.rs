//! Java language adapter.

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
            "enum_declaration",
            NodeConfig::construct(
                s::DEFINITION_CLASS | class_refinement::ENUM,
                N::FindIdentifier,
                V::ClassWithMethods,
            ),
        ),
        (
            "record_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "annotation_type_declaration",
            NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::None),
        ),
        (
            "field_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "local_variable_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "variable_declarator",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::None),
        ),
        // Types
        ("type_identifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("integral_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("floating_point_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("boolean_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("void_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("generic_type", NodeConfig::typed(s::TYPE_GENERIC)),
        ("array_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("superclass", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("super_interfaces", NodeConfig::typed(s::TYPE_REFERENCE)),
        // Names and access
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("scoped_identifier", NodeConfig::text(s::NAME_QUALIFIED)),
        (
            "field_access",
            NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
        ),
        ("array_access", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        ("this", NodeConfig::text(s::NAME_SCOPED)),
        ("super", NodeConfig::text(s::NAME_SCOPED)),
        // Literals
        ("decimal_integer_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("hex_integer_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        (
            "decimal_floating_point_literal",
            NodeConfig::typed(s::LITERAL_NUMBER),
        ),
        ("string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("character_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("true", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("false", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("null_literal", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("array_initializer", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        // Calls and expressions
        (
            "method_invocation",
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
        ("unary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("ternary_expression", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        ("cast_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        (
            "assignment_expression",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Control flow
        ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("switch_expression", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("enhanced_for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("do_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("synchronized_statement", NodeConfig::typed(s::FLOW_SYNC)),
        // Error handling
        ("try_statement", NodeConfig::typed(s::ERROR_TRY)),
        ("try_with_resources_statement", NodeConfig::typed(s::ERROR_TRY)),
        ("catch_clause", NodeConfig::typed(s::ERROR_CATCH)),
        ("throw_statement", NodeConfig::typed(s::ERROR_THROW)),
        ("finally_clause", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("program", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("class_body", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("formal_parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("argument_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
        ("line_comment", NodeConfig::typed(s::METADATA_COMMENT)),
        ("block_comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "marker_annotation",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::FindIdentifier, V::None),
        ),
        (
            "annotation",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::FindIdentifier, V::None),
        ),
        (
            "package_declaration",
            NodeConfig::with_strategies(s::DEFINITION_MODULE, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "import_declaration",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
    ])
});

/// Java adapter.
pub struct JavaAdapter;

impl LanguageAdapter for JavaAdapter {
    fn language_name(&self) -> &'static str {
        "java"
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
