//! PHP language adapter.

use std::sync::LazyLock;

use crate::native::markers::{DEFAULT_MARKERS, LanguageMarkers};
use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, class_refinement, function_refinement};

use super::LanguageAdapter;

static MARKERS: LanguageMarkers = LanguageMarkers {
    modifier_kinds: &[
        "visibility_modifier",
        "static_modifier",
        "abstract_modifier",
        "final_modifier",
        "readonly_modifier",
        "reference_modifier",
    ],
    base_clause_kinds: &["base_clause", "class_interface_clause"],
    identifier_kinds: &["name", "variable_name", "identifier"],
    ..DEFAULT_MARKERS
};

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "function_definition",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "method_declaration",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "anonymous_function",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::None,
                V::FunctionWithParams,
            ),
        ),
        (
            "arrow_function",
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
            "trait_declaration",
            NodeConfig::construct(
                s::DEFINITION_CLASS | class_refinement::ABSTRACT,
                N::FindIdentifier,
                V::ClassWithMethods,
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
            "property_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "const_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "assignment_expression",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindAssignmentTarget, V::None),
        ),
        // Names
        ("name", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("variable_name", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("qualified_name", NodeConfig::text(s::NAME_QUALIFIED)),
        (
            "member_access_expression",
            NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
        ),
        ("primitive_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("named_type", NodeConfig::text(s::TYPE_COMPOSITE)),
        ("optional_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("union_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        // Literals
        ("integer", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("float", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string", NodeConfig::typed(s::LITERAL_STRING)),
        ("encapsed_string", NodeConfig::typed(s::LITERAL_STRING)),
        ("heredoc", NodeConfig::typed(s::LITERAL_STRING)),
        ("boolean", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("null", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("array_creation_expression", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        // Calls and expressions
        (
            "function_call_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::FUNCTION,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        (
            "member_call_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::METHOD,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        (
            "scoped_call_expression",
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
        ("unary_op_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("conditional_expression", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        ("subscript_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        // Control flow
        ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("switch_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("match_expression", NodeConfig::typed(s::PATTERN_MATCH)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("foreach_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("do_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
        // Error handling
        ("try_statement", NodeConfig::typed(s::ERROR_TRY)),
        ("catch_clause", NodeConfig::typed(s::ERROR_CATCH)),
        ("throw_expression", NodeConfig::typed(s::ERROR_THROW)),
        ("finally_clause", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("program", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("compound_statement", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("declaration_list", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("formal_parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("arguments", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "attribute_list",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::None, V::None),
        ),
        ("php_tag", NodeConfig::typed(s::PARSER_SYNTAX)),
        (
            "namespace_definition",
            NodeConfig::with_strategies(s::DEFINITION_MODULE, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "namespace_use_declaration",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
        ("require_expression", NodeConfig::typed(s::EXTERNAL_IMPORT)),
        ("include_expression", NodeConfig::typed(s::EXTERNAL_IMPORT)),
    ])
});

/// PHP adapter.
pub struct PhpAdapter;

impl LanguageAdapter for PhpAdapter {
    fn language_name(&self) -> &'static str {
        "php"
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_php::LANGUAGE_PHP.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }

    fn markers(&self) -> &LanguageMarkers {
        &MARKERS
    }
}
