//! Kotlin language adapter.

use std::sync::LazyLock;

use crate::native::markers::{DEFAULT_MARKERS, LanguageMarkers};
use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, class_refinement, function_refinement};

use super::LanguageAdapter;

static MARKERS: LanguageMarkers = LanguageMarkers {
    parameter_containers: &[
        "function_value_parameters",
        "class_parameters",
        "lambda_parameters",
    ],
    ..DEFAULT_MARKERS
};

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "function_declaration",
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
            "lambda_literal",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::None,
                V::ArrowFunction,
            ),
        ),
        (
            "secondary_constructor",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::CONSTRUCTOR,
                N::None,
                V::FunctionWithParams,
            ),
        ),
        (
            "class_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "object_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
        ),
        (
            "enum_class_body",
            NodeConfig::typed(s::DEFINITION_CLASS | class_refinement::ENUM),
        ),
        (
            "property_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "variable_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::None),
        ),
        // Types
        ("user_type", NodeConfig::text(s::TYPE_COMPOSITE)),
        ("nullable_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("function_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("type_identifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
        // Names
        ("simple_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("navigation_expression", NodeConfig::text(s::NAME_QUALIFIED)),
        ("this_expression", NodeConfig::text(s::NAME_SCOPED)),
        ("super_expression", NodeConfig::text(s::NAME_SCOPED)),
        // Literals
        ("integer_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("hex_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("real_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("character_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("boolean_literal", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("null", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("collection_literal", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        // Calls and expressions
        (
            "call_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::FUNCTION,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        ("binary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("prefix_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("postfix_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("indexing_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        (
            "assignment",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Control flow
        ("if_expression", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("when_expression", NodeConfig::typed(s::PATTERN_MATCH)),
        ("when_entry", NodeConfig::typed(s::PATTERN_MATCH)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("do_while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("jump_expression", NodeConfig::typed(s::FLOW_JUMP)),
        // Error handling
        ("try_expression", NodeConfig::typed(s::ERROR_TRY)),
        ("catch_block", NodeConfig::typed(s::ERROR_CATCH)),
        ("finally_block", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("source_file", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("class_body", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("statements", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("function_body", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("function_value_parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("value_arguments", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("line_comment", NodeConfig::typed(s::METADATA_COMMENT)),
        ("multiline_comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "annotation",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::FindIdentifier, V::None),
        ),
        (
            "package_header",
            NodeConfig::with_strategies(s::DEFINITION_MODULE, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "import_header",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
    ])
});

/// Kotlin adapter.
pub struct KotlinAdapter;

impl LanguageAdapter for KotlinAdapter {
    fn language_name(&self) -> &'static str {
        "kotlin"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["kt"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_kotlin_ng::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }

    fn markers(&self) -> &LanguageMarkers {
        &MARKERS
    }
}
