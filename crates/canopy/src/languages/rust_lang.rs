//! Rust language adapter.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, class_refinement, function_refinement};

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "function_item",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "function_signature_item",
            NodeConfig::with_strategies(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "closure_expression",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::None,
                V::ArrowFunction,
            ),
        ),
        (
            "struct_item",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
        ),
        (
            "enum_item",
            NodeConfig::construct(
                s::DEFINITION_CLASS | class_refinement::ENUM,
                N::FindIdentifier,
                V::ClassWithMethods,
            ),
        ),
        (
            "trait_item",
            NodeConfig::construct(
                s::DEFINITION_CLASS | class_refinement::ABSTRACT,
                N::FindIdentifier,
                V::ClassWithMethods,
            ),
        ),
        (
            "union_item",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
        ),
        (
            "impl_item",
            NodeConfig::with_strategies(s::ORGANIZATION_SECTION, N::FindIdentifier, V::None),
        ),
        (
            "mod_item",
            NodeConfig::construct(s::DEFINITION_MODULE, N::FindIdentifier, V::None),
        ),
        (
            "let_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "const_item",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "static_item",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "field_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "type_item",
            NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::None),
        ),
        (
            "macro_definition",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::None),
        ),
        // Types
        ("primitive_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("type_identifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("reference_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("pointer_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("generic_type", NodeConfig::typed(s::TYPE_GENERIC)),
        ("tuple_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("array_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("dynamic_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("lifetime", NodeConfig::text(s::TYPE_REFERENCE)),
        // Names and access
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("field_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("scoped_identifier", NodeConfig::text(s::NAME_SCOPED)),
        ("self", NodeConfig::text(s::NAME_SCOPED)),
        (
            "field_expression",
            NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
        ),
        ("index_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        // Literals
        ("integer_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("float_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("raw_string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("char_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("boolean_literal", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("array_expression", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("struct_expression", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("tuple_expression", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        // Calls and expressions
        (
            "call_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::FUNCTION,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        (
            "method_call_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::METHOD,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        (
            "macro_invocation",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::MACRO,
                N::FindIdentifier,
                V::None,
            ),
        ),
        ("binary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("unary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("range_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        (
            "assignment_expression",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Control flow
        ("if_expression", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("match_expression", NodeConfig::typed(s::PATTERN_MATCH)),
        ("match_arm", NodeConfig::typed(s::PATTERN_MATCH)),
        ("for_expression", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_expression", NodeConfig::typed(s::FLOW_LOOP)),
        ("loop_expression", NodeConfig::typed(s::FLOW_LOOP)),
        ("return_expression", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_expression", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_expression", NodeConfig::typed(s::FLOW_JUMP)),
        ("await_expression", NodeConfig::typed(s::FLOW_SYNC)),
        ("async_block", NodeConfig::typed(s::FLOW_SYNC)),
        ("try_expression", NodeConfig::typed(s::ERROR_TRY)),
        // Organization and meta
        ("source_file", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("arguments", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
        ("line_comment", NodeConfig::typed(s::METADATA_COMMENT)),
        ("block_comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "attribute_item",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::None, V::None),
        ),
        ("visibility_modifier", NodeConfig::text(s::NAME_KEYWORD)),
        (
            "use_declaration",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "extern_crate_declaration",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindIdentifier, V::None),
        ),
    ])
});

/// Rust adapter.
pub struct RustAdapter;

impl LanguageAdapter for RustAdapter {
    fn language_name(&self) -> &'static str {
        "rust"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_rust::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
