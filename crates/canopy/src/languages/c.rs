//! C language adapter.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement};

use super::LanguageAdapter;

/// Shared with the C++ adapter, whose grammar is a superset.
pub(super) const ENTRIES: &[(&str, NodeConfig)] = &[
    // Definitions
    (
        "function_definition",
        NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindInDeclarator, V::FunctionWithParams),
    ),
    (
        "declaration",
        NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindInDeclarator, V::VariableWithType),
    ),
    (
        "init_declarator",
        NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindInDeclarator, V::None),
    ),
    (
        "field_declaration",
        NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindInDeclarator, V::VariableWithType),
    ),
    (
        "struct_specifier",
        NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
    ),
    (
        "union_specifier",
        NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
    ),
    (
        "enum_specifier",
        NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
    ),
    (
        "type_definition",
        NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindInDeclarator, V::None),
    ),
    // Types
    ("primitive_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
    ("sized_type_specifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
    ("type_identifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
    ("pointer_declarator", NodeConfig::typed(s::TYPE_REFERENCE)),
    ("array_declarator", NodeConfig::typed(s::TYPE_COMPOSITE)),
    ("storage_class_specifier", NodeConfig::text(s::NAME_KEYWORD)),
    ("type_qualifier", NodeConfig::text(s::NAME_KEYWORD)),
    // Names and access
    ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
    ("field_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
    (
        "field_expression",
        NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
    ),
    ("subscript_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
    // Literals
    ("number_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
    ("string_literal", NodeConfig::typed(s::LITERAL_STRING)),
    ("char_literal", NodeConfig::typed(s::LITERAL_STRING)),
    ("concatenated_string", NodeConfig::typed(s::LITERAL_STRING)),
    ("true", NodeConfig::typed(s::LITERAL_ATOMIC)),
    ("false", NodeConfig::typed(s::LITERAL_ATOMIC)),
    ("null", NodeConfig::typed(s::LITERAL_ATOMIC)),
    ("initializer_list", NodeConfig::typed(s::LITERAL_STRUCTURED)),
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
    ("unary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
    ("update_expression", NodeConfig::typed(s::EXECUTION_MUTATION)),
    ("cast_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
    ("conditional_expression", NodeConfig::typed(s::OPERATOR_LOGICAL)),
    (
        "assignment_expression",
        NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
    ),
    // Control flow
    ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
    ("switch_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
    ("case_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
    ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
    ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
    ("do_statement", NodeConfig::typed(s::FLOW_LOOP)),
    ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
    ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
    ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
    ("goto_statement", NodeConfig::typed(s::FLOW_JUMP)),
    // Organization and meta
    ("translation_unit", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
    ("compound_statement", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
    ("parameter_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
    ("argument_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
    ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
    ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
    (
        "preproc_include",
        NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FirstChild, V::None),
    ),
    (
        "preproc_def",
        NodeConfig::with_strategies(s::METADATA_DIRECTIVE, N::FindIdentifier, V::None),
    ),
    (
        "preproc_function_def",
        NodeConfig::with_strategies(s::METADATA_DIRECTIVE, N::FindIdentifier, V::None),
    ),
    ("preproc_if", NodeConfig::typed(s::METADATA_DIRECTIVE)),
    ("preproc_ifdef", NodeConfig::typed(s::METADATA_DIRECTIVE)),
];

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| table_from(ENTRIES));

/// C adapter.
pub struct CAdapter;

impl LanguageAdapter for CAdapter {
    fn language_name(&self) -> &'static str {
        "c"
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_c::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
