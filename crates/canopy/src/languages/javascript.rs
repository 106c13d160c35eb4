//! JavaScript language adapter.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, function_refinement};

use super::LanguageAdapter;

/// Shared with the TypeScript adapter, whose grammar is a superset.
pub(super) const ENTRIES: &[(&str, NodeConfig)] = &[
        // Definitions
        (
            "function_declaration",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "function_expression",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::FindIdentifier,
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
            "generator_function_declaration",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::ASYNC,
                N::FindIdentifier,
                V::FunctionWithParams,
            ),
        ),
        (
            "method_definition",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindProperty, V::FunctionWithParams),
        ),
        (
            "class_declaration",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "class",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        ("variable_declaration", NodeConfig::typed(s::EXECUTION_DECLARATION)),
        ("lexical_declaration", NodeConfig::typed(s::EXECUTION_DECLARATION)),
        (
            "variable_declarator",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "assignment_expression",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Names and access
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("property_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("shorthand_property_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        (
            "member_expression",
            NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
        ),
        ("subscript_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        ("this", NodeConfig::text(s::NAME_SCOPED)),
        ("super", NodeConfig::text(s::NAME_SCOPED)),
        // Literals
        ("number", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string", NodeConfig::typed(s::LITERAL_STRING)),
        ("template_string", NodeConfig::typed(s::LITERAL_STRING)),
        ("regex", NodeConfig::typed(s::PATTERN_TEMPLATE)),
        ("true", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("false", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("null", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("undefined", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("array", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("object", NodeConfig::typed(s::LITERAL_STRUCTURED)),
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
            "new_expression",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::CONSTRUCTOR,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        ("binary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("unary_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("update_expression", NodeConfig::typed(s::EXECUTION_MUTATION)),
        ("ternary_expression", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        // Control flow
        ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("switch_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("for_in_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("do_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("await_expression", NodeConfig::typed(s::FLOW_SYNC)),
        ("yield_expression", NodeConfig::typed(s::FLOW_SYNC)),
        // Error handling
        ("try_statement", NodeConfig::typed(s::ERROR_TRY)),
        ("catch_clause", NodeConfig::typed(s::ERROR_CATCH)),
        ("throw_statement", NodeConfig::typed(s::ERROR_THROW)),
        ("finally_clause", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("program", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("statement_block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("formal_parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("arguments", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "import_statement",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::None, V::None),
        ),
        (
            "export_statement",
            NodeConfig::with_strategies(s::EXTERNAL_EXPORT, N::None, V::None),
        ),
];

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| table_from(ENTRIES));

/// JavaScript adapter, also used for JSX sources.
pub struct JavaScriptAdapter;

impl LanguageAdapter for JavaScriptAdapter {
    fn language_name(&self) -> &'static str {
        "javascript"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["js", "jsx", "node"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
