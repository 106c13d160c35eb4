//! Go language adapter.

use std::sync::LazyLock;

use tree_sitter::Node;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, function_refinement};

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "function_declaration",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "method_declaration",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "func_literal",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::None,
                V::FunctionWithParams,
            ),
        ),
        (
            "type_declaration",
            NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::None),
        ),
        (
            "type_spec",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithMethods),
        ),
        (
            "var_declaration",
            NodeConfig::typed(s::EXECUTION_DECLARATION),
        ),
        (
            "var_spec",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "const_declaration",
            NodeConfig::typed(s::EXECUTION_DECLARATION),
        ),
        (
            "const_spec",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        (
            "short_var_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindAssignmentTarget, V::None),
        ),
        (
            "field_declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindIdentifier, V::VariableWithType),
        ),
        // Types
        ("struct_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("interface_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("map_type", NodeConfig::typed(s::TYPE_GENERIC)),
        ("slice_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("array_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
        ("pointer_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("channel_type", NodeConfig::typed(s::TYPE_GENERIC)),
        ("function_type", NodeConfig::typed(s::TYPE_REFERENCE)),
        ("type_identifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
        ("qualified_type", NodeConfig::text(s::TYPE_REFERENCE)),
        // Names
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("field_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("package_identifier", NodeConfig::text(s::NAME_QUALIFIED)),
        ("blank_identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        (
            "selector_expression",
            NodeConfig::with_strategies(s::COMPUTATION_ACCESS, N::FindProperty, V::None),
        ),
        // Literals
        ("int_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("float_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("imaginary_literal", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("rune_literal", NodeConfig::typed(s::LITERAL_STRING)),
        (
            "interpreted_string_literal",
            NodeConfig::typed(s::LITERAL_STRING),
        ),
        ("raw_string_literal", NodeConfig::typed(s::LITERAL_STRING)),
        ("true", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("false", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("nil", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("iota", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("composite_literal", NodeConfig::typed(s::LITERAL_STRUCTURED)),
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
        ("index_expression", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        (
            "assignment_statement",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Control flow
        ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        (
            "expression_switch_statement",
            NodeConfig::typed(s::FLOW_CONDITIONAL),
        ),
        ("type_switch_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("select_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("range_clause", NodeConfig::typed(s::TRANSFORM_ITERATION)),
        ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("goto_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("go_statement", NodeConfig::typed(s::FLOW_SYNC)),
        ("defer_statement", NodeConfig::typed(s::FLOW_SYNC)),
        // Organization and meta
        ("source_file", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("parameter_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("argument_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        (
            "package_clause",
            NodeConfig::with_strategies(s::DEFINITION_MODULE, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "import_declaration",
            NodeConfig::typed(s::EXTERNAL_IMPORT),
        ),
        (
            "import_spec",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FirstChild, V::None),
        ),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
    ])
});

/// Go adapter. Visibility follows the capitalization rule.
pub struct GoAdapter;

impl LanguageAdapter for GoAdapter {
    fn language_name(&self) -> &'static str {
        "go"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["golang"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }

    fn is_public_node(&self, node: Node<'_>, content: &str) -> bool {
        let name = self.extract_node_name(node, content);
        name.chars().next().is_some_and(char::is_uppercase)
    }
}
