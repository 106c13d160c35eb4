//! Python language adapter.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, function_refinement};

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "function_definition",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "decorated_definition",
            NodeConfig::with_strategies(s::DEFINITION_FUNCTION, N::None, V::None),
        ),
        (
            "lambda",
            NodeConfig::construct(
                s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
                N::None,
                V::ArrowFunction,
            ),
        ),
        (
            "class_definition",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "assignment",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindAssignmentTarget, V::VariableWithType),
        ),
        (
            "augmented_assignment",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        ("global_statement", NodeConfig::typed(s::EXECUTION_DECLARATION)),
        // Names and access
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        (
            "attribute",
            NodeConfig::with_strategies(s::NAME_QUALIFIED, N::FindProperty, V::None),
        ),
        ("dotted_name", NodeConfig::text(s::NAME_QUALIFIED)),
        ("subscript", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        // Literals
        ("integer", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("float", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string", NodeConfig::typed(s::LITERAL_STRING)),
        ("concatenated_string", NodeConfig::typed(s::LITERAL_STRING)),
        ("true", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("false", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("none", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("list", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("dictionary", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("set", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("tuple", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        // Calls and expressions
        (
            "call",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::FUNCTION,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        ("binary_operator", NodeConfig::typed(s::OPERATOR_ARITHMETIC)),
        ("boolean_operator", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        ("not_operator", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        ("comparison_operator", NodeConfig::typed(s::OPERATOR_COMPARISON)),
        ("conditional_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("list_comprehension", NodeConfig::typed(s::TRANSFORM_ITERATION)),
        ("dictionary_comprehension", NodeConfig::typed(s::TRANSFORM_ITERATION)),
        ("generator_expression", NodeConfig::typed(s::TRANSFORM_ITERATION)),
        // Control flow
        ("if_statement", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("match_statement", NodeConfig::typed(s::PATTERN_MATCH)),
        ("for_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("while_statement", NodeConfig::typed(s::FLOW_LOOP)),
        ("return_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("break_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("continue_statement", NodeConfig::typed(s::FLOW_JUMP)),
        ("await", NodeConfig::typed(s::FLOW_SYNC)),
        ("yield", NodeConfig::typed(s::FLOW_SYNC)),
        ("with_statement", NodeConfig::typed(s::FLOW_SYNC)),
        // Error handling
        ("try_statement", NodeConfig::typed(s::ERROR_TRY)),
        ("except_clause", NodeConfig::typed(s::ERROR_CATCH)),
        ("raise_statement", NodeConfig::typed(s::ERROR_THROW)),
        ("finally_clause", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("module", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("argument_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("expression_statement", NodeConfig::typed(s::EXECUTION_STATEMENT)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
        (
            "decorator",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::FirstChild, V::None),
        ),
        (
            "import_statement",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
        (
            "import_from_statement",
            NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
        ),
    ])
});

/// Python adapter. Underscore-prefixed names follow the default privacy
/// convention.
pub struct PythonAdapter;

impl LanguageAdapter for PythonAdapter {
    fn language_name(&self) -> &'static str {
        "python"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["py", "python3"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
