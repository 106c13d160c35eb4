//! Ruby language adapter.

use std::sync::LazyLock;

use tree_sitter::Node;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, function_refinement};

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        // Definitions
        (
            "method",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
        ),
        (
            "singleton_method",
            NodeConfig::construct(s::DEFINITION_FUNCTION, N::FindIdentifier, V::FunctionWithParams),
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
            "class",
            NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
        ),
        (
            "singleton_class",
            NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::None),
        ),
        (
            "module",
            NodeConfig::construct(s::DEFINITION_MODULE, N::FindIdentifier, V::None),
        ),
        (
            "assignment",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindAssignmentTarget, V::None),
        ),
        (
            "operator_assignment",
            NodeConfig::with_strategies(s::EXECUTION_MUTATION, N::FindAssignmentTarget, V::None),
        ),
        // Names
        ("identifier", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("constant", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("instance_variable", NodeConfig::text(s::NAME_SCOPED)),
        ("class_variable", NodeConfig::text(s::NAME_SCOPED)),
        ("global_variable", NodeConfig::text(s::NAME_SCOPED)),
        ("scope_resolution", NodeConfig::text(s::NAME_QUALIFIED)),
        ("self", NodeConfig::text(s::NAME_SCOPED)),
        // Literals
        ("integer", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("float", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("string", NodeConfig::typed(s::LITERAL_STRING)),
        ("simple_symbol", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("true", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("false", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("nil", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("array", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("hash", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("regex", NodeConfig::typed(s::PATTERN_TEMPLATE)),
        // Calls and expressions
        (
            "call",
            NodeConfig::with_strategies(
                s::COMPUTATION_CALL | call_refinement::METHOD,
                N::FindCallTarget,
                V::FunctionCall,
            ),
        ),
        ("binary", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("unary", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
        ("conditional", NodeConfig::typed(s::OPERATOR_LOGICAL)),
        ("element_reference", NodeConfig::typed(s::COMPUTATION_ACCESS)),
        // Control flow
        ("if", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("unless", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("case", NodeConfig::typed(s::FLOW_CONDITIONAL)),
        ("when", NodeConfig::typed(s::PATTERN_MATCH)),
        ("while", NodeConfig::typed(s::FLOW_LOOP)),
        ("until", NodeConfig::typed(s::FLOW_LOOP)),
        ("for", NodeConfig::typed(s::FLOW_LOOP)),
        ("return", NodeConfig::typed(s::FLOW_JUMP)),
        ("break", NodeConfig::typed(s::FLOW_JUMP)),
        ("next", NodeConfig::typed(s::FLOW_JUMP)),
        ("redo", NodeConfig::typed(s::FLOW_JUMP)),
        ("yield", NodeConfig::typed(s::FLOW_SYNC)),
        // Error handling
        ("begin", NodeConfig::typed(s::ERROR_TRY)),
        ("rescue", NodeConfig::typed(s::ERROR_CATCH)),
        ("retry", NodeConfig::typed(s::ERROR_CATCH)),
        ("ensure", NodeConfig::typed(s::ERROR_FINALLY)),
        // Organization and meta
        ("program", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("do_block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("body_statement", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("method_parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("block_parameters", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("argument_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
        ("pair", NodeConfig::typed(s::LITERAL_STRUCTURED)),
    ])
});

/// Ruby adapter. `require` lines are plain calls in the grammar, so imports
/// surface as `COMPUTATION_CALL` nodes named `require`.
pub struct RubyAdapter;

impl LanguageAdapter for RubyAdapter {
    fn language_name(&self) -> &'static str {
        "ruby"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rb"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_ruby::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }

    fn is_public_node(&self, node: Node<'_>, content: &str) -> bool {
        // Ruby privacy is declared by `private`/`protected` sections, which
        // syntax alone cannot see. Treat everything as public.
        let _ = (node, content);
        true
    }
}
