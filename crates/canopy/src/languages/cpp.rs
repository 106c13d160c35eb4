//! C++ language adapter.
//!
//! Extends the C table with classes, templates, namespaces, and exceptions.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, call_refinement, class_refinement, function_refinement};

use super::{LanguageAdapter, c};

const CPP_ENTRIES: &[(&str, NodeConfig)] = &[
    (
        "class_specifier",
        NodeConfig::construct(s::DEFINITION_CLASS, N::FindIdentifier, V::ClassWithInheritance),
    ),
    (
        "template_declaration",
        NodeConfig::with_strategies(s::DEFINITION_CLASS | class_refinement::GENERIC, N::None, V::None),
    ),
    (
        "namespace_definition",
        NodeConfig::construct(s::DEFINITION_MODULE, N::FindIdentifier, V::None),
    ),
    (
        "lambda_expression",
        NodeConfig::construct(
            s::DEFINITION_FUNCTION | function_refinement::LAMBDA,
            N::None,
            V::FunctionWithParams,
        ),
    ),
    (
        "constructor_or_destructor_definition",
        NodeConfig::construct(
            s::DEFINITION_FUNCTION | function_refinement::CONSTRUCTOR,
            N::FindInDeclarator,
            V::FunctionWithParams,
        ),
    ),
    (
        "operator_cast",
        NodeConfig::with_strategies(s::DEFINITION_FUNCTION, N::FindInDeclarator, V::None),
    ),
    ("base_class_clause", NodeConfig::typed(s::TYPE_REFERENCE)),
    ("access_specifier", NodeConfig::text(s::NAME_KEYWORD)),
    ("reference_declarator", NodeConfig::typed(s::TYPE_REFERENCE)),
    ("template_type", NodeConfig::typed(s::TYPE_GENERIC)),
    ("auto", NodeConfig::text(s::TYPE_PRIMITIVE)),
    ("namespace_identifier", NodeConfig::text(s::NAME_QUALIFIED)),
    (
        "qualified_identifier",
        NodeConfig::text(s::NAME_SCOPED),
    ),
    ("this", NodeConfig::text(s::NAME_SCOPED)),
    ("nullptr", NodeConfig::typed(s::LITERAL_ATOMIC)),
    ("raw_string_literal", NodeConfig::typed(s::LITERAL_STRING)),
    (
        "new_expression",
        NodeConfig::with_strategies(
            s::COMPUTATION_CALL | call_refinement::CONSTRUCTOR,
            N::FindCallTarget,
            V::FunctionCall,
        ),
    ),
    ("delete_expression", NodeConfig::typed(s::EXECUTION_MUTATION)),
    ("try_statement", NodeConfig::typed(s::ERROR_TRY)),
    ("catch_clause", NodeConfig::typed(s::ERROR_CATCH)),
    ("throw_statement", NodeConfig::typed(s::ERROR_THROW)),
    ("for_range_loop", NodeConfig::typed(s::FLOW_LOOP)),
    ("co_await_expression", NodeConfig::typed(s::FLOW_SYNC)),
    ("co_yield_statement", NodeConfig::typed(s::FLOW_SYNC)),
    ("co_return_statement", NodeConfig::typed(s::FLOW_JUMP)),
    (
        "using_declaration",
        NodeConfig::with_strategies(s::EXTERNAL_IMPORT, N::FindQualifiedIdentifier, V::None),
    ),
    ("field_initializer_list", NodeConfig::typed(s::ORGANIZATION_LIST)),
];

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    let mut table = table_from(c::ENTRIES);
    table.extend(CPP_ENTRIES.iter().copied());
    table
});

/// C++ adapter.
pub struct CppAdapter;

impl LanguageAdapter for CppAdapter {
    fn language_name(&self) -> &'static str {
        "cpp"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["c++", "cxx", "cc"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_cpp::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
