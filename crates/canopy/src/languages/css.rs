//! CSS adapter.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic as s;

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        ("stylesheet", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        (
            "rule_set",
            NodeConfig::with_strategies(s::ORGANIZATION_SECTION, N::FirstChild, V::None),
        ),
        ("selectors", NodeConfig::text(s::PATTERN_MATCH)),
        ("class_selector", NodeConfig::text(s::PATTERN_MATCH)),
        ("id_selector", NodeConfig::text(s::PATTERN_MATCH)),
        ("tag_name", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("universal_selector", NodeConfig::text(s::PATTERN_MATCH)),
        ("pseudo_class_selector", NodeConfig::text(s::PATTERN_MATCH)),
        ("pseudo_element_selector", NodeConfig::text(s::PATTERN_MATCH)),
        ("attribute_selector", NodeConfig::text(s::PATTERN_MATCH)),
        (
            "declaration",
            NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FirstChild, V::None),
        ),
        ("property_name", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("plain_value", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("integer_value", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("float_value", NodeConfig::typed(s::LITERAL_NUMBER)),
        ("color_value", NodeConfig::typed(s::LITERAL_ATOMIC)),
        ("string_value", NodeConfig::typed(s::LITERAL_STRING)),
        (
            "call_expression",
            NodeConfig::with_strategies(s::COMPUTATION_CALL, N::FindIdentifier, V::None),
        ),
        ("function_name", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("media_statement", NodeConfig::typed(s::METADATA_DIRECTIVE)),
        ("import_statement", NodeConfig::typed(s::EXTERNAL_IMPORT)),
        ("charset_statement", NodeConfig::typed(s::METADATA_DIRECTIVE)),
        ("keyframes_statement", NodeConfig::typed(s::ORGANIZATION_SECTION)),
        ("at_rule", NodeConfig::typed(s::METADATA_DIRECTIVE)),
        ("block", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
    ])
});

/// CSS adapter.
pub struct CssAdapter;

impl LanguageAdapter for CssAdapter {
    fn language_name(&self) -> &'static str {
        "css"
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_css::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
