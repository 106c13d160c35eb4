//! TypeScript language adapter.
//!
//! The grammar is a superset of JavaScript's, so the config table starts
//! from the JavaScript entries and layers the type-system constructs on top.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic::{self as s, class_refinement};

use super::{LanguageAdapter, javascript};

const TS_ENTRIES: &[(&str, NodeConfig)] = &[
    (
        "interface_declaration",
        NodeConfig::construct(
            s::DEFINITION_CLASS | class_refinement::ABSTRACT,
            N::FindIdentifier,
            V::ClassWithInheritance,
        ),
    ),
    (
        "abstract_class_declaration",
        NodeConfig::construct(
            s::DEFINITION_CLASS | class_refinement::ABSTRACT,
            N::FindIdentifier,
            V::ClassWithInheritance,
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
        "type_alias_declaration",
        NodeConfig::with_strategies(s::DEFINITION_CLASS, N::FindIdentifier, V::None),
    ),
    (
        "public_field_definition",
        NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindProperty, V::VariableWithType),
    ),
    (
        "property_signature",
        NodeConfig::with_strategies(s::DEFINITION_VARIABLE, N::FindProperty, V::VariableWithType),
    ),
    (
        "method_signature",
        NodeConfig::with_strategies(s::DEFINITION_FUNCTION, N::FindProperty, V::FunctionWithParams),
    ),
    ("required_parameter", NodeConfig::typed(s::PATTERN_DESTRUCTURE)),
    ("optional_parameter", NodeConfig::typed(s::PATTERN_DESTRUCTURE)),
    ("type_annotation", NodeConfig::typed(s::TYPE_REFERENCE)),
    ("predefined_type", NodeConfig::text(s::TYPE_PRIMITIVE)),
    ("type_identifier", NodeConfig::text(s::TYPE_PRIMITIVE)),
    ("generic_type", NodeConfig::typed(s::TYPE_GENERIC)),
    ("union_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
    ("intersection_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
    ("object_type", NodeConfig::typed(s::TYPE_COMPOSITE)),
    ("accessibility_modifier", NodeConfig::text(s::NAME_KEYWORD)),
    ("implements_clause", NodeConfig::typed(s::TYPE_REFERENCE)),
    ("extends_type_clause", NodeConfig::typed(s::TYPE_REFERENCE)),
    (
        "decorator",
        NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::FirstChild, V::None),
    ),
    (
        "internal_module",
        NodeConfig::with_strategies(s::DEFINITION_MODULE, N::FindIdentifier, V::None),
    ),
    ("as_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
    ("satisfies_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
    ("non_null_expression", NodeConfig::typed(s::COMPUTATION_EXPRESSION)),
];

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    let mut table = table_from(javascript::ENTRIES);
    table.extend(TS_ENTRIES.iter().copied());
    table
});

/// TypeScript adapter (the `.ts` dialect, not TSX).
pub struct TypeScriptAdapter;

impl LanguageAdapter for TypeScriptAdapter {
    fn language_name(&self) -> &'static str {
        "typescript"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ts"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }
}
