//! Per-language grammar marker tables.
//!
//! The signature-extraction walk is identical for every language; only the
//! grammar-specific node kinds and field names differ. Each language module
//! supplies a `LanguageMarkers` value, so supporting a new grammar is a data
//! change, not new control flow.

/// Grammar-specific names consulted by the extraction routines.
#[derive(Debug, Clone, Copy)]
pub struct LanguageMarkers {
    /// Field names that hold a declaration's name.
    pub name_fields: &'static [&'static str],
    /// Field names that hold a parameter list.
    pub parameter_fields: &'static [&'static str],
    /// Node kinds that act as a parameter container when no field matches.
    pub parameter_containers: &'static [&'static str],
    /// Field names that hold a function's return type.
    pub return_type_fields: &'static [&'static str],
    /// Field names that hold a declared type.
    pub type_fields: &'static [&'static str],
    /// Field names that hold a default/initializer value.
    pub value_fields: &'static [&'static str],
    /// Field names that hold a method receiver (Go, Rust self is positional).
    pub receiver_fields: &'static [&'static str],
    /// Node kinds treated as modifiers when seen among immediate children.
    pub modifier_kinds: &'static [&'static str],
    /// Node kinds marking a variadic/rest parameter.
    pub variadic_kinds: &'static [&'static str],
    /// Node kinds carrying a class's base/interface list.
    pub base_clause_kinds: &'static [&'static str],
    /// Field names that hold a call's argument list.
    pub argument_fields: &'static [&'static str],
    /// Node kinds acting as an argument container when no field matches.
    pub argument_containers: &'static [&'static str],
    /// Field names that hold a call's callee.
    pub call_target_fields: &'static [&'static str],
    /// Node kinds of named (keyword) arguments.
    pub named_argument_kinds: &'static [&'static str],
    /// Node kinds recognized as identifiers during name scans.
    pub identifier_kinds: &'static [&'static str],
    /// Node kinds of decorators/annotations preceding a definition.
    pub decorator_kinds: &'static [&'static str],
}

/// Baseline covering the field and kind names most tree-sitter grammars
/// share. Language modules override only what their grammar renames.
pub const DEFAULT_MARKERS: LanguageMarkers = LanguageMarkers {
    name_fields: &["name"],
    parameter_fields: &["parameters"],
    parameter_containers: &["parameter_list", "formal_parameters", "parameters"],
    return_type_fields: &["return_type", "result", "type"],
    type_fields: &["type"],
    value_fields: &["value", "default_value", "default"],
    receiver_fields: &["receiver"],
    modifier_kinds: &[
        "async",
        "static",
        "abstract",
        "final",
        "const",
        "pub",
        "public",
        "private",
        "protected",
        "readonly",
        "override",
        "virtual",
        "mutable_specifier",
        "visibility_modifier",
        "modifiers",
        "modifier",
        "storage_class_specifier",
        "access_modifier",
    ],
    variadic_kinds: &[
        "variadic_parameter_declaration",
        "variadic_parameter",
        "rest_pattern",
        "rest_parameter",
        "list_splat_pattern",
        "dictionary_splat_pattern",
        "spread_element",
        "splat_parameter",
        "hash_splat_parameter",
    ],
    base_clause_kinds: &[
        "class_heritage",
        "superclasses",
        "base_class_clause",
        "extends_clause",
        "superclass",
        "super_interfaces",
        "extends_interfaces",
        "base_list",
        "implements_clause",
        "delegation_specifier",
    ],
    argument_fields: &["arguments"],
    argument_containers: &["argument_list", "arguments"],
    call_target_fields: &["function", "callee", "method", "constructor"],
    named_argument_kinds: &[
        "keyword_argument",
        "named_argument",
        "value_argument",
        "pair",
    ],
    identifier_kinds: &[
        "identifier",
        "type_identifier",
        "field_identifier",
        "property_identifier",
        "shorthand_property_identifier",
        "simple_identifier",
        "constant",
        "name",
        "word",
    ],
    decorator_kinds: &["decorator", "annotation", "attribute_item", "attribute"],
};
