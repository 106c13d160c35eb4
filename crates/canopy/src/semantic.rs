//! The 8-bit semantic taxonomy shared by every language adapter.
//!
//! Each retained AST node carries one byte of classification:
//!
//! ```text
//! [ ss kk tt ll ]
//!   ss = super kind (bits 6-7): DATA_STRUCTURE, COMPUTATION,
//!        CONTROL_EFFECTS, META_EXTERNAL
//!   kk = kind        (bits 4-5): four kinds per super kind
//!   tt = super type  (bits 2-3): four variants per kind
//!   ll = language-specific refinement (bits 0-1)
//! ```
//!
//! That gives 64 cross-language leaf categories (`LITERAL_NUMBER`,
//! `DEFINITION_FUNCTION`, `FLOW_LOOP`, ...) with two spare bits for
//! per-language refinement. Everything in this module is a pure function of
//! the code byte: decoding never fails, and unknown names simply return
//! `None` on reverse lookup.

// ===========================================================================
// Super kinds (bits 6-7)
// ===========================================================================

/// Literals, names, patterns, and types.
pub const DATA_STRUCTURE: u8 = 0x00;
/// Operators, expressions, transforms, and definitions.
pub const COMPUTATION: u8 = 0x40;
/// Execution, control flow, error handling, and organization.
pub const CONTROL_EFFECTS: u8 = 0x80;
/// Metadata, external interfaces, and parser-specific constructs.
pub const META_EXTERNAL: u8 = 0xC0;

// ===========================================================================
// Kinds (bits 4-7)
// ===========================================================================

/// Raw constants and primitive values.
pub const LITERAL: u8 = DATA_STRUCTURE;
/// Identifiers and name references.
pub const NAME: u8 = DATA_STRUCTURE | 0x10;
/// Structured data patterns and matching.
pub const PATTERN: u8 = DATA_STRUCTURE | 0x20;
/// Type expressions and references.
pub const TYPE: u8 = DATA_STRUCTURE | 0x30;

/// Pure computational operations.
pub const OPERATOR: u8 = COMPUTATION;
/// Complex expressions and invocations.
pub const COMPUTATION_NODE: u8 = COMPUTATION | 0x10;
/// Data transformation and queries.
pub const TRANSFORM: u8 = COMPUTATION | 0x20;
/// Introduction of named entities.
pub const DEFINITION: u8 = COMPUTATION | 0x30;

/// Side-effect causing operations.
pub const EXECUTION: u8 = CONTROL_EFFECTS;
/// Program control flow and branching.
pub const FLOW_CONTROL: u8 = CONTROL_EFFECTS | 0x10;
/// Exception management.
pub const ERROR_HANDLING: u8 = CONTROL_EFFECTS | 0x20;
/// Structural containers and scope.
pub const ORGANIZATION: u8 = CONTROL_EFFECTS | 0x30;

/// Annotations and code metadata.
pub const METADATA: u8 = META_EXTERNAL;
/// Dependencies and external interfaces.
pub const EXTERNAL: u8 = META_EXTERNAL | 0x10;
/// Language-specific constructs.
pub const PARSER_SPECIFIC: u8 = META_EXTERNAL | 0x20;
/// Reserved for future use.
pub const RESERVED: u8 = META_EXTERNAL | 0x30;

// ===========================================================================
// Leaf categories (bits 2-7)
// ===========================================================================

/// Integers, floats, decimals.
pub const LITERAL_NUMBER: u8 = LITERAL;
/// Strings, chars, text.
pub const LITERAL_STRING: u8 = LITERAL | 0x04;
/// true, false, null, None, undefined.
pub const LITERAL_ATOMIC: u8 = LITERAL | 0x08;
/// Arrays, objects, composite literals.
pub const LITERAL_STRUCTURED: u8 = LITERAL | 0x0C;

/// Language keywords.
pub const NAME_KEYWORD: u8 = NAME;
/// Simple identifiers.
pub const NAME_IDENTIFIER: u8 = NAME | 0x04;
/// Qualified names (`obj.prop`).
pub const NAME_QUALIFIED: u8 = NAME | 0x08;
/// Scoped references (`::`, `this`, `super`).
pub const NAME_SCOPED: u8 = NAME | 0x0C;

/// Destructuring patterns.
pub const PATTERN_DESTRUCTURE: u8 = PATTERN;
/// Pattern matching constructs.
pub const PATTERN_MATCH: u8 = PATTERN | 0x04;
/// Template patterns.
pub const PATTERN_TEMPLATE: u8 = PATTERN | 0x08;
/// Guards and conditions.
pub const PATTERN_GUARD: u8 = PATTERN | 0x0C;

/// Basic types (int, string, ...).
pub const TYPE_PRIMITIVE: u8 = TYPE;
/// Structs, unions, tuples.
pub const TYPE_COMPOSITE: u8 = TYPE | 0x04;
/// Pointers, references.
pub const TYPE_REFERENCE: u8 = TYPE | 0x08;
/// Generic/template types.
pub const TYPE_GENERIC: u8 = TYPE | 0x0C;

/// `+`, `-`, `*`, `/`, `%`, bitwise and shift operators.
pub const OPERATOR_ARITHMETIC: u8 = OPERATOR;
/// `&&`, `||`, `!`, ternaries.
pub const OPERATOR_LOGICAL: u8 = OPERATOR | 0x04;
/// `==`, `!=`, `<`, `>`, `is`, `in`.
pub const OPERATOR_COMPARISON: u8 = OPERATOR | 0x08;
/// `=`, `+=`, `:=` and friends.
pub const OPERATOR_ASSIGNMENT: u8 = OPERATOR | 0x0C;

/// Function calls.
pub const COMPUTATION_CALL: u8 = COMPUTATION_NODE;
/// Member access, indexing.
pub const COMPUTATION_ACCESS: u8 = COMPUTATION_NODE | 0x04;
/// Complex expressions.
pub const COMPUTATION_EXPRESSION: u8 = COMPUTATION_NODE | 0x08;
/// Lambdas, anonymous functions.
pub const COMPUTATION_LAMBDA: u8 = COMPUTATION_NODE | 0x0C;

/// SQL queries, LINQ.
pub const TRANSFORM_QUERY: u8 = TRANSFORM;
/// map, filter, reduce.
pub const TRANSFORM_ITERATION: u8 = TRANSFORM | 0x04;
/// select, extract operations.
pub const TRANSFORM_PROJECTION: u8 = TRANSFORM | 0x08;
/// group by, aggregate operations.
pub const TRANSFORM_AGGREGATION: u8 = TRANSFORM | 0x0C;

/// Function definitions.
pub const DEFINITION_FUNCTION: u8 = DEFINITION;
/// Variable/constant definitions.
pub const DEFINITION_VARIABLE: u8 = DEFINITION | 0x04;
/// Class/struct definitions.
pub const DEFINITION_CLASS: u8 = DEFINITION | 0x08;
/// Modules, namespaces.
pub const DEFINITION_MODULE: u8 = DEFINITION | 0x0C;

/// Expression statements.
pub const EXECUTION_STATEMENT: u8 = EXECUTION;
/// Variable declarations.
pub const EXECUTION_DECLARATION: u8 = EXECUTION | 0x04;
/// Function/method invocation statements.
pub const EXECUTION_INVOCATION: u8 = EXECUTION | 0x08;
/// Assignments, scope modifications.
pub const EXECUTION_MUTATION: u8 = EXECUTION | 0x0C;

/// if, switch, match.
pub const FLOW_CONDITIONAL: u8 = FLOW_CONTROL;
/// for, while, do-while.
pub const FLOW_LOOP: u8 = FLOW_CONTROL | 0x04;
/// break, continue, return, goto.
pub const FLOW_JUMP: u8 = FLOW_CONTROL | 0x08;
/// async, await, synchronized, yield.
pub const FLOW_SYNC: u8 = FLOW_CONTROL | 0x0C;

/// try blocks.
pub const ERROR_TRY: u8 = ERROR_HANDLING;
/// catch, except blocks.
pub const ERROR_CATCH: u8 = ERROR_HANDLING | 0x04;
/// throw, raise statements.
pub const ERROR_THROW: u8 = ERROR_HANDLING | 0x08;
/// finally, ensure blocks.
pub const ERROR_FINALLY: u8 = ERROR_HANDLING | 0x0C;

/// Code blocks, scopes.
pub const ORGANIZATION_BLOCK: u8 = ORGANIZATION;
/// Argument lists, parameter lists.
pub const ORGANIZATION_LIST: u8 = ORGANIZATION | 0x04;
/// Sections, regions.
pub const ORGANIZATION_SECTION: u8 = ORGANIZATION | 0x08;
/// Files, modules, packages.
pub const ORGANIZATION_CONTAINER: u8 = ORGANIZATION | 0x0C;

/// Comments, documentation.
pub const METADATA_COMMENT: u8 = METADATA;
/// Decorators, attributes.
pub const METADATA_ANNOTATION: u8 = METADATA | 0x04;
/// Preprocessor directives.
pub const METADATA_DIRECTIVE: u8 = METADATA | 0x08;
/// Debug information, source maps.
pub const METADATA_DEBUG: u8 = METADATA | 0x0C;

/// Import statements.
pub const EXTERNAL_IMPORT: u8 = EXTERNAL;
/// Export statements.
pub const EXTERNAL_EXPORT: u8 = EXTERNAL | 0x04;
/// Foreign function interfaces.
pub const EXTERNAL_FOREIGN: u8 = EXTERNAL | 0x08;
/// Embedded content (HTML, CSS, SQL).
pub const EXTERNAL_EMBED: u8 = EXTERNAL | 0x0C;

/// Language-specific punctuation.
pub const PARSER_PUNCTUATION: u8 = PARSER_SPECIFIC;
/// Delimiters, separators.
pub const PARSER_DELIMITER: u8 = PARSER_SPECIFIC | 0x04;
/// Syntax elements.
pub const PARSER_SYNTAX: u8 = PARSER_SPECIFIC | 0x08;
/// Unique language constructs.
pub const PARSER_CONSTRUCT: u8 = PARSER_SPECIFIC | 0x0C;

/// Reserved leaf category.
pub const RESERVED_FUTURE1: u8 = RESERVED;
/// Reserved leaf category.
pub const RESERVED_FUTURE2: u8 = RESERVED | 0x04;
/// Reserved leaf category.
pub const RESERVED_FUTURE3: u8 = RESERVED | 0x08;
/// Reserved leaf category.
pub const RESERVED_FUTURE4: u8 = RESERVED | 0x0C;

// ===========================================================================
// Language-specific refinements (bits 0-1)
// ===========================================================================

/// Refinement values for `DEFINITION_FUNCTION`.
pub mod function_refinement {
    /// Named functions, methods, procedures.
    pub const REGULAR: u8 = 0x00;
    /// Anonymous functions, closures, arrows.
    pub const LAMBDA: u8 = 0x01;
    /// Constructors, initializers, destructors.
    pub const CONSTRUCTOR: u8 = 0x02;
    /// Async, generator, coroutine functions.
    pub const ASYNC: u8 = 0x03;
}

/// Refinement values for `DEFINITION_CLASS`.
pub mod class_refinement {
    /// Basic classes.
    pub const REGULAR: u8 = 0x00;
    /// Abstract classes, interfaces, traits.
    pub const ABSTRACT: u8 = 0x01;
    /// Template/generic classes.
    pub const GENERIC: u8 = 0x02;
    /// Enums, union types.
    pub const ENUM: u8 = 0x03;
}

/// Refinement values for `COMPUTATION_CALL`.
pub mod call_refinement {
    /// Regular function calls.
    pub const FUNCTION: u8 = 0x00;
    /// Object method calls.
    pub const METHOD: u8 = 0x01;
    /// Constructor invocations.
    pub const CONSTRUCTOR: u8 = 0x02;
    /// Preprocessor/compile-time macros.
    pub const MACRO: u8 = 0x03;
}

// ===========================================================================
// Decoding
// ===========================================================================

/// Extract the super-kind bits (6-7) of a semantic code.
#[must_use]
pub const fn super_kind(code: u8) -> u8 {
    code & 0xC0
}

/// Extract the full kind value (bits 4-7) of a semantic code.
#[must_use]
pub const fn kind(code: u8) -> u8 {
    code & 0xF0
}

/// Extract the super-type variant (bits 2-3), shifted to `0..=3`.
#[must_use]
pub const fn super_type(code: u8) -> u8 {
    (code & 0x0C) >> 2
}

/// Extract the language-specific refinement bits (0-1).
#[must_use]
pub const fn language_specific(code: u8) -> u8 {
    code & 0x03
}

/// Leaf category of a code with its refinement bits masked off.
#[must_use]
pub const fn leaf(code: u8) -> u8 {
    code & 0xFC
}

/// Human-readable name of a semantic code's leaf category.
///
/// The refinement bits are masked off before lookup, so every possible byte
/// decodes to one of the 64 documented names.
#[must_use]
pub const fn semantic_type_name(code: u8) -> &'static str {
    match leaf(code) {
        LITERAL_NUMBER => "LITERAL_NUMBER",
        LITERAL_STRING => "LITERAL_STRING",
        LITERAL_ATOMIC => "LITERAL_ATOMIC",
        LITERAL_STRUCTURED => "LITERAL_STRUCTURED",
        NAME_KEYWORD => "NAME_KEYWORD",
        NAME_IDENTIFIER => "NAME_IDENTIFIER",
        NAME_QUALIFIED => "NAME_QUALIFIED",
        NAME_SCOPED => "NAME_SCOPED",
        PATTERN_DESTRUCTURE => "PATTERN_DESTRUCTURE",
        PATTERN_MATCH => "PATTERN_MATCH",
        PATTERN_TEMPLATE => "PATTERN_TEMPLATE",
        PATTERN_GUARD => "PATTERN_GUARD",
        TYPE_PRIMITIVE => "TYPE_PRIMITIVE",
        TYPE_COMPOSITE => "TYPE_COMPOSITE",
        TYPE_REFERENCE => "TYPE_REFERENCE",
        TYPE_GENERIC => "TYPE_GENERIC",
        OPERATOR_ARITHMETIC => "OPERATOR_ARITHMETIC",
        OPERATOR_LOGICAL => "OPERATOR_LOGICAL",
        OPERATOR_COMPARISON => "OPERATOR_COMPARISON",
        OPERATOR_ASSIGNMENT => "OPERATOR_ASSIGNMENT",
        COMPUTATION_CALL => "COMPUTATION_CALL",
        COMPUTATION_ACCESS => "COMPUTATION_ACCESS",
        COMPUTATION_EXPRESSION => "COMPUTATION_EXPRESSION",
        COMPUTATION_LAMBDA => "COMPUTATION_LAMBDA",
        TRANSFORM_QUERY => "TRANSFORM_QUERY",
        TRANSFORM_ITERATION => "TRANSFORM_ITERATION",
        TRANSFORM_PROJECTION => "TRANSFORM_PROJECTION",
        TRANSFORM_AGGREGATION => "TRANSFORM_AGGREGATION",
        DEFINITION_FUNCTION => "DEFINITION_FUNCTION",
        DEFINITION_VARIABLE => "DEFINITION_VARIABLE",
        DEFINITION_CLASS => "DEFINITION_CLASS",
        DEFINITION_MODULE => "DEFINITION_MODULE",
        EXECUTION_STATEMENT => "EXECUTION_STATEMENT",
        EXECUTION_DECLARATION => "EXECUTION_DECLARATION",
        EXECUTION_INVOCATION => "EXECUTION_INVOCATION",
        EXECUTION_MUTATION => "EXECUTION_MUTATION",
        FLOW_CONDITIONAL => "FLOW_CONDITIONAL",
        FLOW_LOOP => "FLOW_LOOP",
        FLOW_JUMP => "FLOW_JUMP",
        FLOW_SYNC => "FLOW_SYNC",
        ERROR_TRY => "ERROR_TRY",
        ERROR_CATCH => "ERROR_CATCH",
        ERROR_THROW => "ERROR_THROW",
        ERROR_FINALLY => "ERROR_FINALLY",
        ORGANIZATION_BLOCK => "ORGANIZATION_BLOCK",
        ORGANIZATION_LIST => "ORGANIZATION_LIST",
        ORGANIZATION_SECTION => "ORGANIZATION_SECTION",
        ORGANIZATION_CONTAINER => "ORGANIZATION_CONTAINER",
        METADATA_COMMENT => "METADATA_COMMENT",
        METADATA_ANNOTATION => "METADATA_ANNOTATION",
        METADATA_DIRECTIVE => "METADATA_DIRECTIVE",
        METADATA_DEBUG => "METADATA_DEBUG",
        EXTERNAL_IMPORT => "EXTERNAL_IMPORT",
        EXTERNAL_EXPORT => "EXTERNAL_EXPORT",
        EXTERNAL_FOREIGN => "EXTERNAL_FOREIGN",
        EXTERNAL_EMBED => "EXTERNAL_EMBED",
        PARSER_PUNCTUATION => "PARSER_PUNCTUATION",
        PARSER_DELIMITER => "PARSER_DELIMITER",
        PARSER_SYNTAX => "PARSER_SYNTAX",
        PARSER_CONSTRUCT => "PARSER_CONSTRUCT",
        RESERVED_FUTURE1 => "RESERVED_FUTURE1",
        RESERVED_FUTURE2 => "RESERVED_FUTURE2",
        RESERVED_FUTURE3 => "RESERVED_FUTURE3",
        _ => "RESERVED_FUTURE4",
    }
}

/// Human-readable name of the super-kind bits.
#[must_use]
pub const fn super_kind_name(code: u8) -> &'static str {
    match super_kind(code) {
        DATA_STRUCTURE => "DATA_STRUCTURE",
        COMPUTATION => "COMPUTATION",
        CONTROL_EFFECTS => "CONTROL_EFFECTS",
        _ => "META_EXTERNAL",
    }
}

/// Human-readable name of the kind bits.
#[must_use]
pub const fn kind_name(code: u8) -> &'static str {
    match kind(code) {
        LITERAL => "LITERAL",
        NAME => "NAME",
        PATTERN => "PATTERN",
        TYPE => "TYPE",
        OPERATOR => "OPERATOR",
        COMPUTATION_NODE => "COMPUTATION_NODE",
        TRANSFORM => "TRANSFORM",
        DEFINITION => "DEFINITION",
        EXECUTION => "EXECUTION",
        FLOW_CONTROL => "FLOW_CONTROL",
        ERROR_HANDLING => "ERROR_HANDLING",
        ORGANIZATION => "ORGANIZATION",
        METADATA => "METADATA",
        EXTERNAL => "EXTERNAL",
        PARSER_SPECIFIC => "PARSER_SPECIFIC",
        _ => "RESERVED",
    }
}

/// All 64 leaf categories in code order.
const ALL_LEAVES: [u8; 64] = {
    let mut leaves = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        #[allow(clippy::cast_possible_truncation)]
        {
            leaves[i] = (i as u8) << 2;
        }
        i += 1;
    }
    leaves
};

/// Reverse lookup: leaf category name to code.
///
/// Returns `None` for names that are not one of the 64 documented leaf
/// categories.
#[must_use]
pub fn semantic_type_code(name: &str) -> Option<u8> {
    ALL_LEAVES
        .iter()
        .copied()
        .find(|&code| semantic_type_name(code) == name)
}

/// Reverse lookup: kind name to kind bits.
#[must_use]
pub fn kind_code(name: &str) -> Option<u8> {
    (0u8..16).map(|k| k << 4).find(|&k| kind_name(k) == name)
}

/// Reverse lookup: super-kind name to super-kind bits.
#[must_use]
pub fn super_kind_code(name: &str) -> Option<u8> {
    [DATA_STRUCTURE, COMPUTATION, CONTROL_EFFECTS, META_EXTERNAL]
        .into_iter()
        .find(|&sk| super_kind_name(sk) == name)
}

// ===========================================================================
// Predicates
// ===========================================================================

/// True for function, variable, class, and module definitions.
#[must_use]
pub const fn is_definition(code: u8) -> bool {
    kind(code) == DEFINITION
}

/// True for call expressions and invocation statements.
#[must_use]
pub const fn is_call(code: u8) -> bool {
    leaf(code) == COMPUTATION_CALL || leaf(code) == EXECUTION_INVOCATION
}

/// True for conditionals, loops, jumps, and synchronization points.
#[must_use]
pub const fn is_control_flow(code: u8) -> bool {
    kind(code) == FLOW_CONTROL
}

/// True for identifier-like names (not keywords).
#[must_use]
pub const fn is_identifier(code: u8) -> bool {
    kind(code) == NAME && leaf(code) != NAME_KEYWORD
}

/// True for literal values of any shape.
#[must_use]
pub const fn is_literal(code: u8) -> bool {
    kind(code) == LITERAL
}

/// True for operator nodes.
#[must_use]
pub const fn is_operator(code: u8) -> bool {
    kind(code) == OPERATOR
}

/// True for type expressions and references.
#[must_use]
pub const fn is_type(code: u8) -> bool {
    kind(code) == TYPE
}

/// True for imports, exports, FFI, and embedded content.
#[must_use]
pub const fn is_external(code: u8) -> bool {
    kind(code) == EXTERNAL
}

/// True for try/catch/throw/finally constructs.
#[must_use]
pub const fn is_error_handling(code: u8) -> bool {
    kind(code) == ERROR_HANDLING
}

/// True for comments, annotations, and directives.
#[must_use]
pub const fn is_metadata(code: u8) -> bool {
    kind(code) == METADATA
}

/// The four definition leaf categories.
#[must_use]
pub fn definition_types() -> Vec<u8> {
    vec![
        DEFINITION_FUNCTION,
        DEFINITION_VARIABLE,
        DEFINITION_CLASS,
        DEFINITION_MODULE,
    ]
}

/// The four control-flow leaf categories.
#[must_use]
pub fn control_flow_types() -> Vec<u8> {
    vec![FLOW_CONDITIONAL, FLOW_LOOP, FLOW_JUMP, FLOW_SYNC]
}

/// Leaf categories typically targeted by cross-language code search:
/// definitions, calls, imports/exports, and control flow.
#[must_use]
pub fn searchable_types() -> Vec<u8> {
    let mut types = definition_types();
    types.extend([COMPUTATION_CALL, EXTERNAL_IMPORT, EXTERNAL_EXPORT]);
    types.extend(control_flow_types());
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn components_decode_from_known_code() {
        // DEFINITION_FUNCTION = 0111 00xx
        assert_eq!(super_kind(DEFINITION_FUNCTION), COMPUTATION);
        assert_eq!(kind(DEFINITION_FUNCTION), DEFINITION);
        assert_eq!(super_type(DEFINITION_FUNCTION), 0);
        assert_eq!(super_type(DEFINITION_MODULE), 3);
    }

    #[test]
    fn refinement_bits_do_not_change_leaf_name() {
        let lambda = DEFINITION_FUNCTION | function_refinement::LAMBDA;
        assert_eq!(semantic_type_name(lambda), "DEFINITION_FUNCTION");
        assert_eq!(language_specific(lambda), function_refinement::LAMBDA);
    }

    #[test]
    fn name_code_round_trip_for_all_leaves() {
        for code in ALL_LEAVES {
            let name = semantic_type_name(code);
            assert_eq!(semantic_type_code(name), Some(code), "leaf {code:#04x}");
        }
    }

    #[test]
    fn reverse_lookups_reject_unknown_names() {
        assert_eq!(semantic_type_code("NOT_A_TYPE"), None);
        assert_eq!(kind_code("NOT_A_KIND"), None);
        assert_eq!(super_kind_code(""), None);
    }

    #[test]
    fn kind_and_super_kind_lookups_round_trip() {
        assert_eq!(kind_code("DEFINITION"), Some(DEFINITION));
        assert_eq!(kind_code("FLOW_CONTROL"), Some(FLOW_CONTROL));
        assert_eq!(super_kind_code("META_EXTERNAL"), Some(META_EXTERNAL));
    }

    #[test]
    fn predicates_match_their_kinds() {
        assert!(is_definition(DEFINITION_CLASS));
        assert!(!is_definition(COMPUTATION_CALL));
        assert!(is_call(COMPUTATION_CALL));
        assert!(is_call(EXECUTION_INVOCATION));
        assert!(!is_call(EXECUTION_STATEMENT));
        assert!(is_control_flow(FLOW_LOOP));
        assert!(is_identifier(NAME_QUALIFIED));
        assert!(!is_identifier(NAME_KEYWORD));
        assert!(is_literal(LITERAL_STRING));
        assert!(is_operator(OPERATOR_COMPARISON));
        assert!(is_type(TYPE_GENERIC));
        assert!(is_external(EXTERNAL_IMPORT));
        assert!(is_error_handling(ERROR_CATCH));
        assert!(is_metadata(METADATA_COMMENT));
    }

    #[test]
    fn searchable_types_cover_definitions_and_calls() {
        let searchable = searchable_types();
        assert!(searchable.contains(&DEFINITION_FUNCTION));
        assert!(searchable.contains(&COMPUTATION_CALL));
        assert!(searchable.contains(&EXTERNAL_IMPORT));
        assert!(searchable.contains(&FLOW_LOOP));
    }

    proptest! {
        #[test]
        fn every_byte_decodes_to_a_documented_super_kind(code: u8) {
            let name = super_kind_name(code);
            prop_assert!(matches!(
                name,
                "DATA_STRUCTURE" | "COMPUTATION" | "CONTROL_EFFECTS" | "META_EXTERNAL"
            ));
        }

        #[test]
        fn every_byte_has_a_leaf_name(code: u8) {
            let name = semantic_type_name(code);
            prop_assert!(!name.is_empty());
            prop_assert_eq!(semantic_type_code(name), Some(leaf(code)));
        }
    }
}
