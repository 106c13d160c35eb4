//! Per-node-type configuration: semantic code, extraction strategies, flags.
//!
//! Every language module owns a static table mapping its grammar's raw
//! node-type strings to a [`NodeConfig`]. A node type absent from the table
//! gets [`NodeConfig::default`], which marks it as an uninteresting token.
//! Absence is never an error.

use std::collections::HashMap;

/// Node flag: introduces a named construct (function, class, module).
pub const IS_CONSTRUCT: u8 = 0x01;
/// Node flag: carries a body/implementation rather than being a declaration.
pub const IS_EMBODIED: u8 = 0x02;

/// How to recover a human-readable name from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStrategy {
    /// No name to extract.
    #[default]
    None,
    /// The node's own source text is the name (identifiers, operators).
    NodeText,
    /// The name is the node's first named child.
    FirstChild,
    /// Scan immediate children for an `identifier`-like node.
    FindIdentifier,
    /// Scan immediate children for a property/field name.
    FindProperty,
    /// The name is the left-hand side of an assignment.
    FindAssignmentTarget,
    /// Scan for a dotted/qualified identifier.
    FindQualifiedIdentifier,
    /// Descend through declarator wrappers (C-family) to the identifier.
    FindInDeclarator,
    /// Resolve the callee of a call expression.
    FindCallTarget,
    /// Adapter-specific override via `LanguageAdapter::extract_custom_name`.
    Custom,
}

/// Which structured-signature routine applies to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NativeStrategy {
    /// No native extraction.
    #[default]
    None,
    /// Plain function or method: parameters plus return type.
    FunctionWithParams,
    /// Function with an async/generator marker to record as a modifier.
    AsyncFunction,
    /// Arrow/lambda function: parameters may be a bare identifier.
    ArrowFunction,
    /// Function preceded by decorators/annotations.
    FunctionWithDecorators,
    /// Class-like: collect the kind discriminator and modifiers.
    ClassWithMethods,
    /// Class-like with a base/interface list to fold into the signature.
    ClassWithInheritance,
    /// Variable/field: declared type and mutability/visibility modifiers.
    VariableWithType,
    /// Call expression: callee plus positional/named argument summary.
    FunctionCall,
}

/// Static per-node-type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeConfig {
    /// Semantic taxonomy code (see [`crate::semantic`]).
    pub semantic_type: u8,
    /// How to extract the node's name.
    pub name_strategy: NameStrategy,
    /// Which signature extraction routine applies.
    pub native_strategy: NativeStrategy,
    /// Flag bits: [`IS_CONSTRUCT`], [`IS_EMBODIED`].
    pub flags: u8,
}

impl NodeConfig {
    /// Config with a semantic type and no extraction.
    #[must_use]
    pub const fn typed(semantic_type: u8) -> Self {
        Self {
            semantic_type,
            name_strategy: NameStrategy::None,
            native_strategy: NativeStrategy::None,
            flags: 0,
        }
    }

    /// Config whose name is the node's own text.
    #[must_use]
    pub const fn text(semantic_type: u8) -> Self {
        Self {
            semantic_type,
            name_strategy: NameStrategy::NodeText,
            native_strategy: NativeStrategy::None,
            flags: 0,
        }
    }

    /// Config with name and native strategies, flagged as a construct with a
    /// body.
    #[must_use]
    pub const fn construct(
        semantic_type: u8,
        name_strategy: NameStrategy,
        native_strategy: NativeStrategy,
    ) -> Self {
        Self {
            semantic_type,
            name_strategy,
            native_strategy,
            flags: IS_CONSTRUCT | IS_EMBODIED,
        }
    }

    /// Config with explicit strategies and no flags.
    #[must_use]
    pub const fn with_strategies(
        semantic_type: u8,
        name_strategy: NameStrategy,
        native_strategy: NativeStrategy,
    ) -> Self {
        Self {
            semantic_type,
            name_strategy,
            native_strategy,
            flags: 0,
        }
    }

    /// True when the node introduces a named construct.
    #[must_use]
    pub const fn is_construct(&self) -> bool {
        self.flags & IS_CONSTRUCT != 0
    }
}

/// Per-language node-type table. Lookup is exact-string and O(1).
pub type ConfigTable = HashMap<&'static str, NodeConfig>;

/// Build a [`ConfigTable`] from a slice of entries.
#[must_use]
pub fn table_from(entries: &[(&'static str, NodeConfig)]) -> ConfigTable {
    entries.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic;

    #[test]
    fn default_config_is_the_uninteresting_token() {
        let cfg = NodeConfig::default();
        assert_eq!(cfg.semantic_type, 0);
        assert_eq!(cfg.name_strategy, NameStrategy::None);
        assert_eq!(cfg.native_strategy, NativeStrategy::None);
        assert_eq!(cfg.flags, 0);
        assert!(!cfg.is_construct());
    }

    #[test]
    fn construct_helper_sets_both_flags() {
        let cfg = NodeConfig::construct(
            semantic::DEFINITION_FUNCTION,
            NameStrategy::FindIdentifier,
            NativeStrategy::FunctionWithParams,
        );
        assert!(cfg.is_construct());
        assert_eq!(cfg.flags, IS_CONSTRUCT | IS_EMBODIED);
    }

    #[test]
    fn missing_table_entries_yield_default() {
        let table = table_from(&[("identifier", NodeConfig::text(semantic::NAME_IDENTIFIER))]);
        let cfg = table.get("no_such_type").copied().unwrap_or_default();
        assert_eq!(cfg, NodeConfig::default());
    }
}
