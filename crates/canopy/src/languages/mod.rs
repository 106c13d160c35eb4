//! Language adapters: one per supported grammar.
//!
//! An adapter owns its grammar handle, its node-config table, and its marker
//! table. The trait's provided methods implement the shared extraction
//! machinery; most adapters only supply data. Parser handles are stateful
//! and not reentrant, so [`LanguageAdapter::create_fresh_parser`] constructs
//! an independent handle per call instead of sharing one behind a lock.

pub mod c;
pub mod cpp;
pub mod csharp;
pub mod css;
pub mod go;
pub mod html;
pub mod java;
pub mod javascript;
pub mod kotlin;
pub mod markdown;
pub mod php;
pub mod python;
pub mod ruby;
pub mod rust_lang;
pub mod typescript;

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};
use crate::native::markers::{DEFAULT_MARKERS, LanguageMarkers};
use crate::native::{child_by_fields, find_identifier_child, node_text};
use crate::node_config::{ConfigTable, NameStrategy, NodeConfig};
use crate::semantic;

/// Capability set implemented once per supported grammar.
pub trait LanguageAdapter: Send + Sync {
    /// Canonical language name (`"python"`, `"cpp"`, ...).
    fn language_name(&self) -> &'static str;

    /// Alternate names accepted by the registry (`"golang"` for Go).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// The grammar handle.
    fn grammar(&self) -> tree_sitter::Language;

    /// This language's node-type configuration table.
    fn config_table(&self) -> &ConfigTable;

    /// Grammar marker names used by signature extraction.
    fn markers(&self) -> &LanguageMarkers {
        &DEFAULT_MARKERS
    }

    /// Config for a raw node-type string. Unknown types get the
    /// uninteresting-token default; absence is never an error.
    fn node_config(&self, kind: &str) -> NodeConfig {
        self.config_table().get(kind).copied().unwrap_or_default()
    }

    /// Flag bits for a raw node-type string.
    fn node_flags(&self, kind: &str) -> u8 {
        self.node_config(kind).flags
    }

    /// Cross-language semantic category name for a raw node type.
    fn normalized_type(&self, kind: &str) -> &'static str {
        semantic::semantic_type_name(self.node_config(kind).semantic_type)
    }

    /// Recover a node's human-readable name per its configured strategy.
    /// Returns an empty string when there is nothing to extract.
    fn extract_node_name(&self, node: Node<'_>, content: &str) -> String {
        let config = self.node_config(node.kind());
        let markers = self.markers();
        let found = match config.name_strategy {
            NameStrategy::None => None,
            NameStrategy::NodeText => Some(node),
            NameStrategy::FirstChild => node.named_child(0),
            NameStrategy::FindIdentifier => child_by_fields(node, markers.name_fields)
                .or_else(|| find_identifier_child(node, markers)),
            NameStrategy::FindProperty => child_by_fields(node, &["property", "field", "name"])
                .or_else(|| find_identifier_child(node, markers)),
            NameStrategy::FindAssignmentTarget => child_by_fields(node, &["left", "name"])
                .or_else(|| node.named_child(0)),
            NameStrategy::FindQualifiedIdentifier => find_qualified_identifier(node, markers),
            NameStrategy::FindInDeclarator => find_in_declarator(node, markers),
            NameStrategy::FindCallTarget => child_by_fields(node, markers.call_target_fields)
                .or_else(|| node.named_child(0)),
            NameStrategy::Custom => {
                return self.extract_custom_name(node, content);
            }
        };
        found
            .map(|n| node_text(n, content).to_string())
            .unwrap_or_default()
    }

    /// Hook for [`NameStrategy::Custom`]; default extracts nothing.
    fn extract_custom_name(&self, _node: Node<'_>, _content: &str) -> String {
        String::new()
    }

    /// Literal or atomic value carried by a node, empty for non-values.
    fn extract_node_value(&self, node: Node<'_>, content: &str) -> String {
        let code = self.node_config(node.kind()).semantic_type;
        if semantic::is_literal(code) {
            node_text(node, content).to_string()
        } else {
            String::new()
        }
    }

    /// Whether a named node is externally visible. The default treats
    /// underscore-prefixed names as private; languages with stronger
    /// conventions (Go's capitalization rule) override this.
    fn is_public_node(&self, node: Node<'_>, content: &str) -> bool {
        let name = self.extract_node_name(node, content);
        !name.starts_with('_')
    }

    /// Construct an independent parser handle bound to this grammar.
    ///
    /// Never share the returned parser across threads; call this once per
    /// parse instead.
    fn create_fresh_parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.grammar())
            .map_err(|_| Error::GrammarAbiMismatch {
                language: self.language_name().to_string(),
                version: self.grammar().abi_version(),
                minimum: tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
                maximum: tree_sitter::LANGUAGE_VERSION,
            })?;
        Ok(parser)
    }

    /// Parse a content string into a grammar tree.
    fn parse_content(&self, content: &str, file_path: &Path) -> Result<Tree> {
        let mut parser = self.create_fresh_parser()?;
        parser.parse(content, None).ok_or_else(|| Error::ParseFailed {
            path: file_path.to_path_buf(),
            message: "parser produced no tree".to_string(),
        })
    }
}

/// Resolve dotted/scoped name nodes, falling back to a plain identifier.
fn find_qualified_identifier<'t>(node: Node<'t>, markers: &LanguageMarkers) -> Option<Node<'t>> {
    const QUALIFIED_KINDS: &[&str] = &[
        "qualified_identifier",
        "scoped_identifier",
        "dotted_name",
        "attribute",
        "member_expression",
        "namespace_name",
        "qualified_name",
    ];
    let mut cursor = node.walk();
    let qualified = node
        .named_children(&mut cursor)
        .find(|child| QUALIFIED_KINDS.contains(&child.kind()));
    qualified.or_else(|| find_identifier_child(node, markers))
}

/// Unwrap C-family declarator nesting down to the naming identifier.
fn find_in_declarator<'t>(node: Node<'t>, markers: &LanguageMarkers) -> Option<Node<'t>> {
    let mut current = node;
    for _ in 0..8 {
        if markers.identifier_kinds.contains(&current.kind()) {
            return Some(current);
        }
        match child_by_fields(current, &["declarator", "name"]) {
            Some(next) => current = next,
            None => return find_identifier_child(current, markers),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_type_uses_default_config() {
        let adapter = go::GoAdapter;
        let cfg = adapter.node_config("definitely_not_a_go_node");
        assert_eq!(cfg, NodeConfig::default());
        assert_eq!(adapter.normalized_type("definitely_not_a_go_node"), "LITERAL_NUMBER");
    }

    #[test]
    fn fresh_parsers_are_independent() {
        let adapter = python::PythonAdapter;
        let mut a = adapter.create_fresh_parser().unwrap();
        let mut b = adapter.create_fresh_parser().unwrap();
        assert!(a.parse("x = 1", None).is_some());
        assert!(b.parse("y = 2", None).is_some());
    }

    #[test]
    fn go_name_extraction_finds_the_function_name() {
        let adapter = go::GoAdapter;
        let content = "func Add(a int, b int) int { return a + b }";
        let tree = adapter.parse_content(content, Path::new("add.go")).unwrap();
        let func = tree.root_node().named_child(0).unwrap();
        assert_eq!(adapter.extract_node_name(func, content), "Add");
    }

    #[test]
    fn literal_nodes_carry_their_value_and_others_do_not() {
        let adapter = python::PythonAdapter;
        let content = "x = 42";
        let tree = adapter.parse_content(content, Path::new("v.py")).unwrap();
        let assignment = tree
            .root_node()
            .named_child(0)
            .unwrap()
            .named_child(0)
            .unwrap();
        let value = assignment.child_by_field_name("right").unwrap();
        assert_eq!(adapter.extract_node_value(value, content), "42");
        // Identifiers are names, not values.
        let target = assignment.child_by_field_name("left").unwrap();
        assert_eq!(adapter.extract_node_value(target, content), "");
    }

    #[test]
    fn go_visibility_follows_capitalization() {
        let adapter = go::GoAdapter;
        let content = "func Add() {}\nfunc helper() {}";
        let tree = adapter.parse_content(content, Path::new("v.go")).unwrap();
        let exported = tree.root_node().named_child(0).unwrap();
        let internal = tree.root_node().named_child(1).unwrap();
        assert!(adapter.is_public_node(exported, content));
        assert!(!adapter.is_public_node(internal, content));
    }
}
