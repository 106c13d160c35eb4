//! Structured signature extraction for definition and call nodes.
//!
//! Given a node and its [`NativeStrategy`], produce a [`NativeContext`] by
//! examining only the node's immediate structural children. The routines
//! never descend into nested bodies, never panic, and report nothing rather
//! than fail: a malformed node yields an empty context.

pub mod call;
pub mod class;
pub mod function;
pub mod markers;
pub mod variable;

use tree_sitter::Node;

use crate::node_config::NativeStrategy;
use crate::types::NativeContext;
use markers::LanguageMarkers;

/// Resolve and run the extraction routine for a strategy.
#[must_use]
pub fn extract(
    strategy: NativeStrategy,
    node: Node<'_>,
    content: &str,
    markers: &LanguageMarkers,
) -> NativeContext {
    match strategy {
        NativeStrategy::None => NativeContext::default(),
        NativeStrategy::FunctionWithParams
        | NativeStrategy::AsyncFunction
        | NativeStrategy::ArrowFunction
        | NativeStrategy::FunctionWithDecorators => {
            function::extract_function(node, content, markers, strategy)
        }
        NativeStrategy::ClassWithMethods | NativeStrategy::ClassWithInheritance => {
            class::extract_class(node, content, markers)
        }
        NativeStrategy::VariableWithType => variable::extract_variable(node, content, markers),
        NativeStrategy::FunctionCall => call::extract_call(node, content, markers),
    }
}

/// Bounds-checked source slice for a node.
///
/// Byte offsets out of range for the current content (grammar/content
/// desynchronization) yield an empty string instead of a panic.
#[must_use]
pub(crate) fn node_text<'a>(node: Node<'_>, content: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    content.get(start..end).unwrap_or_else(|| {
        tracing::trace!(
            kind = node.kind(),
            start,
            end,
            content_len = content.len(),
            "node byte range out of bounds, substituting empty text"
        );
        ""
    })
}

/// First child reachable through any of the given field names.
pub(crate) fn child_by_fields<'t>(
    node: Node<'t>,
    fields: &[&'static str],
) -> Option<Node<'t>> {
    fields
        .iter()
        .find_map(|field| node.child_by_field_name(field))
}

/// First immediate named child whose kind is in `kinds`.
pub(crate) fn child_of_kinds<'t>(
    node: Node<'t>,
    kinds: &[&'static str],
) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()));
    found
}

/// First immediate child (named or anonymous) whose kind is an identifier
/// per the language's marker table.
pub(crate) fn find_identifier_child<'t>(
    node: Node<'t>,
    markers: &LanguageMarkers,
) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| markers.identifier_kinds.contains(&child.kind()));
    found
}

/// Collect modifier text from immediate children, in source order.
///
/// Modifier tokens are often anonymous nodes (`async`, `static`), so this
/// scan covers all children, not just named ones. Container kinds such as
/// Java's `modifiers` are flattened one level.
pub(crate) fn collect_modifiers(
    node: Node<'_>,
    content: &str,
    markers: &LanguageMarkers,
) -> Vec<String> {
    let mut modifiers = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !markers.modifier_kinds.contains(&child.kind()) {
            continue;
        }
        if child.named_child_count() > 0 {
            let mut inner = child.walk();
            for item in child.children(&mut inner) {
                let text = node_text(item, content);
                if !text.is_empty() {
                    modifiers.push(text.to_string());
                }
            }
        } else {
            let text = node_text(child, content);
            if !text.is_empty() {
                modifiers.push(text.to_string());
            }
        }
    }
    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_go(content: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .unwrap();
        parser.parse(content, None).unwrap()
    }

    #[test]
    fn node_text_recovers_from_bad_ranges() {
        let content = "package main";
        let tree = parse_go(content);
        let root = tree.root_node();
        // Slicing against shorter content simulates desynchronization.
        assert_eq!(node_text(root, "pkg"), "");
        assert_eq!(node_text(root, content), "package main");
    }

    #[test]
    fn child_by_fields_tries_candidates_in_order() {
        let content = "func Add(a int) int { return a }";
        let tree = parse_go(content);
        let func = tree.root_node().named_child(0).unwrap();
        let ret = child_by_fields(func, &["return_type", "result"]).unwrap();
        assert_eq!(node_text(ret, content), "int");
        assert!(child_by_fields(func, &["no_such_field"]).is_none());
    }
}
