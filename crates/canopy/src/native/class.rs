//! Class-like signature extraction: base lists, kind discrimination,
//! modifiers.

use tree_sitter::Node;

use crate::types::NativeContext;

use super::markers::LanguageMarkers;
use super::{child_by_fields, collect_modifiers, node_text};

/// Extract a class/struct/interface/enum signature.
///
/// `signature_type` carries the base/interface list as comma-joined names,
/// empty for classes without inheritance. The construct kind itself (struct
/// vs. interface vs. enum) is already carried by the node's raw type and
/// semantic refinement bits, so it is not repeated here.
#[must_use]
pub fn extract_class(node: Node<'_>, content: &str, markers: &LanguageMarkers) -> NativeContext {
    let mut ctx = NativeContext {
        modifiers: collect_modifiers(node, content, markers),
        ..NativeContext::default()
    };

    let clause = child_by_fields(node, &["superclass", "superclasses", "bases", "interfaces"])
        .or_else(|| super::child_of_kinds(node, markers.base_clause_kinds));
    if let Some(clause) = clause {
        ctx.signature_type = base_names(clause, content, markers).join(", ");
    }

    ctx
}

/// Identifier-like names inside a base/heritage clause, in source order.
fn base_names(clause: Node<'_>, content: &str, markers: &LanguageMarkers) -> Vec<String> {
    // Some grammars bind a single base directly (Ruby's `superclass` holds
    // one constant); others wrap a list.
    if markers.identifier_kinds.contains(&clause.kind()) {
        return vec![node_text(clause, content).to_string()];
    }
    let mut names = Vec::new();
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if markers.identifier_kinds.contains(&child.kind())
            || child.kind().ends_with("_type")
            || child.kind() == "scoped_type_identifier"
            || child.kind() == "generic_type"
        {
            names.push(node_text(child, content).to_string());
        } else if child.named_child_count() > 0 {
            // extends_clause wrapping an expression, delegation specifiers
            names.extend(base_names(child, content, markers));
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::markers::DEFAULT_MARKERS;
    use tree_sitter::Parser;

    fn parse(content: &str, language: &tree_sitter::Language) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(language).unwrap();
        parser.parse(content, None).unwrap()
    }

    #[test]
    fn python_base_classes_are_collected() {
        let content = "class Square(Shape, Printable):\n    pass\n";
        let tree = parse(content, &tree_sitter_python::LANGUAGE.into());
        let class = tree.root_node().named_child(0).unwrap();
        let ctx = extract_class(class, content, &DEFAULT_MARKERS);
        assert_eq!(ctx.signature_type, "Shape, Printable");
    }

    #[test]
    fn python_plain_class_has_empty_signature() {
        let content = "class Plain:\n    pass\n";
        let tree = parse(content, &tree_sitter_python::LANGUAGE.into());
        let class = tree.root_node().named_child(0).unwrap();
        let ctx = extract_class(class, content, &DEFAULT_MARKERS);
        assert!(ctx.signature_type.is_empty());
    }

    #[test]
    fn javascript_extends_clause_is_resolved() {
        let content = "class Button extends Widget {}";
        let tree = parse(content, &tree_sitter_javascript::LANGUAGE.into());
        let class = tree.root_node().named_child(0).unwrap();
        let ctx = extract_class(class, content, &DEFAULT_MARKERS);
        assert_eq!(ctx.signature_type, "Widget");
    }
}
