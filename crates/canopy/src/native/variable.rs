//! Variable-like signature extraction: declared type and modifiers.

use tree_sitter::Node;

use crate::types::NativeContext;

use super::markers::LanguageMarkers;
use super::{child_by_fields, collect_modifiers, node_text};

/// Extract a variable/field declaration's type and modifiers.
///
/// `signature_type` is the declared type text, empty for inferred or untyped
/// declarations. Mutability and visibility keywords land in `modifiers`.
#[must_use]
pub fn extract_variable(node: Node<'_>, content: &str, markers: &LanguageMarkers) -> NativeContext {
    let mut ctx = NativeContext {
        modifiers: collect_modifiers(node, content, markers),
        ..NativeContext::default()
    };

    let declared = child_by_fields(node, markers.type_fields).or_else(|| {
        // C-family declarations nest the type one level down in a declarator.
        child_by_fields(node, &["declarator"])
            .and_then(|declarator| child_by_fields(declarator, markers.type_fields))
    });
    if let Some(declared) = declared {
        ctx.signature_type = node_text(declared, content).to_string();
    }

    // Leading let/var/const keywords read as mutability markers even when
    // the grammar does not classify them as modifiers.
    if let Some(first) = node.child(0) {
        let text = node_text(first, content);
        if matches!(text, "let" | "var" | "const" | "val" | "mut" | "final")
            && !ctx.modifiers.iter().any(|m| m == text)
        {
            ctx.modifiers.insert(0, text.to_string());
        }
    }

    ctx
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
    fn go_var_declaration_reports_its_type() {
        let content = "package p\nvar count int";
        let tree = parse(content, &tree_sitter_go::LANGUAGE.into());
        let decl = tree.root_node().named_child(1).unwrap();
        let spec = decl.named_child(0).unwrap();
        let ctx = extract_variable(spec, content, &DEFAULT_MARKERS);
        assert_eq!(ctx.signature_type, "int");
    }

    #[test]
    fn javascript_const_is_recorded_as_modifier() {
        let content = "const answer = 42;";
        let tree = parse(content, &tree_sitter_javascript::LANGUAGE.into());
        let decl = tree.root_node().named_child(0).unwrap();
        let ctx = extract_variable(decl, content, &DEFAULT_MARKERS);
        assert!(ctx.modifiers.iter().any(|m| m == "const"));
        assert!(ctx.signature_type.is_empty());
    }
}
