//! Call-like extraction: callee resolution and argument summary.

use tree_sitter::Node;

use crate::types::{NativeContext, ParameterInfo};

use super::markers::LanguageMarkers;
use super::{child_by_fields, child_of_kinds, node_text};

/// Extract a call expression's callee and arguments.
///
/// `signature_type` carries the callee text. Each argument becomes a
/// `ParameterInfo`: named arguments bind `name` to the keyword and
/// `default_value` to the value text; positional arguments carry their full
/// source text in `default_value` with an empty `name`.
#[must_use]
pub fn extract_call(node: Node<'_>, content: &str, markers: &LanguageMarkers) -> NativeContext {
    let mut ctx = NativeContext::default();

    if let Some(callee) = child_by_fields(node, markers.call_target_fields) {
        ctx.signature_type = node_text(callee, content).to_string();
    }

    let container = child_by_fields(node, markers.argument_fields)
        .or_else(|| child_of_kinds(node, markers.argument_containers));
    let Some(container) = container else {
        return ctx;
    };

    let mut cursor = container.walk();
    for arg in container.named_children(&mut cursor) {
        if arg.kind() == "comment" {
            continue;
        }
        ctx.parameters.push(argument_info(arg, content, markers));
    }
    ctx
}

fn argument_info(arg: Node<'_>, content: &str, markers: &LanguageMarkers) -> ParameterInfo {
    if markers.named_argument_kinds.contains(&arg.kind()) {
        let name = child_by_fields(arg, &["name", "key"])
            .or_else(|| arg.named_child(0))
            .map(|n| node_text(n, content).to_string())
            .unwrap_or_default();
        let value = child_by_fields(arg, &["value"])
            .or_else(|| arg.named_child(1))
            .map(|v| node_text(v, content).to_string())
            .unwrap_or_default();
        return ParameterInfo {
            name,
            default_value: value,
            ..ParameterInfo::default()
        };
    }
    ParameterInfo {
        default_value: node_text(arg, content).to_string(),
        is_variadic: markers.variadic_kinds.contains(&arg.kind()),
        ..ParameterInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::markers::DEFAULT_MARKERS;
    use tree_sitter::Parser;

    fn parse_python(content: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        parser.parse(content, None).unwrap()
    }

    fn first_call<'t>(tree: &'t tree_sitter::Tree) -> Node<'t> {
        // expression_statement > call
        tree.root_node()
            .named_child(0)
            .unwrap()
            .named_child(0)
            .unwrap()
    }

    #[test]
    fn positional_and_keyword_arguments_are_distinguished() {
        let content = "download(url, timeout=30)\n";
        let tree = parse_python(content);
        let ctx = extract_call(first_call(&tree), content, &DEFAULT_MARKERS);
        assert_eq!(ctx.signature_type, "download");
        assert_eq!(ctx.parameters.len(), 2);
        assert_eq!(ctx.parameters[0].name, "");
        assert_eq!(ctx.parameters[0].default_value, "url");
        assert_eq!(ctx.parameters[1].name, "timeout");
        assert_eq!(ctx.parameters[1].default_value, "30");
    }

    #[test]
    fn method_call_target_includes_the_receiver_chain() {
        let content = "client.session.get(url)\n";
        let tree = parse_python(content);
        let ctx = extract_call(first_call(&tree), content, &DEFAULT_MARKERS);
        assert_eq!(ctx.signature_type, "client.session.get");
        assert_eq!(ctx.parameters.len(), 1);
    }
}
