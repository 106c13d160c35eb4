//! Function-like signature extraction: parameters, return type, modifiers.

use tree_sitter::Node;

use crate::node_config::NativeStrategy;
use crate::types::{NativeContext, ParameterInfo};

use super::markers::LanguageMarkers;
use super::{child_by_fields, child_of_kinds, collect_modifiers, find_identifier_child, node_text};

/// Extract a function/method signature from a definition node.
///
/// Only immediate children are inspected; the body is never entered.
#[must_use]
pub fn extract_function(
    node: Node<'_>,
    content: &str,
    markers: &LanguageMarkers,
    strategy: NativeStrategy,
) -> NativeContext {
    let mut ctx = NativeContext {
        modifiers: collect_modifiers(node, content, markers),
        ..NativeContext::default()
    };

    if strategy == NativeStrategy::AsyncFunction && !ctx.modifiers.iter().any(|m| m == "async") {
        ctx.modifiers.push("async".to_string());
    }
    if strategy == NativeStrategy::FunctionWithDecorators {
        collect_decorators(node, content, markers, &mut ctx.modifiers);
    }

    // A parameter list bound to a receiver field belongs to the method's
    // receiver, not its signature proper.
    if let Some(receiver) = child_by_fields(node, markers.receiver_fields) {
        for mut param in parameters_from_container(receiver, content, markers) {
            param.annotations = "receiver".to_string();
            ctx.parameters.push(param);
        }
    }

    // C-family grammars nest the parameter list inside declarator wrappers,
    // so the search may step down through `declarator` fields.
    let mut holder = node;
    let mut container = None;
    for _ in 0..3 {
        container = child_by_fields(holder, markers.parameter_fields)
            .or_else(|| child_of_kinds(holder, markers.parameter_containers));
        if container.is_some() {
            break;
        }
        match child_by_fields(holder, &["declarator"]) {
            Some(next) => holder = next,
            None => break,
        }
    }
    if let Some(container) = container {
        ctx.parameters
            .extend(parameters_from_container(container, content, markers));
    } else if strategy == NativeStrategy::ArrowFunction {
        // `x => x` keeps its single parameter as a bare identifier.
        if let Some(ident) = find_identifier_child(node, markers) {
            ctx.parameters
                .push(ParameterInfo::named(node_text(ident, content), ""));
        }
    }

    if let Some(ret) = child_by_fields(node, markers.return_type_fields) {
        ctx.signature_type = node_text(ret, content).to_string();
    }

    ctx
}

/// Decorators sit either among the node's children (MATLAB-style grammars)
/// or as preceding siblings under a wrapper node (Python's
/// `decorated_definition`). Record their text as modifiers.
fn collect_decorators(
    node: Node<'_>,
    content: &str,
    markers: &LanguageMarkers,
    modifiers: &mut Vec<String>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if markers.decorator_kinds.contains(&child.kind()) {
            modifiers.push(node_text(child, content).to_string());
        }
    }
    let mut sibling = node.prev_named_sibling();
    while let Some(prev) = sibling {
        if !markers.decorator_kinds.contains(&prev.kind()) {
            break;
        }
        modifiers.insert(0, node_text(prev, content).to_string());
        sibling = prev.prev_named_sibling();
    }
}

/// Expand a parameter container into ordered `ParameterInfo`s.
pub(super) fn parameters_from_container(
    container: Node<'_>,
    content: &str,
    markers: &LanguageMarkers,
) -> Vec<ParameterInfo> {
    // Arrow functions may bind a bare identifier instead of a list.
    if markers.identifier_kinds.contains(&container.kind()) {
        return vec![ParameterInfo::named(node_text(container, content), "")];
    }

    let mut params = Vec::new();
    let mut cursor = container.walk();
    for child in container.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        expand_parameter(child, content, markers, &mut params);
    }
    params
}

/// Turn one parameter node into one or more `ParameterInfo`s.
///
/// Go-style grouped declarations (`a, b int`) carry several name fields
/// sharing one type and produce one entry per name.
fn expand_parameter(
    node: Node<'_>,
    content: &str,
    markers: &LanguageMarkers,
    out: &mut Vec<ParameterInfo>,
) {
    let is_variadic =
        markers.variadic_kinds.contains(&node.kind()) || node_text(node, content).starts_with("...");

    let param_type = child_by_fields(node, markers.type_fields)
        .map(|t| node_text(t, content).to_string())
        .unwrap_or_default();
    let default_value = markers
        .value_fields
        .iter()
        .find_map(|field| node.child_by_field_name(field))
        .map(|v| node_text(v, content).to_string())
        .unwrap_or_default();
    let is_optional = !default_value.is_empty() || node.kind().contains("optional");
    let annotations = super::child_of_kinds(node, markers.decorator_kinds)
        .map(|a| node_text(a, content).to_string())
        .unwrap_or_default();

    let mut names: Vec<String> = Vec::new();
    for field in markers.name_fields {
        let mut cursor = node.walk();
        for name_node in node.children_by_field_name(field, &mut cursor) {
            names.push(node_text(name_node, content).to_string());
        }
        if !names.is_empty() {
            break;
        }
    }
    if names.is_empty() {
        if markers.identifier_kinds.contains(&node.kind()) {
            names.push(node_text(node, content).to_string());
        } else if let Some(ident) = find_identifier_child(node, markers) {
            names.push(node_text(ident, content).to_string());
        }
    }
    if names.is_empty() {
        // Unnamed parameter (C prototypes, type-only declarations).
        let fallback_type = if param_type.is_empty() {
            node_text(node, content).trim_start_matches("...").to_string()
        } else {
            param_type.clone()
        };
        out.push(ParameterInfo {
            param_type: fallback_type,
            is_optional,
            is_variadic,
            default_value,
            annotations,
            ..ParameterInfo::default()
        });
        return;
    }

    for name in names {
        out.push(ParameterInfo {
            name,
            param_type: param_type.clone(),
            default_value: default_value.clone(),
            is_optional,
            is_variadic,
            annotations: annotations.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::markers::DEFAULT_MARKERS;
    use tree_sitter::Parser;

    fn first_named(content: &str, language: &tree_sitter::Language) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(language).unwrap();
        parser.parse(content, None).unwrap()
    }

    #[test]
    fn go_function_signature_is_fully_extracted() {
        let content = "func Add(a int, b int) int { return a + b }";
        let tree = first_named(content, &tree_sitter_go::LANGUAGE.into());
        let func = tree.root_node().named_child(0).unwrap();
        let ctx = extract_function(
            func,
            content,
            &DEFAULT_MARKERS,
            NativeStrategy::FunctionWithParams,
        );
        assert_eq!(ctx.signature_type, "int");
        assert_eq!(
            ctx.parameters,
            vec![
                ParameterInfo::named("a", "int"),
                ParameterInfo::named("b", "int"),
            ]
        );
        assert!(ctx.modifiers.is_empty());
    }

    #[test]
    fn go_grouped_parameters_share_their_type() {
        let content = "func Sub(a, b int) int { return a - b }";
        let tree = first_named(content, &tree_sitter_go::LANGUAGE.into());
        let func = tree.root_node().named_child(0).unwrap();
        let ctx = extract_function(
            func,
            content,
            &DEFAULT_MARKERS,
            NativeStrategy::FunctionWithParams,
        );
        assert_eq!(
            ctx.parameters,
            vec![
                ParameterInfo::named("a", "int"),
                ParameterInfo::named("b", "int"),
            ]
        );
    }

    #[test]
    fn go_variadic_parameter_is_flagged() {
        let content = "func Join(parts ...string) string { return \"\" }";
        let tree = first_named(content, &tree_sitter_go::LANGUAGE.into());
        let func = tree.root_node().named_child(0).unwrap();
        let ctx = extract_function(
            func,
            content,
            &DEFAULT_MARKERS,
            NativeStrategy::FunctionWithParams,
        );
        assert_eq!(ctx.parameters.len(), 1);
        assert_eq!(ctx.parameters[0].name, "parts");
        assert!(ctx.parameters[0].is_variadic);
    }

    #[test]
    fn go_method_receiver_is_annotated() {
        let content = "func (c *Counter) Inc() { c.n++ }";
        let tree = first_named(content, &tree_sitter_go::LANGUAGE.into());
        let method = tree.root_node().named_child(0).unwrap();
        let ctx = extract_function(
            method,
            content,
            &DEFAULT_MARKERS,
            NativeStrategy::FunctionWithParams,
        );
        assert_eq!(ctx.parameters.len(), 1);
        assert_eq!(ctx.parameters[0].name, "c");
        assert_eq!(ctx.parameters[0].annotations, "receiver");
    }

    #[test]
    fn python_defaults_mark_parameters_optional() {
        let content = "def greet(name, punct=\"!\"):\n    pass\n";
        let tree = first_named(content, &tree_sitter_python::LANGUAGE.into());
        let func = tree.root_node().named_child(0).unwrap();
        let ctx = extract_function(
            func,
            content,
            &DEFAULT_MARKERS,
            NativeStrategy::FunctionWithParams,
        );
        assert_eq!(ctx.parameters.len(), 2);
        assert!(!ctx.parameters[0].is_optional);
        assert!(ctx.parameters[1].is_optional);
        assert_eq!(ctx.parameters[1].default_value, "\"!\"");
    }
}
