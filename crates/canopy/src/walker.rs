//! Pre-order CST traversal producing the flattened node stream.
//!
//! The walk is a two-visit stack: a node is emitted on entry and revisited
//! after its subtree completes. Pre-order output makes every subtree a
//! contiguous run, so the exit visit can count descendants in O(1) as
//! `nodes.len() - index - 1`.

use std::path::Path;
use std::time::Instant;

use tree_sitter::Node;

use crate::error::Result;
use crate::languages::LanguageAdapter;
use crate::native::{self, node_text};
use crate::registry::AdapterRegistry;
use crate::types::{
    AstNode, AstResult, AstSource, ContextLevel, ExtractionConfig, LocationLevel, NO_PARENT,
    PeekLevel, StructureLevel, node_id_for,
};

/// Parse one content string and build its node stream.
///
/// This is the single-file entry point; the scheduler in
/// [`crate::parallel`] calls it once per file.
///
/// # Errors
///
/// Fails when the language is not registered, the grammar fails ABI
/// validation, or the parser produces no tree.
pub fn parse_to_ast_result(
    registry: &AdapterRegistry,
    content: &str,
    language: &str,
    file_path: &Path,
    config: &ExtractionConfig,
) -> Result<AstResult> {
    let adapter = registry.resolve(language)?;
    let started = Instant::now();
    let tree = adapter.parse_content(content, file_path)?;
    let mut result = build_nodes(adapter.as_ref(), tree.root_node(), content, file_path, config);
    result.source.language = adapter.language_name().to_string();
    result.parse_time = started.elapsed();
    tracing::debug!(
        path = %file_path.display(),
        language = adapter.language_name(),
        nodes = result.node_count(),
        max_depth = result.max_depth,
        "parsed file"
    );
    Ok(result)
}

enum Visit<'t> {
    Enter {
        node: Node<'t>,
        parent_id: i64,
        depth: u32,
        sibling_index: u32,
    },
    Exit {
        out_index: usize,
    },
}

fn build_nodes(
    adapter: &dyn LanguageAdapter,
    root: Node<'_>,
    content: &str,
    file_path: &Path,
    config: &ExtractionConfig,
) -> AstResult {
    let path_str = file_path.to_string_lossy();
    let mut nodes: Vec<AstNode> = Vec::new();
    let mut max_depth = 0;

    let mut stack = vec![Visit::Enter {
        node: root,
        parent_id: NO_PARENT,
        depth: 0,
        sibling_index: 0,
    }];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter {
                node,
                parent_id,
                depth,
                sibling_index,
            } => {
                max_depth = max_depth.max(depth);
                let out_index = nodes.len();
                let record = make_node(
                    adapter,
                    node,
                    content,
                    &path_str,
                    parent_id,
                    depth,
                    sibling_index,
                    config,
                );
                let id = record.node_id;
                nodes.push(record);
                stack.push(Visit::Exit { out_index });

                let mut cursor = node.walk();
                let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
                if config.structure >= StructureLevel::Full {
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        nodes[out_index].children_count = Some(children.len() as u32);
                    }
                }
                // Reverse push keeps the left-to-right pre-order.
                for (index, child) in children.into_iter().enumerate().rev() {
                    #[allow(clippy::cast_possible_truncation)]
                    stack.push(Visit::Enter {
                        node: child,
                        parent_id: id,
                        depth: depth + 1,
                        sibling_index: index as u32,
                    });
                }
            }
            Visit::Exit { out_index } => {
                if config.structure >= StructureLevel::Full {
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        nodes[out_index].descendant_count =
                            Some((nodes.len() - out_index - 1) as u32);
                    }
                }
            }
        }
    }

    AstResult {
        source: AstSource {
            file_path: file_path.to_path_buf(),
            language: String::new(),
        },
        nodes,
        max_depth,
        parse_time: std::time::Duration::ZERO,
    }
}

#[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
fn make_node(
    adapter: &dyn LanguageAdapter,
    node: Node<'_>,
    content: &str,
    path_str: &str,
    parent_id: i64,
    depth: u32,
    sibling_index: u32,
    config: &ExtractionConfig,
) -> AstNode {
    let start_byte = node.start_byte();
    let end_byte = node.end_byte();

    let (start_line, end_line) = if config.location >= LocationLevel::Lines {
        (
            node.start_position().row as u32 + 1,
            node.end_position().row as u32 + 1,
        )
    } else {
        (0, 0)
    };
    let (start_column, end_column) = if config.location >= LocationLevel::Full {
        (
            Some(node.start_position().column as u32),
            Some(node.end_position().column as u32),
        )
    } else {
        (None, None)
    };

    let (parent_id, depth, sibling_index) = if config.structure >= StructureLevel::Minimal {
        (parent_id, depth, sibling_index)
    } else {
        (NO_PARENT, 0, 0)
    };

    let node_config = adapter.node_config(node.kind());
    let (semantic_type, flags) = if config.context >= ContextLevel::NodeTypesOnly {
        (Some(node_config.semantic_type), node_config.flags)
    } else {
        (None, 0)
    };
    // Name extraction is the expensive part; it starts one level up.
    let name = if config.context >= ContextLevel::Normalized {
        adapter.extract_node_name(node, content)
    } else {
        String::new()
    };

    let native = if config.context >= ContextLevel::Native
        && node_config.native_strategy != crate::node_config::NativeStrategy::None
    {
        Some(native::extract(
            node_config.native_strategy,
            node,
            content,
            adapter.markers(),
        ))
    } else {
        None
    };

    AstNode {
        node_id: node_id_for(path_str, start_byte, end_byte),
        node_type: node.kind().to_string(),
        name,
        semantic_type,
        flags,
        start_byte,
        end_byte,
        start_line,
        end_line,
        start_column,
        end_column,
        parent_id,
        depth,
        sibling_index,
        children_count: None,
        descendant_count: None,
        peek: peek_text(node, content, config),
        native,
    }
}

/// Cutoff below which SMART keeps the whole node text.
const SMART_FULL_LIMIT: usize = 50;
/// SMART truncation width for longer single-line nodes.
const SMART_LINE_LIMIT: usize = 80;

fn peek_text(node: Node<'_>, content: &str, config: &ExtractionConfig) -> Option<String> {
    let text = node_text(node, content);
    match config.peek {
        PeekLevel::None => None,
        PeekLevel::Smart => Some(smart_peek(text)),
        PeekLevel::Full => Some(text.to_string()),
        PeekLevel::Custom => Some(truncate_chars(text, config.peek_size).to_string()),
    }
}

fn smart_peek(text: &str) -> String {
    if text.chars().count() <= SMART_FULL_LIMIT {
        return text.to_string();
    }
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= SMART_LINE_LIMIT {
        first_line.to_string()
    } else {
        format!("{}...", truncate_chars(first_line, SMART_LINE_LIMIT - 3))
    }
}

/// Prefix of at most `limit` characters, kept on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_whole() {
        assert_eq!(smart_peek("x = 1"), "x = 1");
    }

    #[test]
    fn long_single_line_is_truncated_with_ellipsis() {
        let long = "a".repeat(120);
        let peek = smart_peek(&long);
        assert_eq!(peek.chars().count(), SMART_LINE_LIMIT);
        assert!(peek.ends_with("..."));
    }

    #[test]
    fn multi_line_text_keeps_the_first_line() {
        let text = format!("fn demo() {{{}\n    body\n}}", " ".repeat(60));
        let peek = smart_peek(&text);
        assert!(!peek.contains('\n'));
        assert!(peek.starts_with("fn demo()"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "héllo wörld, this is a multi byte string";
        let cut = truncate_chars(text, 8);
        assert_eq!(cut.chars().count(), 8);
    }
}
