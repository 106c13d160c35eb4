//! HTML adapter.

use std::sync::LazyLock;

use tree_sitter::Node;

use crate::native::node_text;
use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic as s;

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        ("document", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        ("doctype", NodeConfig::typed(s::METADATA_DIRECTIVE)),
        (
            "element",
            NodeConfig::with_strategies(s::ORGANIZATION_BLOCK, N::Custom, V::None),
        ),
        ("start_tag", NodeConfig::typed(s::PARSER_SYNTAX)),
        ("end_tag", NodeConfig::typed(s::PARSER_SYNTAX)),
        (
            "self_closing_tag",
            NodeConfig::typed(s::PARSER_SYNTAX),
        ),
        ("tag_name", NodeConfig::text(s::NAME_IDENTIFIER)),
        (
            "attribute",
            NodeConfig::with_strategies(s::METADATA_ANNOTATION, N::FirstChild, V::None),
        ),
        ("attribute_name", NodeConfig::text(s::NAME_IDENTIFIER)),
        ("attribute_value", NodeConfig::typed(s::LITERAL_STRING)),
        ("quoted_attribute_value", NodeConfig::typed(s::LITERAL_STRING)),
        ("text", NodeConfig::typed(s::LITERAL_STRING)),
        ("comment", NodeConfig::typed(s::METADATA_COMMENT)),
        ("script_element", NodeConfig::typed(s::EXTERNAL_EMBED)),
        ("style_element", NodeConfig::typed(s::EXTERNAL_EMBED)),
        ("raw_text", NodeConfig::typed(s::EXTERNAL_EMBED)),
        ("erroneous_end_tag", NodeConfig::typed(s::PARSER_SYNTAX)),
    ])
});

/// HTML adapter.
pub struct HtmlAdapter;

impl LanguageAdapter for HtmlAdapter {
    fn language_name(&self) -> &'static str {
        "html"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["htm"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_html::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }

    /// An element is named by the tag inside its start tag.
    fn extract_custom_name(&self, node: Node<'_>, content: &str) -> String {
        let mut cursor = node.walk();
        let tag = node
            .named_children(&mut cursor)
            .find(|child| {
                matches!(child.kind(), "start_tag" | "self_closing_tag")
            })
            .and_then(|tag| {
                let mut inner = tag.walk();
                tag.named_children(&mut inner)
                    .find(|c| c.kind() == "tag_name")
                    .map(|n| node_text(n, content).to_string())
            });
        tag.unwrap_or_default()
    }
}
