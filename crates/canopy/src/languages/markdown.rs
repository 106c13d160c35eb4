//! Markdown adapter (block grammar).
//!
//! Prose has no functions or classes; headings map to sections, fenced code
//! blocks to embedded content.

use std::sync::LazyLock;

use crate::node_config::{ConfigTable, NameStrategy as N, NativeStrategy as V, NodeConfig, table_from};
use crate::semantic as s;

use super::LanguageAdapter;

static CONFIGS: LazyLock<ConfigTable> = LazyLock::new(|| {
    table_from(&[
        ("document", NodeConfig::typed(s::ORGANIZATION_CONTAINER)),
        (
            "section",
            NodeConfig::typed(s::ORGANIZATION_SECTION),
        ),
        (
            "atx_heading",
            NodeConfig::with_strategies(s::ORGANIZATION_SECTION, N::Custom, V::None),
        ),
        (
            "setext_heading",
            NodeConfig::with_strategies(s::ORGANIZATION_SECTION, N::Custom, V::None),
        ),
        ("paragraph", NodeConfig::typed(s::LITERAL_STRING)),
        ("inline", NodeConfig::typed(s::LITERAL_STRING)),
        ("fenced_code_block", NodeConfig::typed(s::EXTERNAL_EMBED)),
        ("indented_code_block", NodeConfig::typed(s::EXTERNAL_EMBED)),
        ("code_fence_content", NodeConfig::typed(s::LITERAL_STRING)),
        ("info_string", NodeConfig::text(s::METADATA_ANNOTATION)),
        ("language", NodeConfig::text(s::METADATA_ANNOTATION)),
        ("list", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("list_item", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("block_quote", NodeConfig::typed(s::ORGANIZATION_BLOCK)),
        ("html_block", NodeConfig::typed(s::EXTERNAL_EMBED)),
        ("pipe_table", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("pipe_table_row", NodeConfig::typed(s::LITERAL_STRUCTURED)),
        ("thematic_break", NodeConfig::typed(s::PARSER_DELIMITER)),
        (
            "link_reference_definition",
            NodeConfig::typed(s::EXTERNAL_IMPORT),
        ),
    ])
});

/// Markdown adapter.
pub struct MarkdownAdapter;

impl LanguageAdapter for MarkdownAdapter {
    fn language_name(&self) -> &'static str {
        "markdown"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["md"]
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn config_table(&self) -> &ConfigTable {
        &CONFIGS
    }

    /// Heading text without the leading `#` markers.
    fn extract_custom_name(&self, node: tree_sitter::Node<'_>, content: &str) -> String {
        crate::native::node_text(node, content)
            .trim_start_matches(['#', ' '])
            .trim_end()
            .to_string()
    }
}
