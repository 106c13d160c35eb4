//! Core data model: extraction levels, node records, and per-file results.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::error::ParseError;

/// Sentinel `parent_id` for root nodes.
pub const NO_PARENT: i64 = -1;

// ===========================================================================
// Extraction levels
// ===========================================================================

/// How much semantic context to attach to each node.
///
/// Levels are ordered; each level populates everything the levels below it
/// populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContextLevel {
    /// No context fields at all.
    None,
    /// Raw grammar node types only.
    NodeTypesOnly,
    /// Semantic type, flags, and extracted names.
    #[default]
    Normalized,
    /// Everything above plus structured signatures for definition and call
    /// nodes.
    Native,
}

/// How much positional information to attach to each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationLevel {
    /// No location fields.
    None,
    /// File path and language only.
    InputOnly,
    /// Start and end line numbers.
    #[default]
    Lines,
    /// Line and column numbers.
    Full,
}

/// How much tree structure to attach to each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StructureLevel {
    /// No structural fields.
    None,
    /// Parent id, depth, and sibling index.
    Minimal,
    /// Everything above plus child and descendant counts.
    #[default]
    Full,
}

/// Source-text preview policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeekLevel {
    /// No preview text.
    None,
    /// Adaptive preview: short nodes in full, long single lines truncated,
    /// multi-line nodes reduced to their first line.
    #[default]
    Smart,
    /// The node's complete source text.
    Full,
    /// A fixed-size prefix; the size comes from `ExtractionConfig::peek_size`.
    Custom,
}

/// The four independent detail knobs for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Semantic detail level.
    pub context: ContextLevel,
    /// Positional detail level.
    pub location: LocationLevel,
    /// Structural detail level.
    pub structure: StructureLevel,
    /// Preview policy.
    pub peek: PeekLevel,
    /// Prefix length in bytes, used only when `peek` is [`PeekLevel::Custom`].
    pub peek_size: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context: ContextLevel::default(),
            location: LocationLevel::default(),
            structure: StructureLevel::default(),
            peek: PeekLevel::default(),
            peek_size: 120,
        }
    }
}

impl ExtractionConfig {
    /// Everything on: full context, locations, structure, and source text.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            context: ContextLevel::Native,
            location: LocationLevel::Full,
            structure: StructureLevel::Full,
            peek: PeekLevel::Full,
            peek_size: 120,
        }
    }

    /// Structure-only skeleton with no text or semantic decoration.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            context: ContextLevel::NodeTypesOnly,
            location: LocationLevel::InputOnly,
            structure: StructureLevel::Minimal,
            peek: PeekLevel::None,
            peek_size: 0,
        }
    }
}

// ===========================================================================
// Native signature model
// ===========================================================================

/// One parameter of a function-like signature.
///
/// Absent pieces are empty strings or `false`, never nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name.
    pub name: String,
    /// Declared type text, empty when untyped.
    #[serde(rename = "type")]
    pub param_type: String,
    /// Default value text, empty when none.
    pub default_value: String,
    /// True when the parameter has a default or is otherwise optional.
    pub is_optional: bool,
    /// True for rest/spread/variadic parameters.
    pub is_variadic: bool,
    /// Decorator or annotation text attached to the parameter.
    pub annotations: String,
}

impl ParameterInfo {
    /// A plain `name: type` parameter.
    #[must_use]
    pub fn named(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            ..Self::default()
        }
    }
}

/// Structured signature attached to definition and call nodes at
/// [`ContextLevel::Native`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeContext {
    /// Return type for functions, declared type for variables, base list
    /// summary for classes. Empty when not applicable.
    pub signature_type: String,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterInfo>,
    /// Modifiers in source order (`async`, `static`, `pub`, ...).
    pub modifiers: Vec<String>,
}

impl NativeContext {
    /// True when extraction found nothing to report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signature_type.is_empty() && self.parameters.is_empty() && self.modifiers.is_empty()
    }
}

// ===========================================================================
// Nodes and results
// ===========================================================================

/// One retained CST node, flattened into the uniform output model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstNode {
    /// Deterministic id, a pure function of file path and byte range.
    pub node_id: i64,
    /// Raw grammar node-type string.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Extracted identifier, empty when the node has none.
    pub name: String,
    /// Semantic taxonomy code, `None` below [`ContextLevel::Normalized`].
    pub semantic_type: Option<u8>,
    /// Node flag bits (`IS_CONSTRUCT`, `IS_EMBODIED`).
    pub flags: u8,
    /// Byte offset of the node's first byte.
    pub start_byte: usize,
    /// Byte offset one past the node's last byte.
    pub end_byte: usize,
    /// 1-indexed start line, 0 when location extraction is off.
    pub start_line: u32,
    /// 1-indexed end line.
    pub end_line: u32,
    /// 0-indexed start column, `None` below [`LocationLevel::Full`].
    pub start_column: Option<u32>,
    /// 0-indexed end column.
    pub end_column: Option<u32>,
    /// Parent's `node_id`, or [`NO_PARENT`] for the root.
    pub parent_id: i64,
    /// 0 for the root, `parent.depth + 1` otherwise.
    pub depth: u32,
    /// 0-based position among siblings sharing this node's parent.
    pub sibling_index: u32,
    /// Direct child count, `None` below [`StructureLevel::Full`].
    pub children_count: Option<u32>,
    /// Total descendant count, `None` below [`StructureLevel::Full`].
    pub descendant_count: Option<u32>,
    /// Source-text preview per the peek policy.
    pub peek: Option<String>,
    /// Structured signature, populated only at [`ContextLevel::Native`] for
    /// nodes with a native extraction strategy.
    pub native: Option<NativeContext>,
}

/// Deterministic node identity: a 64-bit hash of the file path and the
/// node's byte range. Identical content at an identical path always hashes
/// to the same id.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn node_id_for(file_path: &str, start_byte: usize, end_byte: usize) -> i64 {
    let mut hasher = Xxh3::new();
    hasher.update(file_path.as_bytes());
    hasher.update(&(start_byte as u64).to_le_bytes());
    hasher.update(&(end_byte as u64).to_le_bytes());
    hasher.digest() as i64
}

/// Provenance of a parsed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstSource {
    /// Path the content was attributed to.
    pub file_path: PathBuf,
    /// Language name the adapter registry resolved.
    pub language: String,
}

/// The complete output for one parsed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstResult {
    /// Where the nodes came from.
    pub source: AstSource,
    /// Nodes in pre-order traversal order.
    pub nodes: Vec<AstNode>,
    /// Deepest `depth` value among `nodes`, 0 for an empty tree.
    pub max_depth: u32,
    /// Wall-clock time spent parsing and walking.
    pub parse_time: Duration,
}

impl AstResult {
    /// Number of retained nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Merged output of a multi-file parallel parse.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AstResultCollection {
    /// Per-file results in input-file order.
    pub results: Vec<AstResult>,
    /// Per-file failures recorded when running with `ignore_errors`.
    pub errors: Vec<ParseError>,
}

impl AstResultCollection {
    /// Total node count across all files.
    #[must_use]
    pub fn total_node_count(&self) -> usize {
        self.results.iter().map(AstResult::node_count).sum()
    }
}

/// One file queued for a parallel parse.
#[derive(Debug, Clone)]
pub struct ParseFileSpec {
    /// Path to read.
    pub path: PathBuf,
    /// Language name or alias to parse it as.
    pub language: String,
}

impl ParseFileSpec {
    /// Convenience constructor.
    pub fn new(path: impl AsRef<Path>, language: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_is_deterministic() {
        let a = node_id_for("src/main.go", 10, 42);
        let b = node_id_for("src/main.go", 10, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn node_id_varies_with_each_input() {
        let base = node_id_for("a.py", 0, 10);
        assert_ne!(base, node_id_for("b.py", 0, 10));
        assert_ne!(base, node_id_for("a.py", 1, 10));
        assert_ne!(base, node_id_for("a.py", 0, 11));
    }

    #[test]
    fn extraction_levels_order_as_documented() {
        assert!(ContextLevel::None < ContextLevel::NodeTypesOnly);
        assert!(ContextLevel::NodeTypesOnly < ContextLevel::Normalized);
        assert!(ContextLevel::Normalized < ContextLevel::Native);
        assert!(LocationLevel::InputOnly < LocationLevel::Lines);
        assert!(StructureLevel::Minimal < StructureLevel::Full);
        assert!(PeekLevel::Smart < PeekLevel::Full);
    }

    #[test]
    fn native_context_emptiness() {
        assert!(NativeContext::default().is_empty());
        let ctx = NativeContext {
            signature_type: "int".into(),
            ..NativeContext::default()
        };
        assert!(!ctx.is_empty());
    }

    #[test]
    fn parameter_named_fills_defaults() {
        let p = ParameterInfo::named("a", "int");
        assert_eq!(p.name, "a");
        assert_eq!(p.param_type, "int");
        assert!(!p.is_optional);
        assert!(!p.is_variadic);
        assert!(p.default_value.is_empty());
    }
}
