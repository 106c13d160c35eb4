//! Canopy parses source files in many languages and flattens each concrete
//! syntax tree into one uniform, semantically typed node stream.
//!
//! Every retained node carries a deterministic 64-bit id, an 8-bit semantic
//! taxonomy code, tree structure (parent, depth, sibling index), and, at the
//! highest extraction level, a structured signature for functions, classes,
//! variables, and calls. A parallel scheduler fans file lists out across
//! worker tasks and merges their buffers deterministically.
//!
//! # Quick Start
//!
//! ```
//! use std::path::Path;
//!
//! use canopy::{AdapterRegistry, ExtractionConfig, parse_to_ast_result};
//!
//! let registry = AdapterRegistry::with_builtin_languages();
//! let result = parse_to_ast_result(
//!     &registry,
//!     "def hello():\n    return 1\n",
//!     "python",
//!     Path::new("hello.py"),
//!     &ExtractionConfig::default(),
//! )?;
//! assert!(result.node_count() > 0);
//! assert_eq!(result.nodes[0].depth, 0);
//! # Ok::<(), canopy::Error>(())
//! ```
//!
//! Multi-file parsing goes through
//! [`parse_files_to_collection_parallel`], which preserves input-file order
//! in its merged output regardless of thread count.

pub mod error;
pub mod languages;
pub mod native;
pub mod node_config;
pub mod parallel;
pub mod registry;
pub mod semantic;
pub mod types;
pub mod walker;

pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use languages::LanguageAdapter;
pub use node_config::{NameStrategy, NativeStrategy, NodeConfig};
pub use parallel::{ParsingProgress, parse_files_to_collection_parallel};
pub use registry::AdapterRegistry;
pub use types::{
    AstNode, AstResult, AstResultCollection, AstSource, ContextLevel, ExtractionConfig,
    LocationLevel, NO_PARENT, NativeContext, ParameterInfo, ParseFileSpec, PeekLevel,
    StructureLevel,
};
pub use walker::parse_to_ast_result;
