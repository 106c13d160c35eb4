//! `canopy parse` command implementation.

use std::path::{Path, PathBuf};

use canopy::{
    AdapterRegistry, ContextLevel, Error, ExtractionConfig, ParseFileSpec, PeekLevel,
    parse_files_to_collection_parallel,
};
use colored::Colorize;

/// Run the parse command.
pub fn run(
    files: &[PathBuf],
    language: Option<&str>,
    threads: usize,
    ignore_errors: bool,
    context: &str,
    peek: &str,
    summary: bool,
) -> Result<(), Error> {
    let config = ExtractionConfig {
        context: parse_context_level(context)?,
        peek: parse_peek_level(peek)?,
        ..ExtractionConfig::default()
    };

    let registry = AdapterRegistry::with_builtin_languages();
    let specs = files
        .iter()
        .map(|path| {
            let lang = match language {
                Some(lang) => lang,
                None => language_for_path(path).ok_or_else(|| {
                    Error::UnsupportedLanguage(format!(
                        "cannot detect language for {}",
                        path.display()
                    ))
                })?,
            };
            Ok(ParseFileSpec::new(path, lang))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let collection = parse_files_to_collection_parallel(
        &registry,
        &specs,
        ignore_errors,
        threads,
        &config,
        None,
    )?;

    if summary {
        for result in &collection.results {
            println!(
                "{} {} {} nodes, depth {}",
                result.source.file_path.display().to_string().white().bold(),
                format!("[{}]", result.source.language).dimmed(),
                result.node_count().to_string().green(),
                result.max_depth
            );
        }
        if !collection.errors.is_empty() {
            println!();
            for error in &collection.errors {
                println!("{} {error}", "failed:".red().bold());
            }
        }
        println!(
            "\n{} files, {} nodes, {} errors",
            collection.results.len(),
            collection.total_node_count(),
            collection.errors.len()
        );
    } else {
        let json = serde_json::to_string_pretty(&collection)
            .map_err(|e| Error::Scheduling(format!("failed to serialize output: {e}")))?;
        println!("{json}");
    }

    Ok(())
}

/// Detect the language for a path from its file extension.
fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let language = match ext.as_str() {
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "rb" => "ruby",
        "kt" | "kts" => "kotlin",
        "php" => "php",
        "cs" => "csharp",
        "md" | "markdown" => "markdown",
        "html" | "htm" => "html",
        "css" => "css",
        _ => return None,
    };
    Some(language)
}

fn parse_context_level(value: &str) -> Result<ContextLevel, Error> {
    match value {
        "none" => Ok(ContextLevel::None),
        "node-types" => Ok(ContextLevel::NodeTypesOnly),
        "normalized" => Ok(ContextLevel::Normalized),
        "native" => Ok(ContextLevel::Native),
        other => Err(Error::Scheduling(format!("unknown context level: {other}"))),
    }
}

fn parse_peek_level(value: &str) -> Result<PeekLevel, Error> {
    match value {
        "none" => Ok(PeekLevel::None),
        "smart" => Ok(PeekLevel::Smart),
        "full" => Ok(PeekLevel::Full),
        other => Err(Error::Scheduling(format!("unknown peek level: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_map_to_languages() {
        assert_eq!(language_for_path(Path::new("a/b.go")), Some("go"));
        assert_eq!(language_for_path(Path::new("x.hpp")), Some("cpp"));
        assert_eq!(language_for_path(Path::new("noext")), None);
        assert_eq!(language_for_path(Path::new("w.xyz")), None);
    }
}
