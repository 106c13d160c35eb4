//! Scheduler tests: ordering determinism, thread-count equivalence, and
//! per-file failure handling.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

use canopy::{
    AdapterRegistry, AstResultCollection, Error, ExtractionConfig, ParseErrorKind, ParseFileSpec,
    ParsingProgress, parse_files_to_collection_parallel, parse_to_ast_result,
};
use tempfile::TempDir;

fn registry() -> AdapterRegistry {
    AdapterRegistry::with_builtin_languages()
}

/// Reference result: each file parsed on its own, in input order.
fn parse_each_in_order(
    registry: &AdapterRegistry,
    specs: &[ParseFileSpec],
    config: &ExtractionConfig,
) -> AstResultCollection {
    let mut collection = AstResultCollection::default();
    for spec in specs {
        let content = fs::read_to_string(&spec.path).unwrap();
        collection.results.push(
            parse_to_ast_result(registry, &content, &spec.language, &spec.path, config).unwrap(),
        );
    }
    collection
}

/// Write a handful of small sources across languages, returning specs in a
/// fixed input order.
fn workspace_with_files() -> (TempDir, Vec<ParseFileSpec>) {
    let dir = TempDir::new().unwrap();
    let files: [(&str, &str, &str); 5] = [
        ("one.py", "python", "def one():\n    return 1\n"),
        ("two.go", "go", "package two\n\nfunc Two() int { return 2 }\n"),
        ("three.js", "javascript", "function three() { return 3; }\n"),
        ("four.rs", "rust", "fn four() -> i32 { 4 }\n"),
        ("five.rb", "ruby", "def five\n  5\nend\n"),
    ];
    let mut specs = Vec::new();
    for (name, language, source) in files {
        let path = dir.path().join(name);
        fs::write(&path, source).unwrap();
        specs.push(ParseFileSpec::new(path, language));
    }
    (dir, specs)
}

fn node_fingerprint(collection: &canopy::AstResultCollection) -> Vec<(PathBuf, i64, u32, u32)> {
    collection
        .results
        .iter()
        .flat_map(|r| {
            r.nodes
                .iter()
                .map(|n| (r.source.file_path.clone(), n.node_id, n.depth, n.sibling_index))
        })
        .collect()
}

// ============================================================================
// Ordering and equivalence
// ============================================================================

#[test]
fn single_thread_matches_per_file_sequential_calls() {
    let registry = registry();
    let (_dir, specs) = workspace_with_files();
    let config = ExtractionConfig::default();

    let parallel =
        parse_files_to_collection_parallel(&registry, &specs, false, 1, &config, None).unwrap();

    let expected = parse_each_in_order(&registry, &specs, &config).results;

    assert_eq!(parallel.results.len(), expected.len());
    for (got, want) in parallel.results.iter().zip(&expected) {
        assert_eq!(got.source.file_path, want.source.file_path);
        let got_ids: Vec<i64> = got.nodes.iter().map(|n| n.node_id).collect();
        let want_ids: Vec<i64> = want.nodes.iter().map(|n| n.node_id).collect();
        assert_eq!(got_ids, want_ids);
    }
}

#[test]
fn merge_order_is_independent_of_thread_count() {
    let registry = registry();
    let (_dir, specs) = workspace_with_files();
    let config = ExtractionConfig::default();

    let single =
        parse_files_to_collection_parallel(&registry, &specs, false, 1, &config, None).unwrap();
    for threads in [2, 4, 8] {
        let many =
            parse_files_to_collection_parallel(&registry, &specs, false, threads, &config, None)
                .unwrap();
        assert_eq!(
            node_fingerprint(&single),
            node_fingerprint(&many),
            "ordering diverged at {threads} threads"
        );
    }
}

#[test]
fn parallel_path_matches_per_file_calls_at_many_threads() {
    let registry = registry();
    let (_dir, specs) = workspace_with_files();
    let config = ExtractionConfig::default();

    let parallel =
        parse_files_to_collection_parallel(&registry, &specs, false, 4, &config, None).unwrap();
    let sequential = parse_each_in_order(&registry, &specs, &config);
    assert_eq!(node_fingerprint(&parallel), node_fingerprint(&sequential));
}

#[test]
fn progress_counters_reflect_the_completed_run() {
    let registry = registry();
    let (dir, mut specs) = workspace_with_files();
    let bad = dir.path().join("bad.py");
    fs::write(&bad, [0xff, 0xfe]).unwrap();
    specs.push(ParseFileSpec::new(&bad, "python"));

    let progress = ParsingProgress::default();
    let collection = parse_files_to_collection_parallel(
        &registry,
        &specs,
        true,
        2,
        &ExtractionConfig::default(),
        Some(&progress),
    )
    .unwrap();

    assert_eq!(progress.files_processed.load(Ordering::Relaxed), specs.len());
    assert_eq!(progress.errors_encountered.load(Ordering::Relaxed), 1);
    assert_eq!(
        progress.total_nodes.load(Ordering::Relaxed),
        collection.total_node_count()
    );
}

#[test]
fn empty_file_list_yields_an_empty_collection() {
    let registry = registry();
    let collection = parse_files_to_collection_parallel(
        &registry,
        &[],
        false,
        4,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap();
    assert!(collection.results.is_empty());
    assert!(collection.errors.is_empty());
    assert_eq!(collection.total_node_count(), 0);
}

// ============================================================================
// Failure handling
// ============================================================================

#[test]
fn ignore_errors_records_the_bad_file_and_keeps_the_rest() {
    let registry = registry();
    let (dir, mut specs) = workspace_with_files();

    // Invalid UTF-8 cannot reach the grammar and fails as an encoding error.
    let bad = dir.path().join("bad.py");
    fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    specs.insert(2, ParseFileSpec::new(&bad, "python"));

    let collection = parse_files_to_collection_parallel(
        &registry,
        &specs,
        true,
        4,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap();

    assert_eq!(collection.results.len(), 5);
    assert_eq!(collection.errors.len(), 1);
    let error = &collection.errors[0];
    assert_eq!(error.kind, ParseErrorKind::EncodingError);
    assert_eq!(error.path, bad);
    assert!(error.is_input_error());
}

#[test]
fn hard_failure_propagates_without_ignore_errors() {
    let registry = registry();
    let (dir, mut specs) = workspace_with_files();
    let bad = dir.path().join("bad.py");
    fs::write(&bad, [0xff, 0xfe]).unwrap();
    specs.push(ParseFileSpec::new(&bad, "python"));

    let err = parse_files_to_collection_parallel(
        &registry,
        &specs,
        false,
        4,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidEncoding { .. }));
}

#[test]
fn missing_file_surfaces_as_io_error() {
    let registry = registry();
    let specs = vec![ParseFileSpec::new("/nonexistent/gone.py", "python")];
    let collection = parse_files_to_collection_parallel(
        &registry,
        &specs,
        true,
        1,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap();
    assert!(collection.results.is_empty());
    assert_eq!(collection.errors.len(), 1);
    assert_eq!(collection.errors[0].kind, ParseErrorKind::IoError);
}

#[test]
fn unknown_language_in_the_list_is_collected_with_ignore_errors() {
    let registry = registry();
    let (dir, mut specs) = workspace_with_files();
    let odd = dir.path().join("odd.xyz");
    fs::write(&odd, "hello").unwrap();
    specs.push(ParseFileSpec::new(&odd, "cobol"));

    let collection = parse_files_to_collection_parallel(
        &registry,
        &specs,
        true,
        2,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap();
    assert_eq!(collection.results.len(), 5);
    assert_eq!(collection.errors.len(), 1);
    assert_eq!(
        collection.errors[0].kind,
        ParseErrorKind::UnsupportedLanguage
    );
}

#[test]
fn failing_task_does_not_corrupt_error_reporting_order() {
    let registry = registry();
    let dir = TempDir::new().unwrap();
    let mut specs = Vec::new();
    for i in 0..8 {
        let path = dir.path().join(format!("f{i}.py"));
        if i == 1 || i == 6 {
            fs::write(&path, [0xff_u8, 0x80]).unwrap();
        } else {
            fs::write(&path, format!("x{i} = {i}\n")).unwrap();
        }
        specs.push(ParseFileSpec::new(path, "python"));
    }

    // With ignore_errors both failures are recorded, in input order.
    let collection = parse_files_to_collection_parallel(
        &registry,
        &specs,
        true,
        4,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap();
    assert_eq!(collection.results.len(), 6);
    assert_eq!(collection.errors.len(), 2);
    assert!(collection.errors[0].path.ends_with("f1.py"));
    assert!(collection.errors[1].path.ends_with("f6.py"));

    // Without it, the error reported comes from the earliest failing range.
    let err = parse_files_to_collection_parallel(
        &registry,
        &specs,
        false,
        4,
        &ExtractionConfig::default(),
        None,
    )
    .unwrap_err();
    match err {
        Error::InvalidEncoding { path } => assert!(path.ends_with("f1.py")),
        other => panic!("unexpected error: {other}"),
    }
}
