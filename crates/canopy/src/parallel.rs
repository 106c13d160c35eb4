//! Parallel parsing scheduler.
//!
//! The file list is split into contiguous index ranges, one per worker task.
//! Each task parses its files sequentially into a private buffer; buffers
//! are merged in task index order after all tasks join, so the output
//! ordering is identical no matter how many threads run or how tasks
//! interleave. The only shared mutable state is three progress counters,
//! kept off the per-node hot path.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{Error, ParseError, Result};
use crate::registry::AdapterRegistry;
use crate::types::{AstResult, AstResultCollection, ExtractionConfig, ParseFileSpec};
use crate::walker::parse_to_ast_result;

/// Shared progress counters. Pass one to
/// [`parse_files_to_collection_parallel`] to watch a run from another
/// thread; counters only increase while the run is in flight.
#[derive(Debug, Default)]
pub struct ParsingProgress {
    /// Files attempted so far.
    pub files_processed: AtomicUsize,
    /// Nodes produced so far.
    pub total_nodes: AtomicUsize,
    /// Per-file failures so far.
    pub errors_encountered: AtomicUsize,
}

/// One task's private output, merged after join.
struct TaskBuffer {
    results: Vec<AstResult>,
    errors: Vec<ParseError>,
}

/// Parse many files across a fixed-size worker pool.
///
/// `thread_count` of 0 uses the machine's available parallelism. With
/// `ignore_errors` set, per-file failures are recorded in the returned
/// collection and parsing continues; otherwise the first failure (by task
/// index) is returned after in-flight tasks finish, and no partial
/// collection is produced.
///
/// Running with `thread_count = 1` yields output identical to calling
/// [`parse_to_ast_result`] per file in input order.
///
/// A caller that wants live counters passes `Some(&progress)` and reads the
/// atomics from another thread while this call blocks.
///
/// # Errors
///
/// Pool construction failure, or any per-file error when `ignore_errors`
/// is false.
pub fn parse_files_to_collection_parallel(
    registry: &AdapterRegistry,
    files: &[ParseFileSpec],
    ignore_errors: bool,
    thread_count: usize,
    config: &ExtractionConfig,
    progress: Option<&ParsingProgress>,
) -> Result<AstResultCollection> {
    if files.is_empty() {
        return Ok(AstResultCollection::default());
    }

    let threads = effective_thread_count(thread_count);
    let task_count = threads.min(files.len());
    let ranges = partition(files.len(), task_count);
    let local_progress = ParsingProgress::default();
    let progress = progress.unwrap_or(&local_progress);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::Scheduling(e.to_string()))?;

    info!(
        files = files.len(),
        threads,
        tasks = task_count,
        "starting parallel parse"
    );

    // Collected without short-circuiting: under ignore_errors=false a
    // failing task does not cancel its siblings, and the error reported is
    // the one from the lowest task index.
    let buffers: Vec<Result<TaskBuffer>> = pool.install(|| {
        ranges
            .into_par_iter()
            .map(|range| run_task(registry, &files[range], ignore_errors, config, progress))
            .collect()
    });

    let mut collection = AstResultCollection::default();
    for buffer in buffers {
        let buffer = buffer?;
        collection.results.extend(buffer.results);
        collection.errors.extend(buffer.errors);
    }

    info!(
        files_processed = progress.files_processed.load(Ordering::Relaxed),
        total_nodes = progress.total_nodes.load(Ordering::Relaxed),
        errors = progress.errors_encountered.load(Ordering::Relaxed),
        "parallel parse complete"
    );
    Ok(collection)
}

/// Parse one task's contiguous file range sequentially.
fn run_task(
    registry: &AdapterRegistry,
    files: &[ParseFileSpec],
    ignore_errors: bool,
    config: &ExtractionConfig,
    progress: &ParsingProgress,
) -> Result<TaskBuffer> {
    let mut buffer = TaskBuffer {
        results: Vec::with_capacity(files.len()),
        errors: Vec::new(),
    };
    for file in files {
        progress.files_processed.fetch_add(1, Ordering::Relaxed);
        match parse_one_file(registry, file, config) {
            Ok(result) => {
                progress
                    .total_nodes
                    .fetch_add(result.node_count(), Ordering::Relaxed);
                buffer.results.push(result);
            }
            Err(error) => {
                progress.errors_encountered.fetch_add(1, Ordering::Relaxed);
                if !ignore_errors {
                    return Err(error);
                }
                warn!(path = %file.path.display(), %error, "skipping unparseable file");
                buffer
                    .errors
                    .push(ParseError::from_error(file.path.clone(), &error));
            }
        }
    }
    Ok(buffer)
}

fn parse_one_file(
    registry: &AdapterRegistry,
    file: &ParseFileSpec,
    config: &ExtractionConfig,
) -> Result<AstResult> {
    let bytes = fs::read(&file.path)?;
    let content = String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
        path: file.path.clone(),
    })?;
    parse_to_ast_result(registry, &content, &file.language, &file.path, config)
}

fn effective_thread_count(requested: usize) -> usize {
    if requested > 0 {
        requested
    } else {
        std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
    }
}

/// Split `0..len` into `tasks` contiguous ranges of near-equal size.
fn partition(len: usize, tasks: usize) -> Vec<std::ops::Range<usize>> {
    let base = len / tasks;
    let remainder = len % tasks;
    let mut ranges = Vec::with_capacity(tasks);
    let mut start = 0;
    for task in 0..tasks {
        let size = base + usize::from(task < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_covers_the_range_without_gaps() {
        for (len, tasks) in [(10, 3), (5, 5), (7, 2), (1, 1), (100, 8)] {
            let ranges = partition(len, tasks);
            assert_eq!(ranges.len(), tasks);
            let mut expected = 0;
            for range in &ranges {
                assert_eq!(range.start, expected);
                expected = range.end;
            }
            assert_eq!(expected, len);
        }
    }

    #[test]
    fn partition_sizes_differ_by_at_most_one() {
        let ranges = partition(11, 4);
        let sizes: Vec<_> = ranges.iter().map(std::ops::Range::len).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 11);
        assert!(sizes.iter().all(|&s| s == 2 || s == 3));
    }
}
