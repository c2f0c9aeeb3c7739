//! Batch rendering of many documents on the rayon pool.

use crate::{RenderOptions, document};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// A single document to render.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier (typically the file path).
    pub id: String,
    /// Markdown body.
    pub source: String,
}

impl BatchInput {
    /// Creates a batch entry.
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

/// Rendered output for one input.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Rendered HTML fragment.
    pub html: String,
    /// Number of blocks in the document.
    pub blocks: usize,
}

/// Statistics for a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchStats {
    /// Number of documents rendered.
    pub total: usize,
    /// Number of blocks across all documents.
    pub blocks: usize,
    /// Wall-clock time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of worker threads. Defaults to the global rayon pool.
    pub max_threads: Option<usize>,
    /// Options applied to every document.
    pub render: RenderOptions,
}

/// Results in input order, plus statistics.
#[derive(Debug, Clone, Serialize)]
pub struct BatchProcessingResult {
    /// One result per input.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Renders every input in parallel. Results keep input order.
pub fn render_batch(inputs: Vec<BatchInput>, options: &BatchOptions) -> BatchProcessingResult {
    let start = Instant::now();
    let total = inputs.len();

    // A pool that fails to build falls back to the global one.
    let pool = options.max_threads.and_then(|threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| log::warn!("falling back to the global thread pool: {err}"))
            .ok()
    });

    let process_input = |input: BatchInput| -> BatchResult {
        let rendered = document::render_document(&input.source, &options.render);
        log::debug!("rendered {} ({} blocks)", input.id, rendered.blocks);
        BatchResult {
            id: input.id,
            html: rendered.html,
            blocks: rendered.blocks,
        }
    };

    let results: Vec<BatchResult> = if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };

    let elapsed = start.elapsed();
    let blocks = results.iter().map(|result| result.blocks).sum();

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            blocks,
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_input_order() {
        let inputs: Vec<BatchInput> = (0..50)
            .map(|i| BatchInput::new(format!("post-{i}.md"), format!("# Post {i}\n\nbody {i}")))
            .collect();

        let result = render_batch(inputs, &BatchOptions::default());
        assert_eq!(result.stats.total, 50);
        assert_eq!(result.stats.blocks, 100);
        for (i, entry) in result.results.iter().enumerate() {
            assert_eq!(entry.id, format!("post-{i}.md"));
            assert_eq!(
                entry.html,
                format!("\n<h1> Post {i} </h1>\n\n<p>body {i}</p>\n")
            );
        }
    }

    #[test]
    fn bounded_pool() {
        let options = BatchOptions {
            max_threads: Some(2),
            ..Default::default()
        };
        let result = render_batch(vec![BatchInput::new("a", "> quote")], &options);
        assert_eq!(
            result.results[0].html,
            "\n<blockquote>quote</blockquote>\n"
        );
    }

    #[test]
    fn empty_batch() {
        let result = render_batch(Vec::new(), &BatchOptions::default());
        assert!(result.results.is_empty());
        assert_eq!(result.stats.total, 0);
        assert_eq!(result.stats.blocks, 0);
    }

    #[test]
    fn render_options_apply_to_every_document() {
        let options = BatchOptions {
            render: RenderOptions {
                inline_paragraphs: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = render_batch(vec![BatchInput::new("a", "*hi*")], &options);
        assert_eq!(result.results[0].html, "\n<p><em>hi</em></p>\n");
    }
}
