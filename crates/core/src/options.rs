//! Render configuration.

use crate::CvmarkError;
use serde::{Deserialize, Serialize};

const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Options accepted by [`render_with_options`](crate::render_with_options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Apply inline spans inside paragraphs too.
    /// Off by default: only list and quote blocks get inline spans.
    #[serde(default, alias = "inlineParagraphs")]
    pub inline_paragraphs: bool,
    /// Render blocks on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Minimum number of blocks before `parallel` takes effect.
    #[serde(
        default = "default_parallel_threshold",
        alias = "parallelThreshold"
    )]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            inline_paragraphs: false,
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RenderOptions {
    /// Parses options from a JSON object. Missing keys take their defaults.
    pub fn from_json(input: &str) -> Result<Self, CvmarkError> {
        serde_json::from_str(input).map_err(|err| CvmarkError::config(err.to_string()))
    }

    /// Whether a document with `block_count` blocks should render in parallel.
    pub fn use_parallel(&self, block_count: usize) -> bool {
        self.parallel && block_count >= self.parallel_threshold.max(2)
    }
}
