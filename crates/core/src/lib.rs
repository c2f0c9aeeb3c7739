#![deny(missing_docs)]
//! cvmark core: renders a restricted Markdown dialect to HTML fragments.
//!
//! A document is split into blocks on blank lines, each block is classified
//! and rendered on its own, and the fragments are concatenated in order.
//! Rendering never fails; anything that does not match degrades to text.

/// Parallel rendering of many documents.
pub mod batch;
/// Block segmentation and classification.
pub mod block;
/// Whole-document rendering entry points.
pub mod document;
/// Error type for the surface around the engine.
pub mod error;
/// Inline span passes (code, emphasis, italics, links, strike).
pub mod inline;
/// Render configuration.
pub mod options;
mod patterns;
/// Per-block HTML emission.
pub mod render;

pub use batch::{
    BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats, render_batch,
};
pub use block::{Block, BlockKind, classify, split_blocks};
pub use document::{
    RenderedDocument, blocks, decode_lossy, decode_strict, render, render_bytes,
    render_bytes_with_options, render_document, render_with_options,
};
pub use error::CvmarkError;
pub use inline::{
    transform_code, transform_emphasis, transform_inline, transform_italics, transform_links,
    transform_strike,
};
pub use options::RenderOptions;
pub use render::{
    render_block, render_code, render_header, render_image, render_list, render_paragraph,
    render_quote,
};
