//! Whole-document rendering.

use crate::block::{Block, split_blocks};
use crate::render::render_block;
use crate::{CvmarkError, RenderOptions};
use rayon::prelude::*;
use std::borrow::Cow;

/// Splits and classifies a document.
pub fn blocks(document: &str) -> Vec<Block<'_>> {
    split_blocks(document)
        .enumerate()
        .map(|(index, text)| Block::new(index, text))
        .collect()
}

/// Renders a document with default options.
pub fn render(document: &str) -> String {
    render_with_options(document, &RenderOptions::default())
}

/// Rendered HTML together with the number of blocks it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Concatenated block fragments.
    pub html: String,
    /// Number of blank-line separated blocks.
    pub blocks: usize,
}

/// Renders a document, concatenating block output in document order.
pub fn render_with_options(document: &str, options: &RenderOptions) -> String {
    render_document(document, options).html
}

/// Like [`render_with_options`], also reporting the block count.
pub fn render_document(document: &str, options: &RenderOptions) -> RenderedDocument {
    let blocks = blocks(document);
    log::debug!("rendering {} block(s)", blocks.len());

    let rendered: Vec<String> = if options.use_parallel(blocks.len()) {
        blocks
            .par_iter()
            .map(|block| render_block(block, options))
            .collect()
    } else {
        blocks
            .iter()
            .map(|block| render_block(block, options))
            .collect()
    };

    RenderedDocument {
        html: rendered.concat(),
        blocks: blocks.len(),
    }
}

/// Byte-oriented entry point. Invalid UTF-8 is replaced, never rejected.
pub fn render_bytes(document: &[u8]) -> Vec<u8> {
    render_bytes_with_options(document, &RenderOptions::default())
}

/// [`render_bytes`] with explicit options.
pub fn render_bytes_with_options(document: &[u8], options: &RenderOptions) -> Vec<u8> {
    let text = decode_lossy(document);
    render_with_options(&text, options).into_bytes()
}

/// Decodes document bytes, substituting U+FFFD for invalid sequences.
pub fn decode_lossy(document: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(document);
    if let Cow::Owned(_) = text {
        log::warn!("document is not valid UTF-8; invalid bytes were replaced");
    }
    text
}

/// Decodes document bytes, failing on invalid UTF-8.
pub fn decode_strict(document: Vec<u8>) -> Result<String, CvmarkError> {
    Ok(String::from_utf8(document)?)
}
