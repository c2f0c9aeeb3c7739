//! Block segmentation and classification.
//!
//! A document is cut into blocks on every `"\n\n"`. Each block gets exactly one
//! [`BlockKind`]; the checks in [`classify`] run in a fixed order because the
//! patterns overlap (a fenced block full of `- ` lines is still code).

use crate::patterns::{HEADER, IMAGE, LIST_ITEM, QUOTE};
use serde::Serialize;
use std::fmt;

/// Separator between two blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Fence marker that opens and closes a code block.
pub const FENCE: &str = "```";

/// Structural category of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Anything that is not one of the other kinds.
    #[default]
    Paragraph,
    /// `#`..`######` heading.
    Header,
    /// Whole-block `![alt](src)`.
    Image,
    /// Every line is a `*`/`-` item.
    List,
    /// Fenced with three backticks at both ends.
    Code,
    /// Every line is a `> ` quote line.
    Quote,
}

impl BlockKind {
    /// Lowercase name used in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Header => "header",
            BlockKind::Image => "image",
            BlockKind::List => "list",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Position of the block in the document (0-based).
    pub index: usize,
    /// Raw block text, borrowed from the document.
    pub text: &'a str,
    /// Kind assigned by [`classify`].
    pub kind: BlockKind,
}

impl<'a> Block<'a> {
    /// Classifies `text` and wraps it as block number `index`.
    pub fn new(index: usize, text: &'a str) -> Self {
        Self {
            index,
            text,
            kind: classify(text),
        }
    }
}

/// Splits a document into raw blocks on `"\n\n"`.
///
/// Runs of blank lines leave empty or newline-led blocks behind; an empty
/// document yields a single empty block.
pub fn split_blocks(document: &str) -> impl Iterator<Item = &str> {
    document.split(BLOCK_SEPARATOR)
}

/// Assigns a [`BlockKind`] to a raw block. Total: falls back to `Paragraph`.
pub fn classify(text: &str) -> BlockKind {
    if is_fenced(text) {
        BlockKind::Code
    } else if IMAGE.is_match(text) {
        BlockKind::Image
    } else if HEADER.is_match(text) {
        BlockKind::Header
    } else if all_lines_match(text, |line| LIST_ITEM.is_match(line)) {
        BlockKind::List
    } else if all_lines_match(text, |line| QUOTE.is_match(line)) {
        BlockKind::Quote
    } else {
        BlockKind::Paragraph
    }
}

pub(crate) fn is_fenced(text: &str) -> bool {
    text.starts_with(FENCE) && text.ends_with(FENCE)
}

fn all_lines_match(text: &str, matches: impl Fn(&str) -> bool) -> bool {
    text.split('\n').all(matches)
}
