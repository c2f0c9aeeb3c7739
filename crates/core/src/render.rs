//! Per-block HTML emission.
//!
//! Every renderer frames its element with a leading and trailing newline and
//! hands the input back unchanged when its pattern does not match.

use crate::RenderOptions;
use crate::block::{Block, BlockKind, is_fenced};
use crate::inline::transform_inline;
use crate::patterns::{CODE_LANG, HEADER, IMAGE, LIST_ITEM, QUOTE};

/// Renders one classified block.
pub fn render_block(block: &Block<'_>, options: &RenderOptions) -> String {
    let html = match block.kind {
        BlockKind::Code => render_code(block.text),
        BlockKind::Header => render_header(block.text),
        BlockKind::Image => render_image(block.text),
        BlockKind::List => render_list(block.text),
        BlockKind::Quote => render_quote(block.text),
        BlockKind::Paragraph => {
            if options.inline_paragraphs {
                render_paragraph(&transform_inline(block.text))
            } else {
                render_paragraph(block.text)
            }
        }
    };

    if block.kind != BlockKind::Paragraph && html == block.text {
        log::debug!(
            "block {} classified as {} rendered verbatim",
            block.index,
            block.kind
        );
    }

    html
}

/// Fenced code. The body is emitted verbatim, without inline spans.
pub fn render_code(text: &str) -> String {
    if !is_fenced(text) {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let open = match CODE_LANG.captures(lines[0]) {
        Some(caps) => format!("<pre lang=\"{}\">", &caps[1]),
        None => "<pre>".to_string(),
    };
    let body = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };

    format!("\n{open}\n<code>\n{body}\n</code>\n</pre>\n")
}

/// `#`..`######` heading → `<hN> title </hN>`.
pub fn render_header(text: &str) -> String {
    match HEADER.captures(text) {
        Some(caps) => {
            let level = caps[1].len();
            format!("\n<h{level}> {} </h{level}>\n", &caps[2])
        }
        None => text.to_string(),
    }
}

/// `![alt](src)` → `<img src="src" alt="alt">`.
pub fn render_image(text: &str) -> String {
    match IMAGE.captures(text) {
        Some(caps) => format!("\n<img src=\"{}\" alt=\"{}\">\n", &caps[2], &caps[1]),
        None => text.to_string(),
    }
}

/// List lines → `<ul>` with one `<li>` per line.
///
/// Inline spans are applied to the whole block before the lines are matched,
/// so a span that swallows a line marker makes the block fall back verbatim.
pub fn render_list(text: &str) -> String {
    let transformed = transform_inline(text);

    let mut html = String::from("\n<ul>\n");
    for line in transformed.split('\n') {
        let Some(caps) = LIST_ITEM.captures(line) else {
            return text.to_string();
        };
        html.push_str("<li>");
        html.push_str(&caps[1]);
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
    html
}

/// Quote lines → one `<blockquote>`, line contents joined with no separator.
pub fn render_quote(text: &str) -> String {
    let transformed = transform_inline(text);

    let mut html = String::from("\n<blockquote>");
    for line in transformed.split('\n') {
        let Some(caps) = QUOTE.captures(line) else {
            return text.to_string();
        };
        html.push_str(&caps[1]);
    }
    html.push_str("</blockquote>\n");
    html
}

/// Wraps text in `<p>`. Inline spans are the caller's decision.
pub fn render_paragraph(text: &str) -> String {
    format!("\n<p>{text}</p>\n")
}
