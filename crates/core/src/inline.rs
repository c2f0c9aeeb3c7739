//! Inline span substitution.
//!
//! Five passes run in a fixed order over the cumulative output:
//! code, emphasis, italics, links, strike. The delimiter passes share
//! [`wrap_delimited`]: delimiters are paired left to right, an odd or zero
//! count leaves the text untouched, and an empty pair is dropped without a tag.
//!
//! Text inside a `<code>` element is opaque to every pass, so markers inside
//! an inline code span survive verbatim. Link urls are opaque to the
//! delimiter passes, before and after the link pass rewrites them.

use crate::patterns::{
    INLINE_CODE, INLINE_EMPHASIS, INLINE_ITALICS, INLINE_STRIKE, LINK, code_elements, is_inside,
    opaque_regions,
};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::ops::Range;

/// Applies every inline pass in order.
pub fn transform_inline(text: &str) -> String {
    let text = transform_code(text);
    let text = transform_emphasis(&text);
    let text = transform_italics(&text);
    let text = transform_links(&text);
    transform_strike(&text).into_owned()
}

/// `` `code` `` → `<code>code</code>`.
pub fn transform_code(text: &str) -> Cow<'_, str> {
    wrap_delimited(text, &INLINE_CODE, "code")
}

/// `**strong**` or `__strong__` → `<strong>strong</strong>`.
pub fn transform_emphasis(text: &str) -> Cow<'_, str> {
    wrap_delimited(text, &INLINE_EMPHASIS, "strong")
}

/// `*em*` or `_em_` → `<em>em</em>`.
pub fn transform_italics(text: &str) -> Cow<'_, str> {
    wrap_delimited(text, &INLINE_ITALICS, "em")
}

/// `~~del~~` → `<del>del</del>`.
pub fn transform_strike(text: &str) -> Cow<'_, str> {
    wrap_delimited(text, &INLINE_STRIKE, "del")
}

/// `[text](url)` → `<a href="url">text</a>` for every non-overlapping match.
pub fn transform_links(text: &str) -> Cow<'_, str> {
    let opaque = code_elements(text);
    LINK.replace_all(text, |caps: &Captures<'_>| {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        if is_inside(&opaque, &whole) {
            return caps[0].to_string();
        }
        format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
    })
}

/// Wraps each delimited span in `<tag>…</tag>`.
fn wrap_delimited<'a>(text: &'a str, delimiter: &Regex, tag: &str) -> Cow<'a, str> {
    let opaque = opaque_regions(text);
    let marks: Vec<Range<usize>> = delimiter
        .find_iter(text)
        .map(|m| m.range())
        .filter(|range| !is_inside(&opaque, range))
        .collect();

    if marks.is_empty() || marks.len() % 2 == 1 {
        log::trace!(
            "inline <{}>: {} delimiter(s), leaving text unchanged",
            tag,
            marks.len()
        );
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + marks.len() * (tag.len() + 3));
    let mut cursor = 0;
    for pair in marks.chunks_exact(2) {
        let (open, close) = (&pair[0], &pair[1]);
        out.push_str(&text[cursor..open.start]);
        // Touching delimiters enclose nothing: drop them, emit no tag.
        if open.end < close.start {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push_str(&text[open.end..close.start]);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        cursor = close.end;
    }
    out.push_str(&text[cursor..]);

    Cow::Owned(out)
}
