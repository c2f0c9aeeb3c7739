//! Precompiled patterns shared by the classifier, block renderers and inline passes.
//!
//! Every pattern is compiled on first use and then only read, so render calls
//! on different threads share them without synchronization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// One to six `#`, then a title made only of Han ideographs or only of ASCII.
///
/// Anchored on the whole block. `[[:ascii:]]` includes the newline, so an
/// all-ASCII block that starts with `#` is a header even across lines.
pub(crate) static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s*(\p{Han}+|[[:ascii:]]+)\s*#*$").unwrap());

/// `![alt](src)` spanning the whole (single-line) block.
/// Alt text is ASCII word characters only.
pub(crate) static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!\[([[:word:]]+)\]\((.*)\)$").unwrap());

/// One list line: `*` or `-`, a whitespace character, then the item content.
pub(crate) static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*-]\s(.*)$").unwrap());

/// One quote line: `>`, a whitespace character, then the quoted content.
pub(crate) static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s(.*)$").unwrap());

/// Opening fence line carrying a language tag and nothing else.
pub(crate) static CODE_LANG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```([[:word:]]+)$").unwrap());

/// `[text](url)`; link text cannot contain `]` and the url cannot contain `)`.
pub(crate) static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

pub(crate) static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new("`").unwrap());
pub(crate) static INLINE_EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*{2}|_{2}").unwrap());
pub(crate) static INLINE_ITALICS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*|_").unwrap());
pub(crate) static INLINE_STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~{2}").unwrap());

/// `href` value of an `<a>` element emitted by the link pass.
static HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<a href="([^"]*)">"#).unwrap());

const CODE_OPEN: &str = "<code>";
const CODE_CLOSE: &str = "</code>";

/// Byte ranges of every `<code>…</code>` element in `text`.
///
/// Each `</code>` closes the nearest `<code>` before it, so an unclosed
/// `<code>` earlier in the text never swallows the spans that follow it.
pub(crate) fn code_elements(text: &str) -> Vec<Range<usize>> {
    let mut regions = Vec::new();
    let mut floor = 0;
    while let Some(offset) = text[floor..].find(CODE_CLOSE) {
        let close = floor + offset;
        let end = close + CODE_CLOSE.len();
        if let Some(open) = text[floor..close].rfind(CODE_OPEN) {
            regions.push(floor + open..end);
        }
        floor = end;
    }
    regions
}

/// Ranges the delimiter passes must leave alone: code elements, the url of
/// every `[text](url)` and the `href` of every emitted link.
pub(crate) fn opaque_regions(text: &str) -> Vec<Range<usize>> {
    let mut regions = code_elements(text);
    let targets: Vec<Range<usize>> = LINK
        .captures_iter(text)
        .filter(|caps| {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
            !is_inside(&regions, &whole)
        })
        .filter_map(|caps| caps.get(2).map(|m| m.range()))
        .collect();
    regions.extend(targets);
    regions.extend(
        HREF.captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.range())),
    );
    regions
}

/// Whether `range` lies entirely inside one of `regions`.
pub(crate) fn is_inside(regions: &[Range<usize>], range: &Range<usize>) -> bool {
    regions
        .iter()
        .any(|region| region.start <= range.start && range.end <= region.end)
}
