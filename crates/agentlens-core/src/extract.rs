//! Plain-text extraction from raw HTML
//!
//! Feeds the linguistic analyzers: script/style blocks go first
//! (including their contents), then remaining tags, then common
//! entities are decoded and whitespace is collapsed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on captured HTML, in characters. Applies to the
/// `htmlContent` echoed in responses and to the excerpt handed to the
/// insight prompt.
pub const MAX_HTML_CHARS: usize = 50_000;

/// Extract readable plain text from an HTML document.
///
/// Always returns a string, possibly empty. Running the function on
/// its own output is a no-op.
pub fn extract_text(html: &str) -> String {
    static RE_TAG_BLOCKS: Lazy<Vec<Regex>> = Lazy::new(|| {
        [
            r"(?is)<script[^>]*?>[\s\S]*?</script>",
            r"(?is)<style[^>]*?>[\s\S]*?</style>",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("invalid block regex"))
        .collect()
    });
    static RE_TAG: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)</?[a-zA-Z!][^>]*>").expect("invalid tag regex"));
    static RE_WHITESPACE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

    let mut text = html.to_string();
    for re in RE_TAG_BLOCKS.iter() {
        text = re.replace_all(&text, " ").into_owned();
    }

    let text = RE_TAG.replace_all(&text, " ");
    let text = decode_entities(&text);
    RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Truncate to at most `max_chars` characters on a char boundary.
pub(crate) fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
