use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("CODE_FENCE is a valid regex pattern")
});

/// Replaces the first Markdown code fence with its trimmed contents.
///
/// Text around the fence is kept, so a later [`extract_span`] still has to
/// cut away any commentary.
pub fn strip_code_fence(text: &str) -> Cow<'_, str> {
    CODE_FENCE.replace(text, "$1")
}

/// Returns the greedy span from the first `open` to the last `close`,
/// inclusive.
///
/// Nesting is not balanced. When either delimiter is missing, or the last
/// `close` sits before the first `open`, the text comes back untouched and
/// the parser gets to report the failure.
pub fn extract_span(text: &str, open: char, close: char) -> &str {
    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if end >= start => &text[start..end + close.len_utf8()],
        _ => text,
    }
}
