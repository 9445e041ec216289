use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use thiserror::Error;

static BARE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([{,]\s*)([A-Za-z0-9_]+)(\s*:)").expect("BARE_KEY is a valid regex pattern")
});

static DISPLAY_MATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\$([\s\S]*?)\$\$").expect("DISPLAY_MATH is a valid regex pattern")
});

// The first branch matches a display block already quoted by the display
// pass so it is skipped rather than split into empty inline spans.
static INLINE_MATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""\$\$(?:[^"\\]|\\.)*?\$\$"|\$([^$]*?)\$"#)
        .expect("INLINE_MATH is a valid regex pattern")
});

static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("STRING_LITERAL is a valid regex pattern")
});

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("LINE_BREAK is a valid regex pattern"));

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",(\s*[}\]])").expect("TRAILING_COMMA is a valid regex pattern")
});

/// Both attempts at parsing a fragment failed.
#[derive(Debug, Error)]
#[error("could not parse model output as JSON: {repaired} (before repair: {initial})")]
pub struct ParseError {
    pub initial: serde_json::Error,
    #[source]
    pub repaired: serde_json::Error,
    /// Text that was fed to the second attempt.
    pub repaired_text: String,
}

/// Parses `fragment` strictly, falling back to a single repair-and-retry.
pub fn parse_with_recovery(fragment: &str) -> Result<Value, ParseError> {
    let initial = match serde_json::from_str::<Value>(fragment) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    log::warn!("Initial JSON parse failed, sanitizing: {}", initial);

    let repaired_text = repair(fragment);
    match serde_json::from_str::<Value>(&repaired_text) {
        Ok(value) => {
            log::debug!("JSON parse succeeded after repair");
            Ok(value)
        }
        Err(repaired) => Err(ParseError {
            initial,
            repaired,
            repaired_text,
        }),
    }
}

/// Applies every repair pass, in order, to near-JSON text.
///
/// Later passes rely on the earlier ones: the inline math pass skips blocks
/// the display pass has already quoted, and the newline pass only sees
/// string literals once math has been wrapped into them.
pub fn repair(input: &str) -> String {
    let text = quote_bare_keys(input);
    let text = quote_display_math(&text);
    let text = quote_inline_math(&text);
    let text = escape_line_breaks_in_strings(&text);
    remove_trailing_commas(&text)
}

fn quote_bare_keys(text: &str) -> String {
    BARE_KEY.replace_all(text, r#"${1}"${2}"${3}"#).into_owned()
}

fn quote_display_math(text: &str) -> String {
    DISPLAY_MATH
        .replace_all(text, |caps: &Captures| {
            let escaped = escape_math(&caps[1]);
            format!("\"$${}$$\"", LINE_BREAK.replace_all(&escaped, " "))
        })
        .into_owned()
}

fn quote_inline_math(text: &str) -> String {
    INLINE_MATH
        .replace_all(text, |caps: &Captures| match caps.get(1) {
            Some(math) => format!("\"${}$\"", escape_math(math.as_str())),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn escape_line_breaks_in_strings(text: &str) -> String {
    STRING_LITERAL
        .replace_all(text, |caps: &Captures| {
            format!("\"{}\"", LINE_BREAK.replace_all(&caps[1], r"\n"))
        })
        .into_owned()
}

fn remove_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "$1").into_owned()
}

fn escape_math(math: &str) -> String {
    math.replace('\\', r"\\").replace('"', "\\\"")
}
