//! String quoting for SNBT output.
//!
//! The game's parser reads unquoted words as keywords or numbers, so a string
//! value needs quotes exactly when leaving it bare would change its meaning
//! or break the grammar. [`quote`] makes that call:
//!
//! - numeric-looking strings and `true`/`false` are double-quoted so they are
//!   not read as literals
//! - bare words and macro placeholders (`$(name)`) pass through untouched
//! - everything else is escaped and wrapped in whichever quote character
//!   appears less often in the content, which minimizes escapes
//!
//! ## Examples
//!
//! ```rust
//! use snbt::quote::quote;
//!
//! assert_eq!(quote("abc"), "abc");
//! assert_eq!(quote("$(target)"), "$(target)");
//! assert_eq!(quote("true"), "\"true\"");
//! assert_eq!(quote("hi there"), "\"hi there\"");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static BARE_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").unwrap());
static MACRO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$\(\w+\)$").unwrap());
static PLAIN_INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9_]+$").unwrap());

/// Returns `value` quoted and escaped as the game's SNBT grammar requires,
/// or unchanged when bare text is unambiguous.
///
/// Control characters (bell, backspace, form-feed, newline, carriage-return,
/// tab, vertical-tab) become their two-character escapes. The quote character
/// is chosen by counting `'` against `"` in the content and picking the less
/// frequent one.
///
/// # Examples
///
/// ```rust
/// use snbt::quote::quote;
///
/// assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
/// assert_eq!(quote("it's"), "\"it's\"");
/// assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    // Text the game would read as a boolean or number literal must be quoted.
    if value == "true"
        || value == "false"
        || PLAIN_INT_RE.is_match(value)
        || value.parse::<f64>().is_ok()
    {
        return format!("\"{value}\"");
    }

    if (BARE_WORD_RE.is_match(value) || MACRO_RE.is_match(value))
        && !value.starts_with(|c: char| c.is_ascii_digit())
    {
        return value.to_string();
    }

    let escaped = escape_controls(value);
    let singles = escaped.matches('\'').count();
    let doubles = escaped.matches('"').count();
    if singles < doubles {
        let body = escaped.replace('\'', "\\'").replace("\\\"", "\\\\\"");
        format!("'{body}'")
    } else {
        let body = escaped.replace('"', "\\\"").replace("\\'", "\\\\\\'");
        format!("\"{body}\"")
    }
}

/// Whether `value` can appear in SNBT text without quotes.
pub(crate) fn is_bare_word(value: &str) -> bool {
    BARE_WORD_RE.is_match(value)
}

fn escape_controls(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_words_unquoted() {
        assert_eq!(quote("abc"), "abc");
        assert_eq!(quote("snake_case_word"), "snake_case_word");
        assert_eq!(quote("CamelCase"), "CamelCase");
        assert_eq!(quote("abc123"), "abc123");
    }

    #[test]
    fn test_quote_idempotent_on_bare_words() {
        assert_eq!(quote(&quote("abc")), "abc");
    }

    #[test]
    fn test_macro_placeholders_unquoted() {
        assert_eq!(quote("$(name)"), "$(name)");
        assert_eq!(quote("$(x1)"), "$(x1)");
        // An incomplete placeholder is ordinary text.
        assert_eq!(quote("$(name"), "\"$(name\"");
    }

    #[test]
    fn test_literals_forced_to_quotes() {
        assert_eq!(quote("true"), "\"true\"");
        assert_eq!(quote("false"), "\"false\"");
        assert_eq!(quote("17"), "\"17\"");
        assert_eq!(quote("-3"), "\"-3\"");
        assert_eq!(quote("2.5"), "\"2.5\"");
        assert_eq!(quote("1e3"), "\"1e3\"");
    }

    #[test]
    fn test_quote_choice_minimizes_escapes() {
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
        // Tie goes to double quotes.
        assert_eq!(quote("'\""), "\"'\\\"\"");
    }

    #[test]
    fn test_control_escapes() {
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
        assert_eq!(quote("a\tb"), "\"a\\tb\"");
        assert_eq!(quote("a\rb"), "\"a\\rb\"");
        assert_eq!(quote("a\u{07}b"), "\"a\\ab\"");
        assert_eq!(quote("a\u{0B}b"), "\"a\\vb\"");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(quote("over here"), "\"over here\"");
        assert_eq!(quote("➝"), "\"➝\"");
    }

    #[test]
    fn test_digit_leading_word_quoted() {
        assert_eq!(quote("1abc"), "\"1abc\"");
    }
}
