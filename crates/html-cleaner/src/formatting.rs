//! Cosmetic post-formatting of cleaned HTML.
//!
//! Pure text-to-text passes over the serialized output. None of them understand
//! markup beyond simple patterns, so attribute values containing `<` or `>` are not
//! handled (the serializer escapes both, so cleaned output never has them).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::FormattingOptions;

static SPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid regex"));
static TEXT_AFTER_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r">([^<\n])").expect("valid regex"));
static TEXT_BEFORE_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^>\n])<").expect("valid regex"));

fn empty_pair_regex(tags: &[String]) -> Option<Regex> {
    let alternation = tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return None;
    }
    Regex::new(&format!(r"<({alternation})(?:\s[^<>]*)?></({alternation})>")).ok()
}

/// Delete `<tag ...></tag>` pairs with nothing inside, repeating until nothing
/// changes or `max_passes` passes have run.
pub fn remove_empty_tags(html: &str, tags: &[String], max_passes: usize) -> String {
    let Some(re) = empty_pair_regex(tags) else {
        return html.to_string();
    };

    let mut current = html.to_string();
    for _ in 0..max_passes {
        let next = re.replace_all(&current, |caps: &regex::Captures<'_>| {
            if caps[1] == caps[2] {
                String::new()
            } else {
                caps[0].to_string()
            }
        });
        if next == current {
            break;
        }
        current = next.into_owned();
    }
    current
}

/// Drop lines that contain only whitespace.
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of spaces into one.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN_RE.replace_all(text, " ").into_owned()
}

/// Put text runs on their own lines, apart from the tags around them.
pub fn break_text_runs(text: &str) -> String {
    let after = TEXT_AFTER_TAG_RE.replace_all(text, ">\n${1}");
    TEXT_BEFORE_TAG_RE.replace_all(&after, "${1}\n<").into_owned()
}

/// Run every formatting pass.
///
/// Non-empty output ends with a single newline.
pub fn format_output(html: &str, options: &FormattingOptions) -> String {
    let without_empty = remove_empty_tags(html, &options.removable_empty_tags, options.max_empty_tag_passes);
    let compact = collapse_spaces(&strip_blank_lines(&without_empty));
    let mut formatted = strip_blank_lines(&break_text_runs(&compact));
    if !formatted.is_empty() {
        formatted.push('\n');
    }
    formatted
}
