//! Best-effort extraction of a fenced code block from a model response.
//!
//! Model output is supposed to be a single fenced block but often arrives
//! wrapped in prose, with malformed fences, or with no fences at all. The
//! matching here is a fallback ladder, strictest pattern first, and the
//! first match wins. There is no guarantee the extracted text is valid
//! code in the claimed language.

use regex::Regex;
use std::sync::LazyLock;

/// A fence with an optional language tag and a newline before the content.
static TAGGED_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("tagged fence pattern"));

/// A fence without the surrounding newlines. The content may not contain
/// backticks, which keeps this from swallowing adjacent blocks.
static LOOSE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:\w+)?([^`]+)```").expect("loose fence pattern"));

/// Anything at all between two triple-backtick markers.
static BARE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("bare fence pattern"));

/// First fenced region in `response` as `(language_tag, raw_content)`.
/// The tag is empty when the fence carries none.
fn first_fenced(response: &str) -> Option<(&str, &str)> {
    if let Some(caps) = TAGGED_FENCE.captures(response) {
        let lang = caps.get(1).map_or("", |m| m.as_str());
        return Some((lang, caps.get(2).map_or("", |m| m.as_str())));
    }

    if let Some(caps) = LOOSE_FENCE.captures(response) {
        return Some(("", caps.get(1).map_or("", |m| m.as_str())));
    }

    if let Some(caps) = BARE_FENCE.captures(response) {
        return Some(("", caps.get(1).map_or("", |m| m.as_str())));
    }

    None
}

/// Extract the first fenced block and return it re-fenced in normal form:
/// tag preserved, content trimmed. When the response contains no fences
/// the whole trimmed response is treated as the artifact.
///
/// # Example
/// ```
/// use codepix::extract::extract_fenced_block;
///
/// let refenced = extract_fenced_block("Here you go:\n```js\nfoo()\n```\nEnjoy!");
/// assert_eq!(refenced, "```js\nfoo()\n```");
/// ```
pub fn extract_fenced_block(response: &str) -> String {
    match first_fenced(response) {
        Some((lang, content)) => format!("```{lang}\n{}\n```", content.trim()),
        None => response.trim().to_string(),
    }
}

/// Extract only the inner content of the first fenced block, trimmed.
/// This is the form an editor wants when applying a result directly.
pub fn extract_code(response: &str) -> String {
    match first_fenced(response) {
        Some((_, content)) => content.trim().to_string(),
        None => response.trim().to_string(),
    }
}
