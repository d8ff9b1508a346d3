//! Normalization of raw fetched text into lowercase alphabetic words.

use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static NON_ALPHA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z ]+").expect("Invalid non-alpha regex"));

static SPACE_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]+").expect("Invalid space regex"));

/// Normalize raw text.
///
/// Tag stripping runs as its own pass ahead of the punctuation pass. The
/// passes are:
///
/// 1. `<...>` tags become a single space
/// 2. runs of anything outside `[A-Za-z ]` become a single space
/// 3. runs of spaces collapse to one
/// 4. leading/trailing whitespace is trimmed
/// 5. everything is lowercased
///
/// # Example
/// ```
/// use winston::text::normalize;
///
/// assert_eq!(normalize("<b>Hi</b> there."), "hi there");
/// ```
pub fn normalize(text: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(text, " ");
    let alphabetic = NON_ALPHA_PATTERN.replace_all(&stripped, " ");
    let collapsed = SPACE_RUN_PATTERN.replace_all(&alphabetic, " ");

    collapsed.trim().to_lowercase()
}
