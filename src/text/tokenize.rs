//! Token splitting over normalized text.

/// Split normalized text on single spaces.
///
/// Empty tokens are kept: `tokenize("")` is `[""]`. Frequency counts and
/// index multiplicity are defined over this exact sequence.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_in_order() {
        assert_eq!(tokenize("a b a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_empty_text_yields_single_empty_token() {
        assert_eq!(tokenize(""), vec![String::new()]);
    }

    #[test]
    fn test_unnormalized_spacing_keeps_empty_tokens() {
        assert_eq!(tokenize(" a"), vec!["", "a"]);
    }
}
