//! Sentence boundary detection over raw, unnormalized text.

/// Collect the byte offset of every literal `.` in `text`.
///
/// Offsets are byte positions, so they are always valid slice boundaries
/// (the period is a single-byte character). Consecutive periods each get
/// their own offset; the result is strictly increasing.
pub fn segment(text: &str) -> Vec<usize> {
    text.bytes()
        .enumerate()
        .filter(|&(_, byte)| byte == b'.')
        .map(|(offset, _)| offset)
        .collect()
}

/// Iterate the half-open slices `[b_i, b_{i+1})` between adjacent boundaries.
///
/// Fewer than two boundaries yield nothing. Boundaries beyond the end of
/// `text` are skipped rather than panicking.
pub fn sentence_slices<'a>(
    text: &'a str,
    boundaries: &'a [usize],
) -> impl Iterator<Item = &'a str> + 'a {
    boundaries
        .windows(2)
        .filter_map(move |pair| text.get(pair[0]..pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_offsets() {
        assert_eq!(segment("Hello. World. Bye"), vec![5, 12]);
    }

    #[test]
    fn test_segment_no_periods() {
        assert!(segment("no terminators here").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_consecutive_periods_are_not_merged() {
        assert_eq!(segment("Wait... what."), vec![4, 5, 6, 12]);
    }

    #[test]
    fn test_offsets_are_byte_positions() {
        let text = "Café. Olé.";
        let boundaries = segment(text);
        assert_eq!(boundaries, vec![5, 11]);
        for &b in &boundaries {
            assert_eq!(&text[b..b + 1], ".");
        }
    }

    #[test]
    fn test_sentence_slices_half_open() {
        let text = "Hello. World. Bye";
        let boundaries = segment(text);
        let slices: Vec<&str> = sentence_slices(text, &boundaries).collect();
        assert_eq!(slices, vec![". World"]);
    }

    #[test]
    fn test_sentence_slices_need_two_boundaries() {
        let text = "Only one. here";
        let boundaries = segment(text);
        assert_eq!(sentence_slices(text, &boundaries).count(), 0);
    }
}
