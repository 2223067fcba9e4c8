//! Transcript chunking for bounded-input summarization

use crate::{Result, YtbriefError};

/// Split `text` into consecutive segments of at most `max_chunk_size`
/// characters each.
///
/// Every segment except possibly the last holds exactly `max_chunk_size`
/// characters; the last holds the remainder. Concatenating the segments in
/// order reproduces `text` exactly. The split counts Unicode scalar values
/// and ignores word and sentence boundaries, so a segment may end mid-word.
pub fn chunk(text: &str, max_chunk_size: usize) -> Result<Vec<&str>> {
    if max_chunk_size == 0 {
        return Err(YtbriefError::InvalidConfig(
            "max_chunk_size must be positive".to_string(),
        ));
    }

    let mut segments = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(max_chunk_size)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (segment, tail) = rest.split_at(cut);
        segments.push(segment);
        rest = tail;
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_segments() {
        let segments = chunk("", 1000).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn short_text_yields_single_segment() {
        let segments = chunk("hello world", 1000).unwrap();
        assert_eq!(segments, vec!["hello world"]);
    }

    #[test]
    fn long_text_splits_with_remainder() {
        let text = "a".repeat(2500);
        let segments = chunk(&text, 1000).unwrap();
        let lengths: Vec<usize> = segments.iter().map(|s| s.len()).collect();
        assert_eq!(lengths, vec![1000, 1000, 500]);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let text = "ab".repeat(1000);
        let segments = chunk(&text, 1000).unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.chars().count() == 1000));
    }

    #[test]
    fn segments_partition_the_input() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(37);
        let segments = chunk(&text, 100).unwrap();

        assert_eq!(segments.concat(), text);
        for segment in &segments {
            let len = segment.chars().count();
            assert!(len >= 1 && len <= 100);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Four 3-byte characters; a byte-count split would cut mid-character.
        let text = "日本語字";
        let segments = chunk(text, 3).unwrap();
        assert_eq!(segments, vec!["日本語", "字"]);
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn chunking_is_deterministic() {
        let text = "determinism matters for reproducible summaries".repeat(20);
        let first = chunk(&text, 64).unwrap();
        let second = chunk(&text, 64).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = chunk("anything", 0).unwrap_err();
        assert!(matches!(err, YtbriefError::InvalidConfig(_)));
    }
}
