//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use std::ops::Range;

/// Carves disjoint mutable slices out of one buffer.
///
/// `spans` must be sorted, non-overlapping and within `buffer`; bytes between
/// spans are skipped.
pub(crate) fn carve_mut<'a>(buffer: &'a mut [u8], spans: &[Range<usize>]) -> Vec<&'a mut [u8]> {
    let mut pieces = Vec::with_capacity(spans.len());
    let mut rest = buffer;
    let mut consumed = 0;

    for span in spans {
        let (_, tail) = std::mem::take(&mut rest).split_at_mut(span.start - consumed);
        let (piece, tail) = tail.split_at_mut(span.len());
        pieces.push(piece);
        rest = tail;
        consumed = span.end;
    }

    pieces
}

/// Length of a delimited record once a `\r` left by a CRLF ending is dropped.
///
/// `record` excludes the delimiter; only newline-delimited records are
/// trimmed.
pub(crate) fn content_len(record: &[u8], delimiter: u8) -> usize {
    match record.last() {
        Some(b'\r') if delimiter == b'\n' => record.len() - 1,
        _ => record.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carve_contiguous() {
        let mut data = *b"abcdef";
        let pieces = carve_mut(&mut data, &[0..2, 2..6]);
        assert_eq!(pieces.len(), 2);
        assert_eq!(&*pieces[0], b"ab");
        assert_eq!(&*pieces[1], b"cdef");
    }

    #[test]
    fn test_carve_with_gaps() {
        let mut data = *b"a,bb,,c";
        let mut pieces = carve_mut(&mut data, &[0..1, 2..4, 5..5, 6..7]);
        pieces[1][0] = b'B';
        assert_eq!(&*pieces[2], b"");
        assert_eq!(&*pieces[3], b"c");
        assert_eq!(&data, b"a,Bb,,c");
    }

    #[test]
    fn test_content_len() {
        assert_eq!(content_len(b"abc\r", b'\n'), 3);
        assert_eq!(content_len(b"abc\r", b';'), 4);
        assert_eq!(content_len(b"abc", b'\n'), 3);
        assert_eq!(content_len(b"", b'\n'), 0);
    }
}
