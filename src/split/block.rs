//! Block views - delimiter-aligned slices of a larger buffer.

use std::fmt;
use std::ops::Range;

use memchr::memchr;

use crate::util::content_len;

/// A read-only, delimiter-aligned view into a caller-owned buffer.
///
/// The boundary delimiter that ends a block is the last byte of that block;
/// the final block may or may not end with one.
///
/// # Example
///
/// ```
/// use bufsplit::split_buffer;
///
/// let data = b"aa;bb;ccc;dd";
/// let blocks = split_buffer(data, b';', 2)?;
///
/// assert_eq!(blocks[0].data(), b"aa;bb;");
/// assert_eq!(blocks[1].offset(), 6);
/// assert_eq!(blocks[1].records().collect::<Vec<_>>(), vec![&b"ccc"[..], &b"dd"[..]]);
/// # Ok::<(), bufsplit::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub(crate) index: usize,
    pub(crate) offset: usize,
    pub(crate) delimiter: u8,
    pub(crate) data: &'a [u8],
}

impl<'a> Block<'a> {
    /// Ordinal of this block among the blocks of one split.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of this block in the source buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the length of the block in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the block has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the block bytes, boundary delimiter included.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the span of the source buffer this block covers.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.data.len()
    }

    /// Iterates the records of this block, without their delimiters.
    pub fn records(&self) -> Records<'a> {
        Records {
            rest: self.data,
            delimiter: self.delimiter,
        }
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block #{} ({} bytes @ {})",
            self.index,
            self.len(),
            self.offset
        )
    }
}

/// A mutable, delimiter-aligned view into a caller-owned buffer.
///
/// Blocks from one split never overlap, so each `BlockMut` may be moved to a
/// separate worker and tokenized in place.
#[derive(Debug, PartialEq, Eq)]
pub struct BlockMut<'a> {
    pub(crate) index: usize,
    pub(crate) offset: usize,
    pub(crate) delimiter: u8,
    pub(crate) data: &'a mut [u8],
}

impl<'a> BlockMut<'a> {
    /// Ordinal of this block among the blocks of one split.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of this block in the source buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the length of the block in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the block has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the block bytes.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    /// Returns the block bytes for mutation.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }

    /// Returns the span of the source buffer this block covers.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.data.len()
    }

    /// Reborrows this block as a read-only [`Block`].
    pub fn as_block(&self) -> Block<'_> {
        Block {
            index: self.index,
            offset: self.offset,
            delimiter: self.delimiter,
            data: &self.data[..],
        }
    }

    /// Iterates the records of this block mutably, without their delimiters.
    pub fn records_mut(&mut self) -> RecordsMut<'_> {
        RecordsMut {
            rest: &mut self.data[..],
            delimiter: self.delimiter,
        }
    }

    /// Consumes the block, yielding its records for the full buffer lifetime.
    pub fn into_records(self) -> RecordsMut<'a> {
        RecordsMut {
            rest: self.data,
            delimiter: self.delimiter,
        }
    }

    /// Consumes the block and returns the underlying slice.
    pub fn into_data(self) -> &'a mut [u8] {
        self.data
    }
}

impl fmt::Display for BlockMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_block().fmt(f)
    }
}

/// Iterator over the delimiter-separated records of a block.
///
/// A trailing delimiter does not produce a trailing empty record. With a
/// `\n` delimiter the `\r` of a CRLF ending is dropped, as [`crate::io::records`]
/// does.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    rest: &'a [u8],
    delimiter: u8,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match memchr(self.delimiter, self.rest) {
            Some(pos) => {
                let record = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                Some(&record[..content_len(record, self.delimiter)])
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

/// Mutable iterator over the delimiter-separated records of a block.
///
/// Records are trimmed the same way as by [`Records`].
#[derive(Debug)]
pub struct RecordsMut<'a> {
    rest: &'a mut [u8],
    delimiter: u8,
}

impl<'a> Iterator for RecordsMut<'a> {
    type Item = &'a mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.rest);
        match memchr(self.delimiter, rest) {
            Some(pos) => {
                let (record, tail) = rest.split_at_mut(pos);
                self.rest = &mut tail[1..];
                let len = content_len(record, self.delimiter);
                Some(&mut record[..len])
            }
            None => Some(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(data: &[u8]) -> Block<'_> {
        Block {
            index: 1,
            offset: 100,
            delimiter: b'\n',
            data,
        }
    }

    #[test]
    fn test_accessors() {
        let b = block(b"hello\n");
        assert_eq!(b.index(), 1);
        assert_eq!(b.offset(), 100);
        assert_eq!(b.len(), 6);
        assert!(!b.is_empty());
        assert_eq!(b.range(), 100..106);
    }

    #[test]
    fn test_display() {
        let s = block(b"hello").to_string();
        assert!(s.contains("#1"));
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 100"));
    }

    #[test]
    fn test_records_skip_trailing_delimiter() {
        let records: Vec<_> = block(b"a\nbb\n").records().collect();
        assert_eq!(records, vec![&b"a"[..], &b"bb"[..]]);
    }

    #[test]
    fn test_records_keep_inner_empty() {
        let records: Vec<_> = block(b"a\n\nb").records().collect();
        assert_eq!(records, vec![&b"a"[..], &b""[..], &b"b"[..]]);
    }

    #[test]
    fn test_records_empty_block() {
        assert_eq!(block(b"").records().count(), 0);
    }

    #[test]
    fn test_records_drop_crlf() {
        let records: Vec<_> = block(b"a,b\r\nc,d\r\ne\r").records().collect();
        assert_eq!(records, vec![&b"a,b"[..], &b"c,d"[..], &b"e\r"[..]]);
    }

    #[test]
    fn test_records_keep_cr_for_other_delimiters() {
        let b = Block {
            index: 0,
            offset: 0,
            delimiter: b';',
            data: b"a\r;b",
        };
        assert_eq!(b.records().collect::<Vec<_>>(), vec![&b"a\r"[..], &b"b"[..]]);
    }

    #[test]
    fn test_records_mut_drop_crlf() {
        let mut data = b"x,y\r\nz\r\n".to_vec();
        let b = BlockMut {
            index: 0,
            offset: 0,
            delimiter: b'\n',
            data: &mut data,
        };
        let records: Vec<Vec<u8>> = b.into_records().map(|r| r.to_vec()).collect();
        assert_eq!(records, vec![b"x,y".to_vec(), b"z".to_vec()]);
    }

    #[test]
    fn test_records_mut_edit_in_place() {
        let mut data = b"ab\ncd\n".to_vec();
        let mut b = BlockMut {
            index: 0,
            offset: 0,
            delimiter: b'\n',
            data: &mut data,
        };
        for record in b.records_mut() {
            record.make_ascii_uppercase();
        }
        assert_eq!(b.data(), b"AB\nCD\n");
        assert_eq!(data, b"AB\nCD\n");
    }
}
