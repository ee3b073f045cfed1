//! Record-at-a-time reading from a [`BufRead`] source.

use std::io::BufRead;

use crate::error::Result;
use crate::util::content_len;

/// Reads one record from `reader` into `buf`.
///
/// `buf` is cleared first. The delimiter is not stored, and for `\n`
/// delimited input a preceding `\r` is dropped too. A final record without a
/// trailing delimiter is returned as is.
///
/// Returns `Ok(false)` once the input is exhausted.
///
/// # Example
///
/// ```
/// use bufsplit::io::read_record;
///
/// let mut input = &b"one\r\ntwo"[..];
/// let mut buf = Vec::new();
///
/// assert!(read_record(&mut input, b'\n', &mut buf)?);
/// assert_eq!(buf, b"one");
/// assert!(read_record(&mut input, b'\n', &mut buf)?);
/// assert_eq!(buf, b"two");
/// assert!(!read_record(&mut input, b'\n', &mut buf)?);
/// # Ok::<(), bufsplit::Error>(())
/// ```
pub fn read_record<R: BufRead + ?Sized>(
    reader: &mut R,
    delimiter: u8,
    buf: &mut Vec<u8>,
) -> Result<bool> {
    buf.clear();
    if reader.read_until(delimiter, buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&delimiter) {
        buf.pop();
        let len = content_len(buf, delimiter);
        buf.truncate(len);
    }
    Ok(true)
}

/// Iterator over the records of a [`BufRead`] source.
///
/// Created by [`records`]. Each item is a freshly allocated record.
#[derive(Debug)]
pub struct RecordIter<R> {
    reader: R,
    delimiter: u8,
    finished: bool,
}

impl<R: BufRead> Iterator for RecordIter<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut buf = Vec::new();
        match read_record(&mut self.reader, self.delimiter, &mut buf) {
            Ok(true) => Some(Ok(buf)),
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Iterates the `delimiter`-separated records of `reader`.
pub fn records<R: BufRead>(reader: R, delimiter: u8) -> RecordIter<R> {
    RecordIter {
        reader,
        delimiter,
        finished: false,
    }
}
