//! Async stream adapter for record reading.
//!
//! This module provides asynchronous record reading using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and compatible
//! with tokio, async-std, smol, and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use bufsplit::records_async;
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), bufsplit::Error> {
//!     let mut stream = records_async(reader, b'\n');
//!
//!     while let Some(record) = stream.next().await {
//!         let fields = bufsplit::tokenize_copy(&record?, b',', true)?;
//!         println!("{} fields", fields.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use memchr::memchr;
use pin_project_lite::pin_project;

use crate::error::{Error, Result};
use crate::util::content_len;

const READ_BUFFER_SIZE: usize = 8192;

pin_project! {
    /// A stream that yields delimited records from an async reader.
    ///
    /// Records follow the same rules as [`crate::io::read_record`]: the
    /// delimiter is dropped, a `\r` before a `\n` delimiter is dropped, and
    /// a final record without a delimiter is still yielded.
    pub struct RecordStream<R> {
        #[pin]
        reader: R,
        delimiter: u8,
        read_buf: Vec<u8>,
        pending: Vec<u8>,
        // Bytes of `pending` already known to hold no delimiter.
        scanned: usize,
        finished: bool,
    }
}

impl<R> RecordStream<R> {
    /// Creates a new record stream from an async reader.
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            read_buf: vec![0u8; READ_BUFFER_SIZE],
            pending: Vec::new(),
            scanned: 0,
            finished: false,
        }
    }

    /// Returns the record delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl<R: AsyncRead> Stream for RecordStream<R> {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            if let Some(pos) = memchr(*this.delimiter, &this.pending[*this.scanned..]) {
                let end = *this.scanned + pos;
                let len = content_len(&this.pending[..end], *this.delimiter);
                let record = Bytes::copy_from_slice(&this.pending[..len]);
                this.pending.drain(..=end);
                *this.scanned = 0;
                return Poll::Ready(Some(Ok(record)));
            }
            *this.scanned = this.pending.len();

            match this.reader.as_mut().poll_read(cx, &mut this.read_buf[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(Error::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of stream - emit the unterminated tail if any
                    *this.finished = true;
                    if this.pending.is_empty() {
                        return Poll::Ready(None);
                    }
                    let record = Bytes::from(std::mem::take(this.pending));
                    return Poll::Ready(Some(Ok(record)));
                }
                Poll::Ready(Ok(n)) => this.pending.extend_from_slice(&this.read_buf[..n]),
            }
        }
    }
}

/// Creates a record stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use bufsplit::records_async;
///
/// let tokio_reader = tokio::fs::File::open("records.csv").await?;
/// let stream = records_async(tokio_reader.compat(), b'\n');
/// ```
pub fn records_async<R: AsyncRead>(reader: R, delimiter: u8) -> RecordStream<R> {
    RecordStream::new(reader, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(data: &[u8], delimiter: u8) -> Vec<Bytes> {
        let stream = RecordStream::new(data, delimiter);
        let records: Vec<_> = futures_util::StreamExt::collect(stream).await;
        records.into_iter().collect::<Result<Vec<_>>>().unwrap()
    }

    #[tokio::test]
    async fn test_record_stream_empty() {
        assert!(collect(b"", b'\n').await.is_empty());
    }

    #[tokio::test]
    async fn test_record_stream_lines() {
        let records = collect(b"a,b\r\nc,d\n\ne", b'\n').await;
        assert_eq!(
            records,
            vec![
                Bytes::from_static(b"a,b"),
                Bytes::from_static(b"c,d"),
                Bytes::new(),
                Bytes::from_static(b"e"),
            ]
        );
    }

    #[tokio::test]
    async fn test_record_stream_larger_than_read_buffer() {
        let mut data = Vec::new();
        for i in 0..2000 {
            data.extend_from_slice(format!("row{i};").as_bytes());
        }
        let records = collect(&data, b';').await;
        assert_eq!(records.len(), 2000);
        assert_eq!(records[1999], Bytes::from_static(b"row1999"));
    }

    #[tokio::test]
    async fn test_record_stream_from_tokio_file() {
        use tokio_util::compat::TokioAsyncReadCompatExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        tokio::fs::write(&path, b"h1,h2\r\n1,2\n3,4").await.unwrap();

        let file = tokio::fs::File::open(&path).await.unwrap();
        let stream = records_async(file.compat(), b'\n');
        let records: Vec<_> = futures_util::StreamExt::collect(stream).await;
        let records = records.into_iter().collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(
            records,
            vec![
                Bytes::from_static(b"h1,h2"),
                Bytes::from_static(b"1,2"),
                Bytes::from_static(b"3,4"),
            ]
        );
    }
}
