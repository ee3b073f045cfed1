//! bufsplit
//!
//! Delimiter-aligned splitting of large byte buffers, and zero-copy
//! tokenization of delimited lines.
//!
//! `bufsplit` divides one big in-memory buffer (a whole CSV or log file, say)
//! into balanced blocks for parallel record processing. It is designed as a
//! small, composable primitive:
//!
//! - [`partition`] - Balanced inclusive index ranges for N tasks
//! - [`Splitter`] - Blocks that never cut a record in half
//! - [`Tokenizer`] - In-place (zero-copy) or copying field tokenization,
//!   optionally quote-aware
//!
//! The crate intentionally:
//! - does NOT spawn threads (see the `parallel` feature for a rayon driver)
//! - does NOT validate encodings
//! - does NOT handle multi-byte delimiters or newlines inside quotes
//!
//! # Example
//!
//! ```
//! use bufsplit::{Dialect, SplitConfig, Splitter, Tokenizer};
//!
//! let mut data = b"name,city\n\"Smith, J\",Oslo\nLee,\"Seoul\"\n".to_vec();
//!
//! let splitter = Splitter::new(SplitConfig::new(b'\n', 2)?);
//! let tokenizer = Tokenizer::new(Dialect::new(b','));
//!
//! let mut rows = Vec::new();
//! for block in splitter.split_mut(&mut data)? {
//!     for record in block.into_records() {
//!         let fields = tokenizer.tokenize_in_place(record)?;
//!         rows.push(fields.iter().map(|f| f.to_vec()).collect::<Vec<_>>());
//!     }
//! }
//!
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[1][0], b"Smith, J");
//! assert_eq!(rows[2][1], b"Seoul");
//! # Ok::<(), bufsplit::Error>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use bufsplit::records_async;
//!
//! async fn demo<R: futures_io::AsyncRead + Unpin>(reader: R) -> Result<(), bufsplit::Error> {
//!     let mut stream = records_async(reader, b'\n');
//!
//!     while let Some(record) = stream.next().await {
//!         println!("record {} bytes", record?.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod partition;
mod split;
mod tokenize;

pub mod io;

mod util; // internal helpers

#[cfg(feature = "async-io")]
mod async_stream;

#[cfg(feature = "parallel")]
pub mod parallel;

//
// Public surface
//

pub use config::{
    DEFAULT_BLOCK_COUNT, DEFAULT_FIELD_DELIMITER, DEFAULT_QUOTE, DEFAULT_RECORD_DELIMITER,
    Dialect, QuotePolicy, SplitConfig,
};
pub use error::{Error, Result};
pub use partition::{TaskRange, partition};
pub use split::{Block, BlockMut, Records, RecordsMut, Splitter, split_buffer, split_buffer_mut};
pub use tokenize::{TERMINATOR, Tokenizer, tokenize_copy, tokenize_in_place};

#[cfg(feature = "async-io")]
pub use async_stream::{RecordStream, records_async};
