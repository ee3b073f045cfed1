//! I/O helpers that feed the splitter and consume tokenizer output.
//!
//! Nothing in the splitting or tokenizing code depends on this module.
//!
//! - [`read_file`] / [`write_file`] - Whole-file read and write
//! - [`read_record`] / [`records`] - Record-at-a-time reading from [`std::io::BufRead`]
//! - `records_async` - Async record stream (feature `async-io`)

mod file;
mod reader;

pub use file::{read_file, write_file};
pub use reader::{RecordIter, read_record, records};

#[cfg(feature = "async-io")]
pub use crate::async_stream::{RecordStream, records_async};
