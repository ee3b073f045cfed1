//! Async streaming support for record reading.
//!
//! This module provides asynchronous record reading using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic.
//!
//! - [`records_async`] - Creates an async stream of records from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{RecordStream, records_async};
