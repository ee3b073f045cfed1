//! Tokenizing delimited lines into fields.
//!
//! - [`Tokenizer`] - Dialect-driven tokenizer (in-place and copying)
//! - [`tokenize_in_place`] / [`tokenize_copy`] - One-shot helpers
//! - [`TERMINATOR`] - Byte written over consumed separators

mod scan;
mod tokenizer;

pub use scan::TERMINATOR;
pub use tokenizer::{Tokenizer, tokenize_copy, tokenize_in_place};
