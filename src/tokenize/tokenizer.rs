//! In-place and copying tokenizers.
//!
//! - [`Tokenizer::tokenize_in_place`] - Zero-copy, rewrites the line
//! - [`Tokenizer::tokenize_copy`] - Leaves the line untouched, returns [`Bytes`]
//!
//! # Example
//!
//! ```
//! use bufsplit::{Dialect, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(Dialect::new(b','));
//!
//! let mut line = b"\"a,b\",c".to_vec();
//! let fields = tokenizer.tokenize_in_place(&mut line)?;
//! assert_eq!(fields.len(), 2);
//! assert_eq!(&*fields[0], b"a,b");
//! assert_eq!(&*fields[1], b"c");
//! # Ok::<(), bufsplit::Error>(())
//! ```

use bytes::{Bytes, BytesMut};
use tracing::trace;

use super::scan::scan_fields;
use crate::config::Dialect;
use crate::error::Result;
use crate::util::carve_mut;

/// Breaks single lines into fields according to a [`Dialect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    dialect: Dialect,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Tokenizes `line` in place and returns views of its fields.
    ///
    /// Separators are overwritten with [`super::TERMINATOR`]; in quote-aware
    /// mode quotes are removed by compacting the line. The original content
    /// is not recoverable afterwards. On error `line` is left untouched.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidArgument`] if the dialect is invalid
    /// - [`crate::Error::MalformedRecord`] for an unterminated quote under
    ///   [`crate::QuotePolicy::Strict`]
    pub fn tokenize_in_place<'a>(&self, line: &'a mut [u8]) -> Result<Vec<&'a mut [u8]>> {
        self.dialect.validate()?;
        let spans = scan_fields(line, &self.dialect)?;
        trace!(len = line.len(), fields = spans.len(), "tokenized line in place");
        Ok(carve_mut(line, &spans))
    }

    /// Tokenizes `line` without modifying it.
    ///
    /// The fields share one private copy of the line.
    ///
    /// # Errors
    ///
    /// Same as [`Tokenizer::tokenize_in_place`].
    pub fn tokenize_copy(&self, line: &[u8]) -> Result<Vec<Bytes>> {
        self.dialect.validate()?;
        let mut scratch = BytesMut::from(line);
        let spans = scan_fields(&mut scratch, &self.dialect)?;
        trace!(len = line.len(), fields = spans.len(), "tokenized line copy");
        let scratch = scratch.freeze();
        Ok(spans.into_iter().map(|span| scratch.slice(span)).collect())
    }

    /// Returns the dialect used by this tokenizer.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }
}

/// Tokenizes `line` in place on `delimiter`.
///
/// With `quote_aware`, `"` suspends delimiter recognition and unterminated
/// quotes are handled leniently. Use [`Tokenizer`] for other quote bytes or a
/// strict policy.
///
/// ```
/// let mut line = b"a,,b,".to_vec();
/// let fields = bufsplit::tokenize_in_place(&mut line, b',', false)?;
/// let fields: Vec<&[u8]> = fields.iter().map(|f| &**f).collect();
/// assert_eq!(fields, vec![&b"a"[..], &b""[..], &b"b"[..], &b""[..]]);
/// # Ok::<(), bufsplit::Error>(())
/// ```
pub fn tokenize_in_place(
    line: &mut [u8],
    delimiter: u8,
    quote_aware: bool,
) -> Result<Vec<&mut [u8]>> {
    Tokenizer::new(Dialect::new(delimiter).with_quoting(quote_aware)).tokenize_in_place(line)
}

/// Tokenizes `line` on `delimiter` into owned fields, leaving it untouched.
pub fn tokenize_copy(line: &[u8], delimiter: u8, quote_aware: bool) -> Result<Vec<Bytes>> {
    Tokenizer::new(Dialect::new(delimiter).with_quoting(quote_aware)).tokenize_copy(line)
}
