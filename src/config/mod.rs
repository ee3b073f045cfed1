//! Configuration for splitting and tokenizing.
//!
//! - [`SplitConfig`] - Record delimiter and suggested block count
//! - [`Dialect`] - Field delimiter, quoting and unterminated-quote policy
//! - [`QuotePolicy`] - What to do when a line ends inside quotes

use crate::error::{Error, Result};

/// Default record delimiter for splitting (newline).
pub const DEFAULT_RECORD_DELIMITER: u8 = b'\n';

/// Default suggested block count.
pub const DEFAULT_BLOCK_COUNT: usize = 8;

/// Default field delimiter for tokenizing.
pub const DEFAULT_FIELD_DELIMITER: u8 = b',';

/// Default quote byte for quote-aware tokenizing.
pub const DEFAULT_QUOTE: u8 = b'"';

/// Configuration for delimiter-aligned splitting.
///
/// `block_count` is a suggestion: the splitter may return fewer blocks, never
/// more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    delimiter: u8,
    block_count: usize,
}

impl SplitConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `block_count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bufsplit::SplitConfig;
    ///
    /// let config = SplitConfig::new(b';', 4)?;
    /// assert_eq!(config.block_count(), 4);
    /// assert!(SplitConfig::new(b';', 0).is_err());
    /// # Ok::<(), bufsplit::Error>(())
    /// ```
    pub fn new(delimiter: u8, block_count: usize) -> Result<Self> {
        if block_count == 0 {
            return Err(Error::InvalidArgument {
                message: "block count must be positive",
            });
        }
        Ok(Self {
            delimiter,
            block_count,
        })
    }

    /// Sets the record delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the suggested block count.
    pub fn with_block_count(mut self, block_count: usize) -> Self {
        self.block_count = block_count;
        self
    }

    /// Returns the record delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the suggested block count.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Validates the current configuration.
    ///
    /// ```
    /// use bufsplit::SplitConfig;
    ///
    /// let config = SplitConfig::default().with_block_count(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        Self::new(self.delimiter, self.block_count).map(|_| ())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_RECORD_DELIMITER,
            block_count: DEFAULT_BLOCK_COUNT,
        }
    }
}

/// Handling of a quote that is still open when the line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuotePolicy {
    /// The rest of the line becomes the field's content.
    #[default]
    Lenient,
    /// Tokenization fails with [`Error::MalformedRecord`].
    Strict,
}

/// Describes how a line is broken into fields.
///
/// # Example
///
/// ```
/// use bufsplit::{Dialect, QuotePolicy};
///
/// let tsv = Dialect::new(b'\t').with_quoting(false);
/// assert!(!tsv.quoting());
///
/// let strict = Dialect::default().with_policy(QuotePolicy::Strict);
/// assert_eq!(strict.delimiter(), b',');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dialect {
    delimiter: u8,
    quote: u8,
    quoting: bool,
    policy: QuotePolicy,
}

impl Dialect {
    /// Creates a quote-aware dialect with the given field delimiter.
    pub const fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            quote: DEFAULT_QUOTE,
            quoting: true,
            policy: QuotePolicy::Lenient,
        }
    }

    /// Creates a dialect that treats every delimiter as a separator.
    pub const fn unquoted(delimiter: u8) -> Self {
        Self {
            delimiter,
            quote: DEFAULT_QUOTE,
            quoting: false,
            policy: QuotePolicy::Lenient,
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote byte.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Enables or disables quote handling.
    pub fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }

    /// Sets the unterminated-quote policy.
    pub fn with_policy(mut self, policy: QuotePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the quote byte.
    pub fn quote(&self) -> u8 {
        self.quote
    }

    /// Returns true if quotes suspend delimiter recognition.
    pub fn quoting(&self) -> bool {
        self.quoting
    }

    /// Returns the unterminated-quote policy.
    pub fn policy(&self) -> QuotePolicy {
        self.policy
    }

    /// Validates the current configuration.
    ///
    /// A quote-aware dialect whose quote byte equals its delimiter is
    /// ambiguous and rejected.
    pub fn validate(&self) -> Result<()> {
        if self.quoting && self.quote == self.delimiter {
            return Err(Error::InvalidArgument {
                message: "quote byte cannot equal the delimiter",
            });
        }
        Ok(())
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_config() {
        let config = SplitConfig::default();
        assert_eq!(config.delimiter(), DEFAULT_RECORD_DELIMITER);
        assert_eq!(config.block_count(), DEFAULT_BLOCK_COUNT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_split_builder_pattern() {
        let config = SplitConfig::default()
            .with_delimiter(b'|')
            .with_block_count(3);
        assert_eq!(config.delimiter(), b'|');
        assert_eq!(config.block_count(), 3);
    }

    #[test]
    fn test_invalid_split_config_zero_blocks() {
        assert!(matches!(
            SplitConfig::new(b'\n', 0),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_default_dialect() {
        let dialect = Dialect::default();
        assert_eq!(dialect.delimiter(), b',');
        assert_eq!(dialect.quote(), b'"');
        assert!(dialect.quoting());
        assert_eq!(dialect.policy(), QuotePolicy::Lenient);
    }

    #[test]
    fn test_unquoted_dialect() {
        let dialect = Dialect::unquoted(b'\t');
        assert!(!dialect.quoting());
        assert!(dialect.validate().is_ok());
    }

    #[test]
    fn test_dialect_quote_equals_delimiter() {
        let dialect = Dialect::new(b'\'').with_quote(b'\'');
        assert!(dialect.validate().is_err());
        // Without quoting the quote byte is never consulted.
        assert!(dialect.with_quoting(false).validate().is_ok());
    }
}
