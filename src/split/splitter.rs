//! Delimiter-aligned splitting of one large buffer into blocks.
//!
//! Candidate cut points come from [`partition`] over the buffer length. Each
//! candidate then slides forward to the next delimiter, so no record is ever
//! cut in half. The delimiter stays with the block it terminates.
//!
//! # Example
//!
//! ```
//! use bufsplit::{SplitConfig, Splitter};
//!
//! let data = b"id,name\n1,alice\n2,bob\n3,carol\n";
//! let splitter = Splitter::new(SplitConfig::new(b'\n', 3)?);
//!
//! let blocks = splitter.split(data)?;
//! assert!(blocks.len() <= 3);
//!
//! let joined: Vec<u8> = blocks.iter().flat_map(|b| b.data().iter().copied()).collect();
//! assert_eq!(joined, data);
//! # Ok::<(), bufsplit::Error>(())
//! ```

use std::ops::Range;

use memchr::memchr;
use tracing::debug;

use super::block::{Block, BlockMut};
use crate::config::SplitConfig;
use crate::error::Result;
use crate::partition::partition;
use crate::util::carve_mut;

/// Splits buffers into delimiter-aligned blocks.
///
/// `Splitter` holds a [`SplitConfig`]; it keeps no other state and never
/// mutates the buffers it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Creates a new splitter with the given configuration.
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Computes the byte spans of each block without borrowing the buffer.
    ///
    /// Spans are contiguous, non-empty, in buffer order and together cover
    /// `0..buffer.len()`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidArgument`] if the configured block count is zero.
    pub fn boundaries(&self, buffer: &[u8]) -> Result<Vec<Range<usize>>> {
        self.config.validate()?;
        block_boundaries(buffer, self.config.delimiter(), self.config.block_count())
    }

    /// Splits `buffer` into read-only blocks.
    pub fn split<'a>(&self, buffer: &'a [u8]) -> Result<Vec<Block<'a>>> {
        let delimiter = self.config.delimiter();
        let blocks = self
            .boundaries(buffer)?
            .into_iter()
            .enumerate()
            .map(|(index, span)| Block {
                index,
                offset: span.start,
                delimiter,
                data: &buffer[span],
            })
            .collect();
        Ok(blocks)
    }

    /// Splits `buffer` into disjoint mutable blocks.
    ///
    /// The blocks may be handed to different threads and tokenized in place.
    pub fn split_mut<'a>(&self, buffer: &'a mut [u8]) -> Result<Vec<BlockMut<'a>>> {
        let delimiter = self.config.delimiter();
        let spans = self.boundaries(buffer)?;
        let blocks = carve_mut(buffer, &spans)
            .into_iter()
            .zip(spans)
            .enumerate()
            .map(|(index, (data, span))| BlockMut {
                index,
                offset: span.start,
                delimiter,
                data,
            })
            .collect();
        Ok(blocks)
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }
}

/// Splits `buffer` into at most `suggested_block_count` read-only blocks.
///
/// An empty buffer yields no blocks.
///
/// # Errors
///
/// [`crate::Error::InvalidArgument`] if `suggested_block_count` is zero.
pub fn split_buffer(
    buffer: &[u8],
    delimiter: u8,
    suggested_block_count: usize,
) -> Result<Vec<Block<'_>>> {
    Splitter::new(SplitConfig::new(delimiter, suggested_block_count)?).split(buffer)
}

/// Splits `buffer` into at most `suggested_block_count` mutable blocks.
///
/// # Errors
///
/// [`crate::Error::InvalidArgument`] if `suggested_block_count` is zero.
pub fn split_buffer_mut(
    buffer: &mut [u8],
    delimiter: u8,
    suggested_block_count: usize,
) -> Result<Vec<BlockMut<'_>>> {
    Splitter::new(SplitConfig::new(delimiter, suggested_block_count)?).split_mut(buffer)
}

fn block_boundaries(
    buffer: &[u8],
    delimiter: u8,
    block_count: usize,
) -> Result<Vec<Range<usize>>> {
    let candidates = partition(block_count, buffer.len())?;
    let mut spans = Vec::with_capacity(candidates.len());
    let mut start = 0;

    // The last range always runs to the end of the buffer, so only the
    // interior range ends are cut candidates.
    for candidate in candidates.iter().take(candidates.len().saturating_sub(1)) {
        if candidate.end < start {
            // Already swallowed by the previous block.
            continue;
        }
        let Some(pos) = memchr(delimiter, &buffer[candidate.end..]) else {
            break;
        };
        let cut = candidate.end + pos + 1;
        if cut >= buffer.len() {
            break;
        }
        spans.push(start..cut);
        start = cut;
    }

    if start < buffer.len() {
        spans.push(start..buffer.len());
    }

    debug!(
        len = buffer.len(),
        requested = block_count,
        produced = spans.len(),
        "split buffer into blocks"
    );

    Ok(spans)
}
