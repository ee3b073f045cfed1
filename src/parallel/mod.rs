//! Parallel-for over the blocks of one buffer.
//!
//! The splitter itself never schedules work; this module is the driver that
//! hands each [`BlockMut`] to the rayon thread pool. Blocks never overlap, so
//! workers can tokenize them in place without any synchronization.
//!
//! This module requires the `parallel` feature to be enabled.
//!
//! # Example
//!
//! ```
//! use bufsplit::{SplitConfig, Tokenizer, parallel};
//!
//! let mut data = b"a,1\nb,2\nc,3\nd,4\n".to_vec();
//! let config = SplitConfig::new(b'\n', 2)?;
//! let tokenizer = Tokenizer::default();
//!
//! let counts = parallel::try_map_blocks(&mut data, &config, |block| {
//!     let mut fields = 0;
//!     for record in block.into_records() {
//!         fields += tokenizer.tokenize_in_place(record)?.len();
//!     }
//!     Ok(fields)
//! })?;
//! assert_eq!(counts.iter().sum::<usize>(), 8);
//! # Ok::<(), bufsplit::Error>(())
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::config::SplitConfig;
use crate::error::Result;
use crate::split::{BlockMut, Splitter};

/// Splits `buffer` and runs `f` on every block in parallel.
///
/// # Errors
///
/// [`crate::Error::InvalidArgument`] if the block count is zero.
pub fn for_each_block<F>(buffer: &mut [u8], config: &SplitConfig, f: F) -> Result<()>
where
    F: Fn(BlockMut<'_>) + Sync + Send,
{
    let blocks = Splitter::new(*config).split_mut(buffer)?;
    debug!(blocks = blocks.len(), threads = rayon::current_num_threads(), "dispatching blocks");
    blocks.into_par_iter().for_each(f);
    Ok(())
}

/// Splits `buffer` and maps every block in parallel, keeping block order.
pub fn map_blocks<T, F>(buffer: &mut [u8], config: &SplitConfig, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(BlockMut<'_>) -> T + Sync + Send,
{
    let blocks = Splitter::new(*config).split_mut(buffer)?;
    debug!(blocks = blocks.len(), threads = rayon::current_num_threads(), "dispatching blocks");
    Ok(blocks.into_par_iter().map(f).collect())
}

/// Like [`map_blocks`] but stops at the first error returned by `f`.
pub fn try_map_blocks<T, F>(buffer: &mut [u8], config: &SplitConfig, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(BlockMut<'_>) -> Result<T> + Sync + Send,
{
    let blocks = Splitter::new(*config).split_mut(buffer)?;
    debug!(blocks = blocks.len(), threads = rayon::current_num_threads(), "dispatching blocks");
    blocks.into_par_iter().map(f).collect()
}
