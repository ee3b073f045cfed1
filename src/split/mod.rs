//! Splitting large buffers into delimiter-aligned blocks.
//!
//! - [`Splitter`] - Config-driven splitter (read-only and mutable views)
//! - [`Block`] / [`BlockMut`] - Non-owning block views
//! - [`split_buffer`] / [`split_buffer_mut`] - One-shot helpers

mod block;
mod splitter;

pub use block::{Block, BlockMut, Records, RecordsMut};
pub use splitter::{Splitter, split_buffer, split_buffer_mut};
