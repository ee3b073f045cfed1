//! Balanced partitioning of an element count into task ranges.
//!
//! - [`TaskRange`] - Inclusive `(start, end)` index span
//! - [`partition`] - Splits `element_count` indices over `task_count` tasks

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// An inclusive span of element indices assigned to one task.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskRange {
    /// First index in the span.
    pub start: usize,
    /// Last index in the span (inclusive).
    pub end: usize,
}

impl TaskRange {
    /// Number of indices covered (always at least 1).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns true if `index` lies within the span.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Returns the span as a standard inclusive range.
    pub fn as_range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl From<TaskRange> for RangeInclusive<usize> {
    fn from(range: TaskRange) -> Self {
        range.as_range()
    }
}

impl fmt::Display for TaskRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Splits `element_count` indices into at most `task_count` contiguous ranges.
///
/// Exactly `min(task_count, element_count)` ranges are returned. Each range
/// holds `element_count / task_count` indices, and the first
/// `element_count % task_count` ranges hold one more. An `element_count` of
/// zero yields an empty vector.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `task_count` is zero.
///
/// # Example
///
/// ```
/// use bufsplit::{partition, TaskRange};
///
/// let ranges = partition(3, 10)?;
/// assert_eq!(
///     ranges,
///     vec![
///         TaskRange { start: 0, end: 3 },
///         TaskRange { start: 4, end: 6 },
///         TaskRange { start: 7, end: 9 },
///     ]
/// );
/// # Ok::<(), bufsplit::Error>(())
/// ```
pub fn partition(task_count: usize, element_count: usize) -> Result<Vec<TaskRange>> {
    if task_count == 0 {
        return Err(Error::InvalidArgument {
            message: "task_count must be positive",
        });
    }

    let tasks = task_count.min(element_count);
    if tasks == 0 {
        return Ok(Vec::new());
    }

    let base = element_count / tasks;
    let remainder = element_count % tasks;

    let mut ranges = Vec::with_capacity(tasks);
    let mut start = 0;
    for i in 0..tasks {
        let len = if i < remainder { base + 1 } else { base };
        ranges.push(TaskRange {
            start,
            end: start + len - 1,
        });
        start += len;
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tasks_ten_elements() {
        let ranges = partition(3, 10).unwrap();
        let pairs: Vec<_> = ranges.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(pairs, vec![(0, 3), (4, 6), (7, 9)]);
    }

    #[test]
    fn test_even_split() {
        let ranges = partition(4, 8).unwrap();
        assert!(ranges.iter().all(|r| r.len() == 2));
        assert_eq!(ranges.last().unwrap().end, 7);
    }

    #[test]
    fn test_more_tasks_than_elements() {
        let ranges = partition(10, 3).unwrap();
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn test_single_task() {
        let ranges = partition(1, 42).unwrap();
        assert_eq!(ranges, vec![TaskRange { start: 0, end: 41 }]);
    }

    #[test]
    fn test_zero_elements_is_empty() {
        assert!(partition(4, 0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_tasks_rejected() {
        assert!(matches!(
            partition(0, 10),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(partition(0, 0).is_err());
    }

    #[test]
    fn test_range_helpers() {
        let range = TaskRange { start: 4, end: 6 };
        assert_eq!(range.len(), 3);
        assert!(range.contains(4));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert_eq!(range.as_range(), 4..=6);
        assert_eq!(range.to_string(), "[4, 6]");
    }
}
