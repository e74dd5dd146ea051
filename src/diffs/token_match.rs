use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A run of `size` tokens that are pairwise equal between
/// `old[start_in_old..start_in_old + size]` and
/// `new[start_in_new..start_in_new + size]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start_in_old: usize,
    pub start_in_new: usize,
    pub size: usize,
}

impl Match {
    #[must_use]
    pub fn new(start_in_old: usize, start_in_new: usize, size: usize) -> Self {
        Match {
            start_in_old,
            start_in_new,
            size,
        }
    }

    /// The empty match closing an alignment at the end of both sequences.
    #[must_use]
    pub fn sentinel(old_len: usize, new_len: usize) -> Self { Match::new(old_len, new_len, 0) }

    #[must_use]
    pub fn end_in_old(&self) -> usize { self.start_in_old + self.size }

    #[must_use]
    pub fn end_in_new(&self) -> usize { self.start_in_new + self.size }

    #[must_use]
    pub fn old_range(&self) -> Range<usize> { self.start_in_old..self.end_in_old() }

    #[must_use]
    pub fn new_range(&self) -> Range<usize> { self.start_in_new..self.end_in_new() }
}
