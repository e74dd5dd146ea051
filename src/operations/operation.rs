use std::{iter, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::Action;
use crate::diffs::token_match::Match;

/// One edit step covering the half-open token ranges
/// `start_in_old..end_in_old` of the old sequence and
/// `start_in_new..end_in_new` of the new sequence.
///
/// `Insert`-s have an empty old range, `Delete`-s an empty new range and
/// `Equal`-s ranges of identical length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,
    pub start_in_old: usize,
    pub end_in_old: usize,
    pub start_in_new: usize,
    pub end_in_new: usize,
}

impl Operation {
    #[must_use]
    pub fn new(action: Action, old_range: Range<usize>, new_range: Range<usize>) -> Self {
        debug_assert!(
            action != Action::Equal || old_range.len() == new_range.len(),
            "Equal operations must span ranges of the same length"
        );

        Operation {
            action,
            start_in_old: old_range.start,
            end_in_old: old_range.end,
            start_in_new: new_range.start,
            end_in_new: new_range.end,
        }
    }

    #[must_use]
    pub fn old_range(&self) -> Range<usize> { self.start_in_old..self.end_in_old }

    #[must_use]
    pub fn new_range(&self) -> Range<usize> { self.start_in_new..self.end_in_new }

    /// Turn ordered, non-overlapping matching blocks into the operations
    /// transforming a sequence of `old_len` tokens into one of `new_len`
    /// tokens. The gaps between blocks become `Insert`, `Delete` or `Replace`
    /// operations and the blocks themselves `Equal` ones.
    ///
    /// The returned operations cover `0..old_len` and `0..new_len` exactly
    /// once, in order.
    #[must_use]
    pub fn vec_from(matches: &[Match], old_len: usize, new_len: usize) -> Vec<Self> {
        let mut result = Vec::with_capacity(2 * matches.len() + 1);
        let mut position_in_old = 0;
        let mut position_in_new = 0;

        for block in matches
            .iter()
            .copied()
            .chain(iter::once(Match::sentinel(old_len, new_len)))
        {
            let action = Action::for_gap(
                position_in_old == block.start_in_old,
                position_in_new == block.start_in_new,
            );

            if action != Action::None {
                result.push(Operation::new(
                    action,
                    position_in_old..block.start_in_old,
                    position_in_new..block.start_in_new,
                ));
            }

            if block.size > 0 {
                result.push(Operation::new(
                    Action::Equal,
                    block.old_range(),
                    block.new_range(),
                ));
            }

            position_in_old = block.end_in_old();
            position_in_new = block.end_in_new();
        }

        debug_assert!(
            covers(&result, old_len, new_len),
            "Operations must cover both sequences exactly once"
        );
        debug!(operation_count = result.len(), "planned operations");

        result
    }
}

/// Whether `operations` partition `0..old_len` and `0..new_len` in order.
pub(crate) fn covers(operations: &[Operation], old_len: usize, new_len: usize) -> bool {
    let mut position_in_old = 0;
    let mut position_in_new = 0;

    for operation in operations {
        if operation.start_in_old != position_in_old || operation.start_in_new != position_in_new {
            return false;
        }
        position_in_old = operation.end_in_old;
        position_in_new = operation.end_in_new;
    }

    position_in_old == old_len && position_in_new == new_len
}
