use std::ops::Range;

use tracing::trace;

use super::{block_matcher::find_match_with_fallback, token_match::Match};
use crate::Token;

/// Divide-and-conquer alignment of two token sequences.
///
/// The longest block shared by the whole of `old` and `new` is found first,
/// then the regions to the left and to the right of it are solved the same
/// way. The returned blocks are ordered and do not overlap in either sequence.
///
/// Recursion depth is bounded by the length of the shorter sequence.
#[must_use]
pub fn matching_blocks(old: &[Token], new: &[Token], max_granularity: usize) -> Vec<Match> {
    let blocks = solve(old, 0..old.len(), new, 0..new.len(), max_granularity);

    debug_assert!(
        blocks.windows(2).all(|pair| {
            pair[0].end_in_old() <= pair[1].start_in_old
                && pair[0].end_in_new() <= pair[1].start_in_new
        }),
        "Matching blocks must be ordered and non-overlapping"
    );

    blocks
}

fn solve(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
    max_granularity: usize,
) -> Vec<Match> {
    let Some(block) = find_match_with_fallback(
        old,
        old_range.clone(),
        new,
        new_range.clone(),
        max_granularity,
    ) else {
        return Vec::new();
    };

    trace!(?block, "found matching block");

    let has_leading_gap =
        old_range.start < block.start_in_old && new_range.start < block.start_in_new;
    let mut result = if has_leading_gap {
        solve(
            old,
            old_range.start..block.start_in_old,
            new,
            new_range.start..block.start_in_new,
            max_granularity,
        )
    } else {
        Vec::new()
    };

    result.push(block);

    if block.end_in_old() < old_range.end && block.end_in_new() < new_range.end {
        result.extend(solve(
            old,
            block.end_in_old()..old_range.end,
            new,
            block.end_in_new()..new_range.end,
            max_granularity,
        ));
    }

    result
}
