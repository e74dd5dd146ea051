//! Hash-indexed search for the longest block of tokens shared by two ranges.
//!
//! Every window of `granularity` tokens of the new range is indexed by its
//! content, then a window of the same width slides over the old range. Each
//! old window found in the index seeds a run which is extended in both
//! directions for as long as the tokens stay equal.
//!
//! * time: `O(N + M)` for indexing plus the cost of extending each distinct
//!   run once
//! * space `O(M)`
//!
//! Coarse granularities favour few, long and contextually meaningful blocks;
//! granularity 1 finds a block whenever any token is shared.

use std::{collections::HashMap, ops::Range};

use tracing::trace;

use super::token_match::Match;
use crate::{
    Token,
    utils::common_len::{common_prefix_len, common_suffix_len},
};

/// Find the longest run of equal tokens between `old[old_range]` and
/// `new[new_range]` that contains at least one equal window of `granularity`
/// tokens.
///
/// Ties are broken in favour of the run found first, scanning the old range
/// left to right and candidate positions in the new range left to right.
#[must_use]
pub fn find_match(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
    granularity: usize,
) -> Option<Match> {
    if granularity == 0 || old_range.len() < granularity || new_range.len() < granularity {
        return None;
    }

    let mut windows_in_new: HashMap<&[Token], Vec<usize>> = HashMap::new();
    for start in new_range.start..=new_range.end - granularity {
        windows_in_new
            .entry(&new[start..start + granularity])
            .or_default()
            .push(start);
    }

    let mut best: Option<Match> = None;

    // The end (in old) of the latest run found on each diagonal. Seeds inside
    // it would only rediscover the same run.
    let mut explored_until: HashMap<usize, usize> = HashMap::new();

    for old_start in old_range.start..=old_range.end - granularity {
        let Some(candidates) = windows_in_new.get(&old[old_start..old_start + granularity]) else {
            continue;
        };

        for &new_start in candidates {
            let diagonal = old_start.wrapping_sub(new_start);
            if explored_until
                .get(&diagonal)
                .is_some_and(|&end| old_start < end)
            {
                continue;
            }

            let backward = common_suffix_len(
                old,
                old_range.start..old_start,
                new,
                new_range.start..new_start,
            );
            let forward =
                common_prefix_len(old, old_start..old_range.end, new, new_start..new_range.end);

            let candidate = Match::new(
                old_start - backward,
                new_start - backward,
                backward + forward,
            );
            explored_until.insert(diagonal, candidate.end_in_old());

            if best.is_none_or(|best| candidate.size > best.size) {
                best = Some(candidate);
            }
        }
    }

    best
}

/// Try [`find_match`] from `max_granularity` down to 1 and return the first
/// block found.
#[must_use]
pub fn find_match_with_fallback(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
    max_granularity: usize,
) -> Option<Match> {
    (1..=max_granularity).rev().find_map(|granularity| {
        let found = find_match(old, old_range.clone(), new, new_range.clone(), granularity);
        if found.is_none() {
            trace!(
                granularity,
                old_range = ?old_range,
                new_range = ?new_range,
                "no block found"
            );
        }
        found
    })
}
