//! The milestone ladder.
//!
//! Rungs are dense at the low end (every 100 votes up to 500) and sparse at the
//! high end. All lookups are linear scans over eleven values.

use crate::count::VoteCount;

/// Achievement thresholds, strictly increasing.
pub const MILESTONE_LADDER: [u64; 11] = [
    100, 200, 300, 400, 500, 1_000, 5_000, 10_000, 25_000, 50_000, 100_000,
];

/// Lowest rung. Counts below it have no badge.
pub const FIRST_RUNG: u64 = MILESTONE_LADDER[0];

/// Highest rung. Progress targets stay pinned here once it is reached.
pub const TOP_RUNG: u64 = MILESTONE_LADDER[MILESTONE_LADDER.len() - 1];

const fn strictly_increasing(ladder: &[u64]) -> bool {
    let mut i = 1;
    while i < ladder.len() {
        if ladder[i] <= ladder[i - 1] {
            return false;
        }
        i += 1;
    }
    ladder[0] > 0
}

const _: () = assert!(strictly_increasing(&MILESTONE_LADDER));

/// Index of the first rung strictly greater than `count`.
///
/// `None` once the count has met or passed the top rung.
pub fn next_rung_index(count: VoteCount) -> Option<usize> {
    MILESTONE_LADDER.iter().position(|&rung| rung > count.get())
}

/// Number of rungs at or below `count`.
pub fn rungs_achieved(count: VoteCount) -> usize {
    next_rung_index(count).unwrap_or(MILESTONE_LADDER.len())
}

/// Largest rung at or below `count`.
pub fn highest_achieved(count: VoteCount) -> Option<u64> {
    rungs_achieved(count)
        .checked_sub(1)
        .map(|index| MILESTONE_LADDER[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_rung_is_strictly_greater() {
        assert_eq!(next_rung_index(VoteCount(0)), Some(0));
        assert_eq!(next_rung_index(VoteCount(99)), Some(0));
        assert_eq!(next_rung_index(VoteCount(100)), Some(1));
        assert_eq!(next_rung_index(VoteCount(9_999)), Some(7));
        assert_eq!(next_rung_index(VoteCount(99_999)), Some(10));
        assert_eq!(next_rung_index(VoteCount(100_000)), None);
        assert_eq!(next_rung_index(VoteCount(u64::MAX)), None);
    }

    #[test]
    fn achieved_counts() {
        assert_eq!(rungs_achieved(VoteCount(50)), 0);
        assert_eq!(rungs_achieved(VoteCount(100)), 1);
        assert_eq!(rungs_achieved(VoteCount(1_000)), 6);
        assert_eq!(rungs_achieved(VoteCount(10_000)), 8);
        assert_eq!(rungs_achieved(VoteCount(150_000)), 11);
    }

    #[test]
    fn highest_rung() {
        assert_eq!(highest_achieved(VoteCount(0)), None);
        assert_eq!(highest_achieved(VoteCount(199)), Some(100));
        assert_eq!(highest_achieved(VoteCount(4_999)), Some(1_000));
        assert_eq!(highest_achieved(VoteCount(1_000_000)), Some(TOP_RUNG));
    }
}
