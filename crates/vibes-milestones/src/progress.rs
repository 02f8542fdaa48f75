//! Progress toward the next milestone.
//!
//! The target is always the first rung strictly above the current count, so a
//! count landing exactly on a rung starts over at 0% toward the next one. Past
//! the top rung the target stays pinned to it and progress reads 100%.

use crate::count::VoteCount;
use crate::error::Result;
use crate::ladder::{next_rung_index, MILESTONE_LADDER, TOP_RUNG};

/// Progress of a vote count between two adjacent rungs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MilestoneProgress {
    /// Rung the count has most recently passed, 0 before the first rung.
    pub previous_milestone: u64,
    /// Rung being worked toward.
    pub current_milestone: u64,
    /// Position between the two rungs, in [0, 100].
    pub progress_percent: f64,
    /// Set only once the top rung has been reached.
    pub is_complete: bool,
}

impl MilestoneProgress {
    /// Compute progress for a validated count.
    pub fn for_votes(count: VoteCount) -> Self {
        let votes = count.get();
        let (previous, current) = match next_rung_index(count) {
            Some(0) => (0, MILESTONE_LADDER[0]),
            Some(index) => (MILESTONE_LADDER[index - 1], MILESTONE_LADDER[index]),
            None => (TOP_RUNG, TOP_RUNG),
        };

        let progress_percent = if current == previous {
            100.0
        } else {
            let span = (current - previous) as f64;
            let done = votes.saturating_sub(previous) as f64;
            (done / span * 100.0).clamp(0.0, 100.0)
        };

        Self {
            previous_milestone: previous,
            current_milestone: current,
            progress_percent,
            is_complete: votes >= current,
        }
    }

    /// Votes still missing to reach the current milestone.
    pub fn remaining(&self, count: VoteCount) -> u64 {
        self.current_milestone.saturating_sub(count.get())
    }
}

/// Compute milestone progress for a raw, possibly negative, count.
///
/// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) for
/// negative input.
///
/// # Examples
///
/// ```
/// use vibes_milestones::compute_milestone_progress;
///
/// let p = compute_milestone_progress(150).unwrap();
/// assert_eq!((p.previous_milestone, p.current_milestone), (100, 200));
/// assert_eq!(p.progress_percent, 50.0);
///
/// assert!(compute_milestone_progress(-1).is_err());
/// ```
pub fn compute_milestone_progress(count: i64) -> Result<MilestoneProgress> {
    let count = VoteCount::try_from(count)?;
    Ok(MilestoneProgress::for_votes(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn progress(votes: u64) -> MilestoneProgress {
        MilestoneProgress::for_votes(VoteCount(votes))
    }

    #[test]
    fn zero_votes() {
        let p = progress(0);
        assert_eq!(p.previous_milestone, 0);
        assert_eq!(p.current_milestone, 100);
        assert_eq!(p.progress_percent, 0.0);
        assert!(!p.is_complete);
    }

    #[test]
    fn exact_hit_resets_toward_next_rung() {
        let p = progress(100);
        assert_eq!(p.previous_milestone, 100);
        assert_eq!(p.current_milestone, 200);
        assert_eq!(p.progress_percent, 0.0);
        assert!(!p.is_complete);

        let p = progress(1_000);
        assert_eq!((p.previous_milestone, p.current_milestone), (1_000, 5_000));
        assert_eq!(p.progress_percent, 0.0);
    }

    #[test]
    fn interpolates_between_rungs() {
        assert_eq!(progress(50).progress_percent, 50.0);
        assert_eq!(progress(125).progress_percent, 25.0);
        assert_eq!(progress(3_000).progress_percent, 50.0);
        assert_eq!(progress(75_000).progress_percent, 50.0);
    }

    #[test]
    fn pinned_at_top_rung() {
        for votes in [100_000, 150_000, u64::MAX] {
            let p = progress(votes);
            assert_eq!(p.previous_milestone, 100_000);
            assert_eq!(p.current_milestone, 100_000);
            assert_eq!(p.progress_percent, 100.0);
            assert!(p.is_complete);
        }
    }

    #[test]
    fn just_below_top_rung() {
        let p = progress(99_999);
        assert_eq!((p.previous_milestone, p.current_milestone), (50_000, 100_000));
        assert!(!p.is_complete);
        assert!(p.progress_percent < 100.0);
    }

    #[test]
    fn remaining_votes() {
        assert_eq!(progress(150).remaining(VoteCount(150)), 50);
        assert_eq!(progress(200_000).remaining(VoteCount(200_000)), 0);
    }

    #[test]
    fn negative_count_rejected() {
        assert!(matches!(
            compute_milestone_progress(-1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn idempotent() {
        for votes in [0, 1, 100, 4_321, 100_000, 123_456] {
            assert_eq!(progress(votes), progress(votes));
        }
    }

    proptest! {
        #[test]
        fn percent_within_bounds(votes in 0u64..1_000_000) {
            let p = progress(votes);
            prop_assert!((0.0..=100.0).contains(&p.progress_percent));
        }

        #[test]
        fn previous_never_exceeds_count(votes in 0u64..1_000_000) {
            let p = progress(votes);
            prop_assert!(p.previous_milestone <= votes);
            if p.is_complete {
                prop_assert_eq!(p.previous_milestone, p.current_milestone);
            } else {
                prop_assert!(p.current_milestone > p.previous_milestone);
                prop_assert!(p.current_milestone > votes);
            }
        }

        #[test]
        fn monotonic_within_interval(a in 0u64..120_000, b in 0u64..120_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (p_lo, p_hi) = (progress(lo), progress(hi));
            if p_lo.current_milestone == p_hi.current_milestone
                && p_lo.previous_milestone == p_hi.previous_milestone
            {
                prop_assert!(p_lo.progress_percent <= p_hi.progress_percent);
            }
        }

        #[test]
        fn signed_and_unsigned_agree(votes in 0i64..1_000_000) {
            let via_signed = compute_milestone_progress(votes).unwrap();
            prop_assert_eq!(via_signed, progress(votes as u64));
        }

        #[test]
        fn all_negatives_rejected(votes in i64::MIN..0) {
            prop_assert!(compute_milestone_progress(votes).is_err());
        }
    }
}
