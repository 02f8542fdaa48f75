//! Milestone Progress & Badge Tier Engine
//!
//! Turns a product's vote count into two derived records:
//!
//! - [`MilestoneProgress`]: the rung being worked toward and how far along the
//!   count is, as a percentage.
//! - [`BadgeTier`]: the tier group (Starter / Growth / Elite) and level 1-5 for
//!   the rungs already cleared.
//!
//! # Ladder
//!
//! ```text
//! 100  200  300  400  500 | 1000  5000 | 10000  25000  50000  100000
//! ------- Starter ------- | - Growth - | ---------- Elite ----------
//! ```
//!
//! Both computations are pure functions of the count and the constant
//! [`MILESTONE_LADDER`]. They hold no state and may be called from any thread.
//!
//! # Example
//!
//! ```
//! use vibes_milestones::{BadgeTier, MilestoneProgress, TierGroup, VoteCount};
//!
//! let votes = VoteCount::new(1_200);
//!
//! let progress = MilestoneProgress::for_votes(votes);
//! assert_eq!(progress.current_milestone, 5_000);
//! assert_eq!(progress.progress_percent, 5.0);
//!
//! let badge = BadgeTier::for_votes(votes).unwrap();
//! assert_eq!(badge.tier_group, TierGroup::Growth);
//! assert_eq!(badge.level, 1);
//! ```

mod badge;
mod count;
mod error;
mod ladder;
mod progress;

pub use badge::{
    compute_badge_tier, BadgeTier, TierGroup, ELITE_RUNGS_PER_LEVEL, ELITE_THRESHOLD,
    GROWTH_RUNGS_PER_LEVEL, GROWTH_THRESHOLD, MAX_LEVEL, MIN_LEVEL, STARTER_RUNGS,
};
pub use count::VoteCount;
pub use error::{Error, Result};
pub use ladder::{highest_achieved, next_rung_index, rungs_achieved, FIRST_RUNG, MILESTONE_LADDER, TOP_RUNG};
pub use progress::{compute_milestone_progress, MilestoneProgress};

// The Starter group must cover exactly the rungs below the Growth threshold.
const _: () = {
    let mut below = 0;
    let mut i = 0;
    while i < MILESTONE_LADDER.len() {
        if MILESTONE_LADDER[i] < GROWTH_THRESHOLD {
            below += 1;
        }
        i += 1;
    }
    assert!(below == STARTER_RUNGS);
};
