//! Badge tiers.
//!
//! A badge summarises how many rungs a count has cleared. Rungs fall into
//! three groups by the highest rung reached, and the level inside a group is
//! derived from the total number of rungs cleared:
//!
//! | Group   | Highest rung       | Level                 |
//! |---------|--------------------|-----------------------|
//! | Starter | < 1 000            | `achieved`            |
//! | Growth  | 1 000 ..= 9 999    | `(achieved - 5)/2 + 1`|
//! | Elite   | >= 10 000          | `achieved/3 + 1`      |
//!
//! Every level is then clamped to `1..=5`.

use crate::count::VoteCount;
use crate::error::Result;
use crate::ladder::{highest_achieved, rungs_achieved};
use std::fmt;

/// First rung that counts as Growth.
pub const GROWTH_THRESHOLD: u64 = 1_000;

/// First rung that counts as Elite.
pub const ELITE_THRESHOLD: u64 = 10_000;

/// Number of rungs below [`GROWTH_THRESHOLD`].
pub const STARTER_RUNGS: usize = 5;

/// Growth levels advance once per this many rungs.
pub const GROWTH_RUNGS_PER_LEVEL: usize = 2;

/// Elite levels advance once per this many rungs.
pub const ELITE_RUNGS_PER_LEVEL: usize = 3;

/// Lowest badge level.
pub const MIN_LEVEL: u8 = 1;

/// Highest badge level.
pub const MAX_LEVEL: u8 = 5;

/// Coarse grouping of rungs used to pick badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TierGroup {
    Starter,
    Growth,
    Elite,
}

impl TierGroup {
    /// Group for a reached rung.
    pub const fn for_rung(rung: u64) -> Self {
        if rung >= ELITE_THRESHOLD {
            Self::Elite
        } else if rung >= GROWTH_THRESHOLD {
            Self::Growth
        } else {
            Self::Starter
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Growth => "Growth",
            Self::Elite => "Elite",
        }
    }

    /// Icon class the presentation layer renders for this group.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Starter => "icon-sparkles",
            Self::Growth => "icon-trending-up",
            Self::Elite => "icon-crown",
        }
    }

    /// Unclamped level for a number of rungs cleared.
    fn raw_level(self, achieved: usize) -> usize {
        match self {
            Self::Starter => achieved,
            Self::Growth => achieved.saturating_sub(STARTER_RUNGS) / GROWTH_RUNGS_PER_LEVEL + 1,
            Self::Elite => achieved / ELITE_RUNGS_PER_LEVEL + 1,
        }
    }
}

impl fmt::Display for TierGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Achievement badge for a vote count.
///
/// Serializes with the group's display `name` and `icon` alongside the stored
/// fields; both are ignored when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BadgeTier {
    /// Largest rung at or below the count.
    pub highest_achieved: u64,
    /// Number of rungs cleared.
    pub achieved_count: usize,
    pub tier_group: TierGroup,
    /// Depth within the group, in `1..=5`.
    pub level: u8,
}

impl BadgeTier {
    /// Badge for a validated count, `None` below the first rung.
    pub fn for_votes(count: VoteCount) -> Option<Self> {
        let highest = highest_achieved(count)?;
        let achieved = rungs_achieved(count);
        let tier_group = TierGroup::for_rung(highest);

        let level = tier_group
            .raw_level(achieved)
            .clamp(usize::from(MIN_LEVEL), usize::from(MAX_LEVEL)) as u8;

        Some(Self {
            highest_achieved: highest,
            achieved_count: achieved,
            tier_group,
            level,
        })
    }

    /// Display name of the group.
    pub fn name(&self) -> &'static str {
        self.tier_group.name()
    }

    /// Icon class of the group.
    pub fn icon(&self) -> &'static str {
        self.tier_group.icon()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BadgeTier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("BadgeTier", 6)?;
        state.serialize_field("highestAchieved", &self.highest_achieved)?;
        state.serialize_field("achievedCount", &self.achieved_count)?;
        state.serialize_field("tierGroup", &self.tier_group)?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("icon", self.icon())?;
        state.end()
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tier_group, self.level)
    }
}

/// Compute the badge for a raw, possibly negative, count.
///
/// # Examples
///
/// ```
/// use vibes_milestones::{compute_badge_tier, TierGroup};
///
/// assert_eq!(compute_badge_tier(50).unwrap(), None);
///
/// let badge = compute_badge_tier(1_000).unwrap().unwrap();
/// assert_eq!(badge.tier_group, TierGroup::Growth);
/// assert_eq!(badge.level, 1);
/// ```
pub fn compute_badge_tier(count: i64) -> Result<Option<BadgeTier>> {
    let count = VoteCount::try_from(count)?;
    Ok(BadgeTier::for_votes(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ladder::MILESTONE_LADDER;
    use proptest::prelude::*;

    fn badge(votes: u64) -> Option<BadgeTier> {
        BadgeTier::for_votes(VoteCount(votes))
    }

    #[test]
    fn no_badge_below_first_rung() {
        assert_eq!(badge(0), None);
        assert_eq!(badge(50), None);
        assert_eq!(badge(99), None);
    }

    #[test]
    fn starter_levels() {
        let b = badge(100).unwrap();
        assert_eq!(b.tier_group, TierGroup::Starter);
        assert_eq!(b.level, 1);

        let b = badge(500).unwrap();
        assert_eq!(b.tier_group, TierGroup::Starter);
        assert_eq!(b.level, 5);
        assert_eq!(b.highest_achieved, 500);
    }

    #[test]
    fn growth_levels_group_by_two() {
        let b = badge(1_000).unwrap();
        assert_eq!(b.tier_group, TierGroup::Growth);
        assert_eq!(b.achieved_count, 6);
        assert_eq!(b.level, 1);

        let b = badge(5_000).unwrap();
        assert_eq!(b.achieved_count, 7);
        assert_eq!(b.level, 2);
    }

    #[test]
    fn elite_levels_group_by_three() {
        let expected = [(10_000, 8, 3), (25_000, 9, 4), (50_000, 10, 4), (100_000, 11, 4)];
        for (votes, achieved, level) in expected {
            let b = badge(votes).unwrap();
            assert_eq!(b.tier_group, TierGroup::Elite, "votes {votes}");
            assert_eq!(b.achieved_count, achieved, "votes {votes}");
            assert_eq!(b.level, level, "votes {votes}");
        }
    }

    #[test]
    fn full_table() {
        let expected = [
            (TierGroup::Starter, 1),
            (TierGroup::Starter, 2),
            (TierGroup::Starter, 3),
            (TierGroup::Starter, 4),
            (TierGroup::Starter, 5),
            (TierGroup::Growth, 1),
            (TierGroup::Growth, 2),
            (TierGroup::Elite, 3),
            (TierGroup::Elite, 4),
            (TierGroup::Elite, 4),
            (TierGroup::Elite, 4),
        ];
        for (rung, (group, level)) in MILESTONE_LADDER.iter().zip(expected) {
            let b = badge(*rung).unwrap();
            assert_eq!((b.tier_group, b.level), (group, level), "rung {rung}");
        }
    }

    #[test]
    fn group_boundaries() {
        assert_eq!(TierGroup::for_rung(500), TierGroup::Starter);
        assert_eq!(TierGroup::for_rung(999), TierGroup::Starter);
        assert_eq!(TierGroup::for_rung(1_000), TierGroup::Growth);
        assert_eq!(TierGroup::for_rung(9_999), TierGroup::Growth);
        assert_eq!(TierGroup::for_rung(10_000), TierGroup::Elite);
    }

    #[test]
    fn display_and_icons() {
        let b = badge(300).unwrap();
        assert_eq!(b.to_string(), "Starter 3");
        assert_eq!(b.icon(), "icon-sparkles");
        assert_eq!(badge(10_000).unwrap().icon(), "icon-crown");
    }

    #[test]
    fn negative_count_rejected() {
        assert!(matches!(compute_badge_tier(-1), Err(Error::InvalidArgument(_))));
    }

    proptest! {
        #[test]
        fn level_always_in_range(votes in 100u64..10_000_000) {
            let b = badge(votes).unwrap();
            prop_assert!((MIN_LEVEL..=MAX_LEVEL).contains(&b.level));
            prop_assert!(b.highest_achieved <= votes);
        }

        #[test]
        fn badge_present_iff_first_rung_reached(votes in 0u64..1_000) {
            prop_assert_eq!(badge(votes).is_some(), votes >= 100);
        }
    }
}
