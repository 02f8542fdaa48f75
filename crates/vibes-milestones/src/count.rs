//! Validated vote count.

use crate::error::{Error, Result};
use std::fmt;

/// A non-negative vote count.
///
/// Every computation in this crate takes a `VoteCount`, so once a value has
/// been constructed the engine itself cannot fail. Construction from a signed
/// integer or a float is where bad input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VoteCount(pub u64);

impl VoteCount {
    /// Zero votes.
    pub const ZERO: Self = Self(0);

    /// Create a vote count from an unsigned value.
    pub const fn new(votes: u64) -> Self {
        Self(votes)
    }

    /// The raw count.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for VoteCount {
    fn from(votes: u64) -> Self {
        Self(votes)
    }
}

impl From<u32> for VoteCount {
    fn from(votes: u32) -> Self {
        Self(u64::from(votes))
    }
}

impl TryFrom<i64> for VoteCount {
    type Error = Error;

    fn try_from(votes: i64) -> Result<Self> {
        u64::try_from(votes)
            .map(Self)
            .map_err(|_| Error::InvalidArgument(format!("vote count must be non-negative, got {votes}")))
    }
}

impl TryFrom<f64> for VoteCount {
    type Error = Error;

    fn try_from(votes: f64) -> Result<Self> {
        if !votes.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "vote count must be finite, got {votes}"
            )));
        }
        if votes < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "vote count must be non-negative, got {votes}"
            )));
        }
        if votes.fract() != 0.0 {
            return Err(Error::InvalidArgument(format!(
                "vote count must be a whole number, got {votes}"
            )));
        }
        // Saturates above u64::MAX, which is far past the top rung anyway.
        Ok(Self(votes as u64))
    }
}

impl fmt::Display for VoteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_signed() {
        assert_eq!(VoteCount::try_from(0i64).unwrap(), VoteCount::ZERO);
        assert_eq!(VoteCount::try_from(42i64).unwrap().get(), 42);
        assert!(matches!(
            VoteCount::try_from(-1i64),
            Err(Error::InvalidArgument(_))
        ));
        assert!(VoteCount::try_from(i64::MIN).is_err());
    }

    #[test]
    fn from_float() {
        assert_eq!(VoteCount::try_from(250.0f64).unwrap().get(), 250);
        assert_eq!(VoteCount::try_from(-0.0f64).unwrap(), VoteCount::ZERO);
        assert!(VoteCount::try_from(-3.0f64).is_err());
        assert!(VoteCount::try_from(f64::NAN).is_err());
        assert!(VoteCount::try_from(f64::INFINITY).is_err());
        assert!(VoteCount::try_from(f64::NEG_INFINITY).is_err());
        assert!(VoteCount::try_from(1.5f64).is_err());
    }

    #[test]
    fn error_message_names_value() {
        let err = VoteCount::try_from(-7i64).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: vote count must be non-negative, got -7"
        );
    }
}
