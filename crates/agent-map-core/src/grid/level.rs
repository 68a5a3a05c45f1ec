use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use super::key::normalize_key;
use crate::error::{Error, Result};

/// Rating dimension of the profiling map (one grid row each)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Level {
    Interest = 0,
    Knowledge = 1,
    Confidence = 2,
    Market = 3,
    Investment = 4,
    Commitment = 5,
    Support = 6,
    Income = 7,
    Willingness = 8,
}

impl Level {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// What the row measures, as shown next to the grid
    pub fn description(&self) -> &'static str {
        match self {
            Self::Interest => "Measure the level of interest you have for the segment",
            Self::Knowledge => "Measure the level of knowledge you have for the segment",
            Self::Confidence => "Measure the level of confidence you have for the segment",
            Self::Market => "Measure the current market potential for the segment",
            Self::Investment => {
                "Measure the level of investment you are willing to invest for the segment"
            }
            Self::Commitment => {
                "Measure the level of time you are willing to commit for the segment"
            }
            Self::Support => {
                "Measure the level of perceived support you can receive for the segment"
            }
            Self::Income => "Measure the level of perceived income you can receive for the segment",
            Self::Willingness => "Measure the level of willingness you have for the segment",
        }
    }

    /// Resolve a level from user text: a 1-based index or the name,
    /// ignoring case and punctuation.
    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        if let Ok(n) = key.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| u8::try_from(i).ok())
                .and_then(Self::from_u8)
                .ok_or_else(|| Error::InvalidKey(format!("level {key}")));
        }
        let wanted = normalize_key(key);
        Self::iter()
            .find(|level| normalize_key(level.name()) == wanted)
            .ok_or_else(|| Error::InvalidKey(format!("level {key}")))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
