use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use super::key::normalize_key;
use crate::error::{Error, Result};

/// Business category being ranked (one grid column each)
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
pub enum Segment {
    #[serde(rename = "HDB")]
    #[strum(serialize = "HDB")]
    Hdb = 0,
    #[serde(rename = "Private Resale")]
    #[strum(serialize = "Private Resale")]
    PrivateResale = 1,
    Landed = 2,
    #[serde(rename = "New Launch")]
    #[strum(serialize = "New Launch")]
    NewLaunch = 3,
    #[serde(rename = "Top Projects")]
    #[strum(serialize = "Top Projects")]
    TopProjects = 4,
    Referral = 5,
    #[serde(rename = "Indus/Comm")]
    #[strum(serialize = "Indus/Comm")]
    IndusComm = 6,
    #[serde(rename = "Social Media")]
    #[strum(serialize = "Social Media")]
    SocialMedia = 7,
}

impl Segment {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Resolve a segment from user text: a 1-based index or the name,
    /// ignoring case and punctuation ("private-resale", "indus/comm").
    pub fn from_key(key: &str) -> Result<Self> {
        let key = key.trim();
        if let Ok(n) = key.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| u8::try_from(i).ok())
                .and_then(Self::from_u8)
                .ok_or_else(|| Error::InvalidKey(format!("segment {key}")));
        }
        let wanted = normalize_key(key);
        Self::iter()
            .find(|segment| normalize_key(segment.name()) == wanted)
            .ok_or_else(|| Error::InvalidKey(format!("segment {key}")))
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
