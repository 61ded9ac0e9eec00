//! Legacy five-value nsfw ratings and their mapping onto browsing levels.
//!
//! Records written before the bitmask scheme store one of these names. The
//! mapping is lossy: `X` and `XXX` both read back as legacy `X`.

use crate::{BrowsingLevelError, BrowsingLevels, NsfwLevel};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rating scheme that predates browsing level masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum LegacyNsfwLevel {
    #[default]
    None,
    Soft,
    Mature,
    X,
    Blocked,
}

impl LegacyNsfwLevel {
    /// Stored name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Soft => "Soft",
            Self::Mature => "Mature",
            Self::X => "X",
            Self::Blocked => "Blocked",
        }
    }

    /// Mask this legacy value expands to. `X` covers both `X` and `XXX`.
    pub const fn to_browsing_levels(self) -> BrowsingLevels {
        match self {
            Self::None => BrowsingLevels::PG,
            Self::Soft => BrowsingLevels::PG13,
            Self::Mature => BrowsingLevels::R,
            Self::X => BrowsingLevels::X.union(BrowsingLevels::XXX),
            Self::Blocked => BrowsingLevels::BLOCKED,
        }
    }

    /// Legacy value for a single-level mask.
    ///
    /// Anything outside the table, including masks holding several ranks,
    /// falls back to `None`.
    pub fn from_browsing_levels(mask: BrowsingLevels) -> Self {
        match NsfwLevel::try_from(mask.bits()) {
            Ok(level) => Self::from(level),
            Err(_) => {
                tracing::debug!(
                    "no legacy mapping for browsing level {}, using None",
                    mask.bits()
                );
                Self::None
            }
        }
    }
}

impl From<NsfwLevel> for LegacyNsfwLevel {
    fn from(level: NsfwLevel) -> Self {
        match level {
            NsfwLevel::Pg => Self::None,
            NsfwLevel::Pg13 => Self::Soft,
            NsfwLevel::R => Self::Mature,
            NsfwLevel::X | NsfwLevel::Xxx => Self::X,
            NsfwLevel::Blocked => Self::Blocked,
        }
    }
}

impl From<BrowsingLevels> for LegacyNsfwLevel {
    fn from(mask: BrowsingLevels) -> Self {
        Self::from_browsing_levels(mask)
    }
}

impl From<LegacyNsfwLevel> for BrowsingLevels {
    fn from(legacy: LegacyNsfwLevel) -> Self {
        legacy.to_browsing_levels()
    }
}

impl FromStr for LegacyNsfwLevel {
    type Err = BrowsingLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "soft" => Ok(Self::Soft),
            "mature" => Ok(Self::Mature),
            "x" => Ok(Self::X),
            "blocked" => Ok(Self::Blocked),
            _ => Err(BrowsingLevelError::UnknownLegacyLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for LegacyNsfwLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
