//! Core level types.

use crate::BrowsingLevelError;
use serde::{Deserialize, Serialize};

/// A single content rating.
///
/// The five ranks are ordered from least to most restrictive and each owns a
/// distinct bit. `Blocked` is a sentinel outside the combinable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
#[repr(u32)]
pub enum NsfwLevel {
    Pg = 1,
    Pg13 = 2,
    R = 4,
    X = 8,
    Xxx = 16,
    Blocked = 32,
}

impl NsfwLevel {
    /// The combinable ranks, in display order.
    pub const RANKS: [NsfwLevel; 5] = [
        NsfwLevel::Pg,
        NsfwLevel::Pg13,
        NsfwLevel::R,
        NsfwLevel::X,
        NsfwLevel::Xxx,
    ];

    /// Raw bit value.
    #[inline]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Whether this level takes part in masks (everything but `Blocked`).
    #[inline]
    pub const fn is_rank(self) -> bool {
        !matches!(self, NsfwLevel::Blocked)
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::X => "X",
            Self::Xxx => "XXX",
            Self::Blocked => "Blocked",
        }
    }

    /// One-line description for settings screens.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pg => "Safe for work. No naughty stuff",
            Self::Pg13 => "Revealing clothing, violence, or light gore",
            Self::R => "Adult themes and situations, partial nudity, graphic violence, or death",
            Self::X => "Graphic nudity, adult objects, or settings",
            Self::Xxx => "Overtly sexual or disturbing graphic content",
            Self::Blocked => "Violates our terms of service",
        }
    }
}

impl TryFrom<u32> for NsfwLevel {
    type Error = BrowsingLevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Pg),
            2 => Ok(Self::Pg13),
            4 => Ok(Self::R),
            8 => Ok(Self::X),
            16 => Ok(Self::Xxx),
            32 => Ok(Self::Blocked),
            other => Err(BrowsingLevelError::InvalidLevel(other)),
        }
    }
}

impl From<NsfwLevel> for u32 {
    fn from(level: NsfwLevel) -> Self {
        level.bit()
    }
}

impl Serialize for NsfwLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bit().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NsfwLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        NsfwLevel::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for NsfwLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
