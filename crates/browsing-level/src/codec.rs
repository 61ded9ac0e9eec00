//! Browsing level operations over raw integers.
//!
//! User preferences and query parameters carry browsing levels as plain
//! integers. These functions accept them directly and retain unknown bits,
//! so they agree with the typed API on every input.

use crate::{BrowsingLevels, LegacyNsfwLevel, NsfwLevel};

/// OR together a list of raw level values.
///
/// Values that are not ranks (including `Blocked`) are not part of the mask
/// domain and are skipped.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn flagify_browsing_levels(levels: Vec<u32>) -> u32 {
    BrowsingLevels::encode(
        levels
            .into_iter()
            .filter_map(|value| NsfwLevel::try_from(value).ok()),
    )
    .bits()
}

/// Raw values of the ranks set in `level`, in display order.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn parse_bitwise_browsing_level(level: u32) -> Vec<u32> {
    BrowsingLevels::from_bits_retain(level)
        .decode()
        .into_iter()
        .map(NsfwLevel::bit)
        .collect()
}

/// True when the two masks share any bit.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn browsing_levels_intersect(level: u32, other: u32) -> bool {
    BrowsingLevels::from_bits_retain(level).intersects(BrowsingLevels::from_bits_retain(other))
}

/// True when every rank in `level` is public. Holds for 0.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn is_public_browsing_level(level: u32) -> bool {
    BrowsingLevels::from_bits_retain(level).is_public()
}

/// True when `level` is set and holds no NSFW rank.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn is_safe_browsing_level(level: u32) -> bool {
    BrowsingLevels::from_bits_retain(level).is_safe()
}

/// First present, non-zero level, or the public mask.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn browsing_level_or(candidates: Vec<Option<u32>>) -> u32 {
    BrowsingLevels::first_non_zero(
        candidates
            .into_iter()
            .map(|candidate| candidate.map(BrowsingLevels::from_bits_retain)),
    )
    .bits()
}

/// Legacy rating for a raw single-level value. Falls back to `None`.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn legacy_from_browsing_level(level: u32) -> LegacyNsfwLevel {
    LegacyNsfwLevel::from_browsing_levels(BrowsingLevels::from_bits_retain(level))
}

/// Raw mask a legacy rating expands to.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn browsing_level_from_legacy(legacy: LegacyNsfwLevel) -> u32 {
    legacy.to_browsing_levels().bits()
}
