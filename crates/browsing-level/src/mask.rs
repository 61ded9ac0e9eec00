//! Browsing level masks: encoding, decoding, and classification.

use crate::{BrowsingLevelError, NsfwLevel};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of content ratings packed into one integer.
    ///
    /// Only the five combinable ranks are declared flags. Masks built from
    /// untyped integers keep any other bits, but [`BrowsingLevels::decode`]
    /// never reports them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BrowsingLevels: u32 {
        const PG = 1;
        const PG13 = 2;
        const R = 4;
        const X = 8;
        const XXX = 16;
    }
}

impl BrowsingLevels {
    /// Levels visible to signed-out viewers.
    pub const PUBLIC: BrowsingLevels = BrowsingLevels::PG;

    /// Safe for work.
    pub const SFW: BrowsingLevels = BrowsingLevels::PG.union(BrowsingLevels::PG13);

    /// Not safe for work.
    pub const NSFW: BrowsingLevels = BrowsingLevels::R
        .union(BrowsingLevels::X)
        .union(BrowsingLevels::XXX);

    /// Every combinable rank.
    pub const ALL: BrowsingLevels = BrowsingLevels::SFW.union(BrowsingLevels::NSFW);

    /// The blocked sentinel as a standalone mask. Never combined with ranks.
    pub const BLOCKED: BrowsingLevels = BrowsingLevels::from_bits_retain(NsfwLevel::Blocked.bit());

    /// Mask for a single level. `Blocked` yields [`BrowsingLevels::BLOCKED`].
    pub const fn from_level(level: NsfwLevel) -> Self {
        Self::from_bits_retain(level.bit())
    }

    /// OR together the bits of every rank in `levels`.
    ///
    /// Duplicates are harmless and an empty input gives the empty mask.
    /// `Blocked` is not part of the mask domain and contributes nothing.
    pub fn encode<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = NsfwLevel>,
    {
        levels.into_iter().fold(Self::empty(), |acc, level| {
            if level.is_rank() {
                acc | Self::from_level(level)
            } else {
                tracing::debug!("ignoring {:?} while encoding browsing levels", level);
                acc
            }
        })
    }

    /// Every rank whose bit is set, in [`NsfwLevel::RANKS`] order.
    pub fn decode(&self) -> Vec<NsfwLevel> {
        NsfwLevel::RANKS
            .into_iter()
            .filter(|level| self.bits() & level.bit() != 0)
            .collect()
    }

    /// Only the combinable rank bits of this mask.
    #[inline]
    pub const fn ranks(&self) -> Self {
        self.intersection(Self::ALL)
    }

    /// True when every decoded rank is public.
    ///
    /// The empty mask is public too, since it decodes to no ranks at all.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.ranks().difference(Self::PUBLIC).is_empty()
    }

    /// True when the mask is set and holds no NSFW rank.
    ///
    /// The empty mask is not safe: unset is not the same as confirmed safe.
    #[inline]
    pub const fn is_safe(&self) -> bool {
        !self.is_empty() && !self.intersects(Self::NSFW)
    }

    /// True when the blocked sentinel bit is set.
    #[inline]
    pub const fn is_blocked(&self) -> bool {
        self.bits() & NsfwLevel::Blocked.bit() != 0
    }

    /// Least restrictive rank present.
    pub fn lowest(&self) -> Option<NsfwLevel> {
        self.decode().first().copied()
    }

    /// Most restrictive rank present.
    pub fn highest(&self) -> Option<NsfwLevel> {
        self.decode().last().copied()
    }

    /// Resolve the effective browsing level from ordered overrides.
    ///
    /// The first present, non-empty candidate wins. With no such candidate
    /// the result is [`BrowsingLevels::PUBLIC`].
    pub fn first_non_zero<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<BrowsingLevels>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|mask| !mask.is_empty())
            .unwrap_or(Self::PUBLIC)
    }
}

impl Default for BrowsingLevels {
    fn default() -> Self {
        BrowsingLevels::empty()
    }
}

impl From<NsfwLevel> for BrowsingLevels {
    fn from(level: NsfwLevel) -> Self {
        Self::from_level(level)
    }
}

impl FromIterator<NsfwLevel> for BrowsingLevels {
    fn from_iter<I: IntoIterator<Item = NsfwLevel>>(iter: I) -> Self {
        Self::encode(iter)
    }
}

impl Serialize for BrowsingLevels {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BrowsingLevels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        let known = Self::ALL.bits() | Self::BLOCKED.bits();
        if bits & !known != 0 {
            return Err(serde::de::Error::custom(BrowsingLevelError::InvalidMask(bits)));
        }
        Ok(Self::from_bits_retain(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty_is_zero() {
        assert_eq!(BrowsingLevels::encode(Vec::new()).bits(), 0);
    }

    #[test]
    fn encode_ignores_duplicates_and_order() {
        let a = BrowsingLevels::encode([NsfwLevel::R, NsfwLevel::Pg, NsfwLevel::R]);
        let b = BrowsingLevels::encode([NsfwLevel::Pg, NsfwLevel::R]);
        assert_eq!(a, b);
        assert_eq!(a.bits(), 5);
    }

    #[test]
    fn encode_skips_blocked() {
        let mask = BrowsingLevels::encode([NsfwLevel::Blocked, NsfwLevel::X]);
        assert_eq!(mask, BrowsingLevels::X);
        assert!(!mask.is_blocked());
    }

    #[test]
    fn decode_keeps_enumeration_order() {
        let mask = BrowsingLevels::XXX | BrowsingLevels::PG13 | BrowsingLevels::R;
        assert_eq!(
            mask.decode(),
            vec![NsfwLevel::Pg13, NsfwLevel::R, NsfwLevel::Xxx]
        );
    }

    #[test]
    fn decode_never_reports_blocked_or_unknown_bits() {
        let mask = BrowsingLevels::from_bits_retain(32 | 64 | 1);
        assert_eq!(mask.decode(), vec![NsfwLevel::Pg]);
        assert!(BrowsingLevels::BLOCKED.decode().is_empty());
    }

    #[test]
    fn group_constants() {
        assert_eq!(BrowsingLevels::PUBLIC.bits(), 1);
        assert_eq!(BrowsingLevels::SFW.bits(), 3);
        assert_eq!(BrowsingLevels::NSFW.bits(), 28);
        assert_eq!(BrowsingLevels::ALL.bits(), 31);
        assert_eq!(BrowsingLevels::ALL, BrowsingLevels::all());
    }

    #[test]
    fn safety_classification() {
        assert!(BrowsingLevels::PG.is_safe());
        assert!(BrowsingLevels::SFW.is_safe());
        assert!(!(BrowsingLevels::PG | BrowsingLevels::R).is_safe());
        assert!(!BrowsingLevels::empty().is_safe());
    }

    #[test]
    fn public_classification() {
        assert!(BrowsingLevels::PG.is_public());
        assert!(!BrowsingLevels::SFW.is_public());
        assert!(!BrowsingLevels::XXX.is_public());
    }

    #[test]
    fn empty_mask_counts_as_public() {
        // Decodes to no ranks, so "every rank is public" holds vacuously.
        assert!(BrowsingLevels::empty().is_public());
    }

    #[test]
    fn lowest_and_highest() {
        let mask = BrowsingLevels::PG13 | BrowsingLevels::X;
        assert_eq!(mask.lowest(), Some(NsfwLevel::Pg13));
        assert_eq!(mask.highest(), Some(NsfwLevel::X));
        assert_eq!(BrowsingLevels::empty().highest(), None);
    }

    #[test]
    fn first_non_zero_picks_first_set_candidate() {
        let picked = BrowsingLevels::first_non_zero([
            None,
            Some(BrowsingLevels::empty()),
            Some(BrowsingLevels::R),
            Some(BrowsingLevels::X),
        ]);
        assert_eq!(picked, BrowsingLevels::R);
    }

    #[test]
    fn first_non_zero_defaults_to_public() {
        assert_eq!(
            BrowsingLevels::first_non_zero([None, Some(BrowsingLevels::empty())]),
            BrowsingLevels::PUBLIC
        );
        assert_eq!(BrowsingLevels::first_non_zero(Vec::new()), BrowsingLevels::PUBLIC);
    }

    #[test]
    fn collect_from_levels() {
        let mask: BrowsingLevels = [NsfwLevel::Pg, NsfwLevel::Pg13].into_iter().collect();
        assert_eq!(mask, BrowsingLevels::SFW);
    }

    #[test]
    fn mask_serialization() {
        let json = serde_json::to_string(&BrowsingLevels::SFW).unwrap();
        assert_eq!(json, "3");
        let blocked: BrowsingLevels = serde_json::from_str("32").unwrap();
        assert!(blocked.is_blocked());
        assert!(serde_json::from_str::<BrowsingLevels>("64").is_err());
    }
}
