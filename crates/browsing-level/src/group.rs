//! Named browsing level groups.

use crate::{BrowsingLevels, NsfwLevel};
use serde::{Deserialize, Serialize};

/// A fixed, named set of ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum LevelGroup {
    Public,
    SafeForWork,
    NotSafeForWork,
    All,
}

impl LevelGroup {
    /// Every group, narrowest first.
    pub const ALL_GROUPS: [LevelGroup; 4] = [
        LevelGroup::Public,
        LevelGroup::SafeForWork,
        LevelGroup::NotSafeForWork,
        LevelGroup::All,
    ];

    /// Member ranks in display order.
    pub fn levels(&self) -> &'static [NsfwLevel] {
        const PUBLIC: &[NsfwLevel] = &[NsfwLevel::Pg];
        const SFW: &[NsfwLevel] = &[NsfwLevel::Pg, NsfwLevel::Pg13];
        const NSFW: &[NsfwLevel] = &[NsfwLevel::R, NsfwLevel::X, NsfwLevel::Xxx];

        match self {
            Self::Public => PUBLIC,
            Self::SafeForWork => SFW,
            Self::NotSafeForWork => NSFW,
            Self::All => &NsfwLevel::RANKS,
        }
    }

    /// Precomputed mask of the member ranks.
    pub const fn mask(&self) -> BrowsingLevels {
        match self {
            Self::Public => BrowsingLevels::PUBLIC,
            Self::SafeForWork => BrowsingLevels::SFW,
            Self::NotSafeForWork => BrowsingLevels::NSFW,
            Self::All => BrowsingLevels::ALL,
        }
    }

    /// Membership test against the precomputed mask.
    #[inline]
    pub const fn contains(&self, level: NsfwLevel) -> bool {
        self.mask().bits() & level.bit() != 0
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::SafeForWork => "Safe for work",
            Self::NotSafeForWork => "Not safe for work",
            Self::All => "All",
        }
    }
}

impl From<LevelGroup> for BrowsingLevels {
    fn from(group: LevelGroup) -> Self {
        group.mask()
    }
}
