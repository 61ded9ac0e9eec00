//! Level display text (labels and descriptions) for settings UI.

use crate::{BrowsingLevels, NsfwLevel};
use serde::{Deserialize, Serialize};

/// Label shown for a mask with no single level.
pub const UNKNOWN_LEVEL_LABEL: &str = "?";

/// Display text for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct LevelDisplayConfig {
    pub label: String,
    pub description: String,
}

/// Get the default display text for a level.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn default_level_display(level: NsfwLevel) -> LevelDisplayConfig {
    LevelDisplayConfig {
        label: level.label().to_string(),
        description: level.description().to_string(),
    }
}

/// Label for a single-level mask, or `"?"` for anything else.
pub fn browsing_level_label(mask: BrowsingLevels) -> &'static str {
    NsfwLevel::try_from(mask.bits())
        .map(|level| level.label())
        .unwrap_or(UNKNOWN_LEVEL_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(browsing_level_label(BrowsingLevels::PG13), "PG-13");
        assert_eq!(browsing_level_label(BrowsingLevels::BLOCKED), "Blocked");
        assert_eq!(browsing_level_label(BrowsingLevels::empty()), "?");
        assert_eq!(browsing_level_label(BrowsingLevels::SFW), "?");
    }

    #[test]
    fn every_level_has_display_text() {
        for level in NsfwLevel::RANKS.into_iter().chain([NsfwLevel::Blocked]) {
            let display = default_level_display(level);
            assert!(!display.label.is_empty());
            assert!(!display.description.is_empty());
        }
    }
}
