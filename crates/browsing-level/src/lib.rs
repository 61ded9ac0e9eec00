//! browsing-level: Content rating levels packed into a single bitmask.
//!
//! A browsing level is a set of content ratings a viewer is willing to see.
//! Each rating occupies its own bit, so a set of ratings is the bitwise OR of
//! its members and filtering is a single AND.
//!
//! # Levels
//!
//! | level   | bit | group              |
//! |---------|-----|--------------------|
//! | PG      | 1   | public, sfw        |
//! | PG-13   | 2   | sfw                |
//! | R       | 4   | nsfw               |
//! | X       | 8   | nsfw               |
//! | XXX     | 16  | nsfw               |
//! | Blocked | 32  | sentinel, no group |
//!
//! # Example
//!
//! ```
//! use browsing_level::{BrowsingLevels, NsfwLevel};
//!
//! let mask = BrowsingLevels::encode([NsfwLevel::Pg, NsfwLevel::R]);
//! assert_eq!(mask.bits(), 5);
//! assert_eq!(mask.decode(), vec![NsfwLevel::Pg, NsfwLevel::R]);
//! assert!(!mask.is_safe());
//! ```

use thiserror::Error;

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod level;
pub mod mask;
pub mod group;
pub mod legacy;
pub mod config;
pub mod codec;

pub use level::*;
pub use mask::*;
pub use group::*;
pub use legacy::*;
pub use config::*;
pub use codec::*;

// MARK: - Errors

/// Errors from the validating boundaries of this crate.
///
/// The codec operations themselves never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowsingLevelError {
    /// Integer is not one of the enumerated levels.
    #[error("invalid browsing level: {0}")]
    InvalidLevel(u32),

    /// Mask carries bits outside the ranks and the blocked sentinel.
    #[error("invalid browsing level bits: {0}")]
    InvalidMask(u32),

    /// Name does not match any legacy level.
    #[error("unknown legacy nsfw level: {0:?}")]
    UnknownLegacyLevel(String),
}

/// Result type for browsing level operations.
pub type Result<T> = std::result::Result<T, BrowsingLevelError>;
