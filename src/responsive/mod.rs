//! Responsive values - viewport tiers and per-tier resolution.
//!
//! The viewport width is bucketed into a [`Tier`] using configured
//! [`Breakpoints`]. A [`BreakpointValue`] holds one literal per tier (some
//! slots may be empty) and resolves to the literal for the active tier,
//! falling back to the nearest smaller tier that has one.
//!
//! # Example
//!
//! ```
//! use spark_compose::responsive::{BreakpointValue, Breakpoints, Tier};
//!
//! let padding = BreakpointValue::from_array([2, 5, 10]);
//! let tier = Breakpoints::default().tier_for_width(72);
//!
//! assert_eq!(tier, Tier::Medium);
//! assert_eq!(*padding.resolve(tier), 5);
//! assert_eq!(*padding.resolve(Tier::Xxxl), 10);
//! ```

mod value;

pub use value::{resolve_tiered, BreakpointValue};

use crate::error::{ComposeError, Result};

/// Number of viewport tiers.
pub const TIER_COUNT: usize = 6;

// =============================================================================
// Tier
// =============================================================================

/// A discrete viewport-size bucket, ordered smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    #[default]
    Small = 0,
    Medium = 1,
    Large = 2,
    XLarge = 3,
    Xxl = 4,
    Xxxl = 5,
}

impl Tier {
    pub const ALL: [Tier; TIER_COUNT] = [
        Tier::Small,
        Tier::Medium,
        Tier::Large,
        Tier::XLarge,
        Tier::Xxl,
        Tier::Xxxl,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tier for an index. Indices past the largest tier saturate.
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Small,
            1 => Self::Medium,
            2 => Self::Large,
            3 => Self::XLarge,
            4 => Self::Xxl,
            _ => Self::Xxxl,
        }
    }

    /// Short name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
            Self::XLarge => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
        }
    }
}

// =============================================================================
// Breakpoints
// =============================================================================

/// Minimum viewport widths, in columns, at which each tier begins.
///
/// `Small` always begins at zero. The remaining thresholds are strictly
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    min_widths: [u16; TIER_COUNT],
}

impl Breakpoints {
    /// Build from the thresholds of `Medium` through `Xxxl`.
    pub fn new(thresholds: [u16; TIER_COUNT - 1]) -> Result<Self> {
        let mut min_widths = [0u16; TIER_COUNT];
        let mut previous = 0u16;

        for (i, &min_width) in thresholds.iter().enumerate() {
            let tier = Tier::from_index(i + 1);
            if min_width <= previous {
                return Err(ComposeError::UnorderedBreakpoints {
                    tier,
                    min_width,
                    previous,
                });
            }
            min_widths[tier.index()] = min_width;
            previous = min_width;
        }

        Ok(Self { min_widths })
    }

    /// Width at which `tier` begins.
    pub fn min_width(&self, tier: Tier) -> u16 {
        self.min_widths[tier.index()]
    }

    /// Largest tier whose threshold is at or below `width`.
    pub fn tier_for_width(&self, width: u16) -> Tier {
        Tier::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| width >= self.min_widths[tier.index()])
            .unwrap_or(Tier::Small)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            min_widths: [0, 60, 100, 140, 180, 220],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Small < Tier::Medium);
        assert!(Tier::Xxl < Tier::Xxxl);
        assert_eq!(Tier::Large.index(), 2);
    }

    #[test]
    fn test_tier_from_index_saturates() {
        assert_eq!(Tier::from_index(1), Tier::Medium);
        assert_eq!(Tier::from_index(5), Tier::Xxxl);
        assert_eq!(Tier::from_index(99), Tier::Xxxl);
    }

    #[test]
    fn test_default_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.tier_for_width(0), Tier::Small);
        assert_eq!(bp.tier_for_width(59), Tier::Small);
        assert_eq!(bp.tier_for_width(60), Tier::Medium);
        assert_eq!(bp.tier_for_width(99), Tier::Medium);
        assert_eq!(bp.tier_for_width(100), Tier::Large);
        assert_eq!(bp.tier_for_width(500), Tier::Xxxl);
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints::new([40, 80, 120, 160, 200]).unwrap();
        assert_eq!(bp.min_width(Tier::Small), 0);
        assert_eq!(bp.min_width(Tier::Large), 80);
        assert_eq!(bp.tier_for_width(45), Tier::Medium);
    }

    #[test]
    fn test_unordered_breakpoints_rejected() {
        let err = Breakpoints::new([60, 50, 120, 160, 200]).unwrap_err();
        assert!(matches!(
            err,
            ComposeError::UnorderedBreakpoints {
                tier: Tier::Large,
                min_width: 50,
                previous: 60,
            }
        ));
    }

    #[test]
    fn test_zero_medium_threshold_rejected() {
        assert!(Breakpoints::new([0, 50, 120, 160, 200]).is_err());
    }
}
