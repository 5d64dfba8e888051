//! BreakpointValue - a literal per viewport tier.

use std::array;

use crate::context::RenderContext;
use crate::error::{ComposeError, Result};
use crate::types::Length;

use super::{Tier, TIER_COUNT};

/// Resolve a sparse per-tier sequence for the tier at `index`.
///
/// Returns the entry at `index` or, when that slot is empty, the nearest
/// defined entry below it. An `index` past the end of `slots` behaves like
/// the last slot. When nothing is defined at or below `index`, the first
/// defined entry is returned. `None` only for a sequence with no entries.
pub fn resolve_tiered<T>(slots: &[Option<T>], index: usize) -> Option<&T> {
    let last = slots.len().checked_sub(1)?;
    let start = index.min(last);

    slots[..=start]
        .iter()
        .rev()
        .find_map(Option::as_ref)
        .or_else(|| slots.iter().find_map(Option::as_ref))
}

/// A value that depends on the active viewport tier.
///
/// Always holds at least one entry, so resolution cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointValue<T> {
    slots: [Option<T>; TIER_COUNT],
}

impl<T> BreakpointValue<T> {
    /// The same value at every tier.
    pub fn uniform(value: T) -> Self {
        Self::from_tier(Tier::Small, value)
    }

    /// A single entry starting at `tier`. Smaller tiers fall back to it too.
    pub fn from_tier(tier: Tier, value: T) -> Self {
        let mut slots: [Option<T>; TIER_COUNT] = array::from_fn(|_| None);
        slots[tier.index()] = Some(value);
        Self { slots }
    }

    /// Consecutive entries starting at `Small`.
    ///
    /// The length is checked at compile time: between 1 and the tier count.
    pub fn from_array<const N: usize>(values: [T; N]) -> Self {
        const {
            assert!(N >= 1 && N <= TIER_COUNT, "one entry per tier at most");
        }
        let mut slots: [Option<T>; TIER_COUNT] = array::from_fn(|_| None);
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = Some(value);
        }
        Self { slots }
    }

    /// Consecutive entries starting at `Small`, checked at runtime.
    pub fn try_from_vec(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(ComposeError::EmptyBreakpointValue);
        }
        if values.len() > TIER_COUNT {
            return Err(ComposeError::TooManyTierValues {
                given: values.len(),
                max: TIER_COUNT,
            });
        }
        let mut slots: [Option<T>; TIER_COUNT] = array::from_fn(|_| None);
        for (slot, value) in slots.iter_mut().zip(values) {
            *slot = Some(value);
        }
        Ok(Self { slots })
    }

    /// Set (or replace) the entry for `tier`.
    pub fn at(mut self, tier: Tier, value: T) -> Self {
        self.slots[tier.index()] = Some(value);
        self
    }

    /// Value for `tier`.
    pub fn resolve(&self, tier: Tier) -> &T {
        match resolve_tiered(&self.slots, tier.index()) {
            Some(value) => value,
            None => unreachable!("BreakpointValue always holds an entry"),
        }
    }

    /// Value for the tier of the current render pass.
    ///
    /// A value with a single entry does not read the tier, so it does not
    /// subscribe the pass to tier changes.
    pub fn resolve_in(&self, ctx: &RenderContext) -> &T {
        if self.is_uniform() {
            return self.resolve(Tier::Small);
        }
        self.resolve(ctx.tier())
    }

    /// Tiers that carry their own entry, with that entry.
    pub fn defined(&self) -> impl Iterator<Item = (Tier, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (Tier::from_index(i), v)))
    }

    /// Whether every tier resolves to the same entry.
    pub fn is_uniform(&self) -> bool {
        self.defined().count() == 1
    }

    /// Apply `f` to every defined entry, keeping the tier layout.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> BreakpointValue<U> {
        BreakpointValue {
            slots: array::from_fn(|i| self.slots[i].as_ref().map(&mut f)),
        }
    }
}

impl<T: Default> Default for BreakpointValue<T> {
    fn default() -> Self {
        Self::uniform(T::default())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T, const N: usize> From<[T; N]> for BreakpointValue<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl From<i32> for BreakpointValue<i32> {
    fn from(value: i32) -> Self {
        Self::uniform(value)
    }
}

impl From<Length> for BreakpointValue<Length> {
    fn from(value: Length) -> Self {
        Self::uniform(value)
    }
}

impl From<i32> for BreakpointValue<Length> {
    fn from(value: i32) -> Self {
        Self::uniform(Length::Cells(value))
    }
}

impl<const N: usize> From<[i32; N]> for BreakpointValue<Length> {
    fn from(values: [i32; N]) -> Self {
        Self::from_array(values.map(Length::Cells))
    }
}

// =============================================================================
// Tests
// =============================================================================
