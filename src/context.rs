//! Render context - the per-pass snapshot of tier and color mode.
//!
//! A `RenderContext` is created for one render pass and handed by reference to
//! every [`Renderable`](crate::element::Renderable). The tier and the mode are
//! each read from their source at most once, on first use, and cached.
//! Every consumer in the pass observes the same values, and a pass only
//! subscribes to the sources it actually reads: when the source is a signal,
//! the first read happens inside the enclosing derived and registers the
//! dependency there.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::responsive::Tier;
use crate::theme::ColorMode;

bitflags::bitflags! {
    /// Which environment values a render pass has read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Reads: u8 {
        const TIER = 1 << 0;
        const MODE = 1 << 1;
    }
}

/// Where a context value comes from.
enum Source<T> {
    Fixed(T),
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Copy> Source<T> {
    fn read(&self) -> T {
        match self {
            Self::Fixed(v) => *v,
            Self::Getter(g) => g(),
        }
    }
}

/// Snapshot of the environment for one render pass.
pub struct RenderContext {
    tier_source: Source<Tier>,
    mode_source: Source<ColorMode>,
    tier: Cell<Option<Tier>>,
    mode: Cell<Option<ColorMode>>,
}

impl RenderContext {
    /// A context with fixed values, for static rendering and tests.
    pub fn fixed(tier: Tier, mode: ColorMode) -> Self {
        Self {
            tier_source: Source::Fixed(tier),
            mode_source: Source::Fixed(mode),
            tier: Cell::new(None),
            mode: Cell::new(None),
        }
    }

    /// A context reading lazily from getters.
    ///
    /// Each getter is called at most once per context.
    pub fn from_getters(
        tier: impl Fn() -> Tier + 'static,
        mode: impl Fn() -> ColorMode + 'static,
    ) -> Self {
        Self {
            tier_source: Source::Getter(Rc::new(tier)),
            mode_source: Source::Getter(Rc::new(mode)),
            tier: Cell::new(None),
            mode: Cell::new(None),
        }
    }

    /// Active viewport tier.
    pub fn tier(&self) -> Tier {
        match self.tier.get() {
            Some(tier) => tier,
            None => {
                let tier = self.tier_source.read();
                self.tier.set(Some(tier));
                tier
            }
        }
    }

    /// Active color mode.
    pub fn mode(&self) -> ColorMode {
        match self.mode.get() {
            Some(mode) => mode,
            None => {
                let mode = self.mode_source.read();
                self.mode.set(Some(mode));
                mode
            }
        }
    }

    /// Values read so far in this pass.
    pub fn reads(&self) -> Reads {
        let mut reads = Reads::empty();
        if self.tier.get().is_some() {
            reads |= Reads::TIER;
        }
        if self.mode.get().is_some() {
            reads |= Reads::MODE;
        }
        reads
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("tier", &self.tier.get())
            .field("mode", &self.mode.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_context() {
        let ctx = RenderContext::fixed(Tier::Large, ColorMode::Light);
        assert_eq!(ctx.reads(), Reads::empty());
        assert_eq!(ctx.tier(), Tier::Large);
        assert_eq!(ctx.reads(), Reads::TIER);
        assert_eq!(ctx.mode(), ColorMode::Light);
        assert_eq!(ctx.reads(), Reads::TIER | Reads::MODE);
    }

    #[test]
    fn test_getters_read_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let flip = Rc::new(Cell::new(ColorMode::Dark));
        let flip_src = flip.clone();

        let ctx = RenderContext::from_getters(
            || Tier::Small,
            move || {
                counter.set(counter.get() + 1);
                flip_src.get()
            },
        );

        assert_eq!(ctx.mode(), ColorMode::Dark);
        // A change in the source mid-pass is not observed.
        flip.set(ColorMode::Light);
        assert_eq!(ctx.mode(), ColorMode::Dark);
        assert_eq!(ctx.mode(), ColorMode::Dark);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unread_values_are_never_fetched() {
        let ctx = RenderContext::from_getters(
            || Tier::Medium,
            || panic!("mode should not be read"),
        );
        assert_eq!(ctx.tier(), Tier::Medium);
        assert!(!ctx.reads().contains(Reads::MODE));
    }
}
