//! NavShell - adaptive two-pane layout.
//!
//! A fixed-width side panel (typically navigation) next to a flexible main
//! panel. Below the threshold tier the side panel is left out of the element
//! tree entirely, so it takes no space and receives no clicks.
//!
//! ```text
//! tier >= threshold            tier < threshold
//! ╭──────╮ ╭──────────────╮    ╭─────────────────────╮
//! │ side │ │ main         │    │ main                │
//! ╰━━━━━━╯ ╰━━━━━━━━━━━━━━╯    ╰━━━━━━━━━━━━━━━━━━━━━╯
//! ```

use crate::context::RenderContext;
use crate::element::{Element, Renderable};
use crate::error::{ComposeError, Result};
use crate::primitives::ContainerBlock;
use crate::responsive::{BreakpointValue, Tier};
use crate::theme::{ModeValue, ThemeColor};
use crate::types::{clamp_cells, AlignItems, Length};

pub const SHELL_KEY: &str = "nav-shell";
pub const SIDE_PANEL_KEY: &str = "side-panel";
pub const MAIN_PANEL_KEY: &str = "main-panel";

/// Whether the side panel is part of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    SideVisible,
    SideHidden,
}

impl ShellState {
    /// The state for `tier`. There is no hysteresis.
    pub fn for_tier(tier: Tier, threshold: Tier) -> Self {
        if tier >= threshold {
            Self::SideVisible
        } else {
            Self::SideHidden
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

pub struct NavShellBuilder {
    side: Option<Box<dyn Renderable>>,
    main: Option<Box<dyn Renderable>>,
    threshold: Tier,
    side_width: u16,
    spacing: BreakpointValue<i32>,
    main_padding: BreakpointValue<i32>,
    background: ModeValue<ThemeColor>,
}

impl NavShellBuilder {
    pub fn side_panel(mut self, panel: impl Renderable + 'static) -> Self {
        self.side = Some(Box::new(panel));
        self
    }

    pub fn main_panel(mut self, panel: impl Renderable + 'static) -> Self {
        self.main = Some(Box::new(panel));
        self
    }

    /// Smallest tier at which the side panel is shown. Default `Medium`.
    pub fn threshold(mut self, tier: Tier) -> Self {
        self.threshold = tier;
        self
    }

    /// Side panel width in cells. Default 25.
    pub fn side_width(mut self, width: i32) -> Self {
        self.side_width = clamp_cells(width);
        self
    }

    pub fn spacing(mut self, spacing: impl Into<BreakpointValue<i32>>) -> Self {
        self.spacing = spacing.into();
        self
    }

    pub fn main_padding(mut self, padding: impl Into<BreakpointValue<i32>>) -> Self {
        self.main_padding = padding.into();
        self
    }

    /// Background of both panels.
    pub fn background(mut self, color: impl Into<ModeValue<ThemeColor>>) -> Self {
        self.background = color.into();
        self
    }

    /// Finish the shell. Fails without a main panel.
    pub fn build(self) -> Result<NavShell> {
        let main = self.main.ok_or(ComposeError::MissingRequiredChild {
            component: "NavShell",
            slot: "main panel",
        })?;

        let side = self.side.map(|panel| {
            panel_block(&self.background)
                .key(SIDE_PANEL_KEY)
                .width(i32::from(self.side_width))
                .shrink(0.0)
                .padding(1)
                .boxed_child(panel)
        });
        let main = panel_block(&self.background)
            .key(MAIN_PANEL_KEY)
            .width(Length::FULL)
            .grow(1.0)
            .padding(self.main_padding)
            .boxed_child(main);
        let frame = ContainerBlock::hstack()
            .key(SHELL_KEY)
            .align(AlignItems::Stretch)
            .width(Length::FULL)
            .spacing(self.spacing)
            .padding_x(2)
            .padding_y(1);

        Ok(NavShell {
            frame,
            side,
            main,
            threshold: self.threshold,
        })
    }
}

fn panel_block(background: &ModeValue<ThemeColor>) -> ContainerBlock {
    ContainerBlock::vstack()
        .align(AlignItems::Stretch)
        .min_height(10)
        .border_width(1)
        .border_bottom_width(5)
        .border_radius(50)
        .background(background.clone())
}

// =============================================================================
// NavShell
// =============================================================================

pub struct NavShell {
    frame: ContainerBlock,
    side: Option<ContainerBlock>,
    main: ContainerBlock,
    threshold: Tier,
}

impl NavShell {
    pub fn builder() -> NavShellBuilder {
        NavShellBuilder {
            side: None,
            main: None,
            threshold: Tier::Medium,
            side_width: 25,
            spacing: BreakpointValue::uniform(2),
            main_padding: BreakpointValue::from_array([1, 2]),
            background: ("gray.100", "transparent").into(),
        }
    }

    pub fn threshold(&self) -> Tier {
        self.threshold
    }

    pub fn has_side_panel(&self) -> bool {
        self.side.is_some()
    }

    /// The state the shell renders in at `tier`.
    ///
    /// A shell without a side panel is always `SideHidden`.
    pub fn state(&self, tier: Tier) -> ShellState {
        match self.side {
            Some(_) => ShellState::for_tier(tier, self.threshold),
            None => ShellState::SideHidden,
        }
    }
}

impl Renderable for NavShell {
    fn render(&self, ctx: &RenderContext) -> Element {
        let mut children = Vec::with_capacity(2);

        // Only a shell with a side panel depends on the tier.
        if let Some(side) = &self.side {
            let state = ShellState::for_tier(ctx.tier(), self.threshold);
            tracing::trace!(?state, tier = ctx.tier().name(), "nav shell state");
            if state == ShellState::SideVisible {
                children.push(side.render(ctx));
            }
        }
        children.push(self.main.render(ctx));

        self.frame.render(ctx).with_children(children)
    }
}
