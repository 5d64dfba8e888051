//! # spark-compose
//!
//! Responsive, theme-aware composition for terminal pages.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity and Taffy for flexbox layout.
//!
//! ## Architecture
//!
//! Page code builds a tree of renderables: containers, headings, badge rows
//! and a two-pane navigation shell. Style attributes may vary by viewport
//! [`Tier`] ([`BreakpointValue`]) and by light/dark [`ColorMode`]
//! ([`ModeValue`]). A render pass resolves them against a [`RenderContext`],
//! which reads the tier and mode once per pass.
//!
//! The rendering pipeline is purely derived-based:
//! ```text
//! Environment signals → elementDerived → frameDerived → render effect
//! ```
//!
//! ## Example
//!
//! ```
//! use spark_compose::prelude::*;
//!
//! let page = ContainerBlock::vstack()
//!     .padding([1, 2])
//!     .child(HeadingBlock::new("Supported by the", "BEST"))
//!     .child(BadgeRow::new([
//!         Asset::new("bsc", "◆ BSC"),
//!         Asset::new("polygon", "⬡ Polygon"),
//!     ]));
//!
//! let ctx = RenderContext::fixed(Tier::Medium, ColorMode::Dark);
//! let element = page.render(&ctx);
//! assert_eq!(element.texts(), vec!["Supported by the", "BEST"]);
//! ```
//!
//! ## Modules
//!
//! - [`responsive`] - Tiers, breakpoints and [`BreakpointValue`]
//! - [`theme`] - Color mode, [`ModeValue`], palette colors and fills
//! - [`context`] - The per-pass [`RenderContext`]
//! - [`element`] - [`Renderable`] and the resolved [`Element`] tree
//! - [`primitives`] - Container, text, asset and link building blocks
//! - [`components`] - Heading, badge row and navigation shell
//! - [`layout`] - Taffy layout and terminal text measurement
//! - [`renderer`] - Frame buffers, painting and crossterm output
//! - [`pipeline`] - Environment signals, deriveds and mount
//! - [`config`] - TOML configuration

pub mod components;
pub mod config;
pub mod context;
pub mod element;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod responsive;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use components::{Badge, BadgeRow, HeadingBlock, NavShell, NavShellBuilder, ShellState};
pub use config::{ComposeConfig, RenderMode};
pub use context::RenderContext;
pub use element::{from_fn, Element, ElementKind, Renderable};
pub use error::{ComposeError, Result};
pub use layout::{compute_layout, LayoutTree};
pub use pipeline::{mount, run, Environment, MountHandle};
pub use primitives::{Asset, ContainerBlock, NavLink, Navigator, Text, TextSize};
pub use renderer::{paint, FrameBuffer, FrameResult, LinkRegion};
pub use responsive::{BreakpointValue, Breakpoints, Tier};
pub use theme::{ColorMode, Fill, ModeValue, TextGradient, ThemeColor};

/// Everything page code usually needs.
pub mod prelude {
    pub use crate::components::{Badge, BadgeRow, HeadingBlock, NavShell, ShellState};
    pub use crate::context::RenderContext;
    pub use crate::element::{Element, Renderable};
    pub use crate::primitives::{Asset, ContainerBlock, NavLink, Text, TextSize};
    pub use crate::responsive::{BreakpointValue, Tier};
    pub use crate::theme::{ColorMode, Fill, GradientDirection, ModeValue, TextGradient, ThemeColor};
    pub use crate::types::{AlignItems, FlexDirection, FlexWrap, JustifyContent, Length, TextAlign};
}
