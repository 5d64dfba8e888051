//! Layout Module
//!
//! Flexbox layout of resolved element trees using
//! [Taffy](https://github.com/DioxusLabs/taffy).
//!
//! # Architecture
//!
//! The bridge:
//!
//! 1. Converts each element's resolved style into a Taffy style
//! 2. Builds the Taffy tree in document order
//! 3. Measures text leaves in terminal cells (wide glyphs take two)
//! 4. Extracts absolute rectangles, indexed in document order
//!
//! # Example
//!
//! ```
//! use spark_compose::context::RenderContext;
//! use spark_compose::element::Renderable;
//! use spark_compose::layout::compute_layout;
//! use spark_compose::primitives::{ContainerBlock, Text};
//! use spark_compose::responsive::Tier;
//! use spark_compose::theme::ColorMode;
//!
//! let page = ContainerBlock::vstack().child(Text::new("Hello"));
//! let element = page.render(&RenderContext::fixed(Tier::Medium, ColorMode::Dark));
//!
//! let layout = compute_layout(&element, 80, 24, true).unwrap();
//! assert_eq!(layout.len(), 2);
//! ```

mod taffy_bridge;
mod text_measure;

pub use taffy_bridge::{compute_layout, LayoutTree};
pub use text_measure::*;
