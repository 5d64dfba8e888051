//! Reactive Pipeline
//!
//! Connects a page of components to the terminal.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Environment signals → elementDerived → frameDerived → render effect
//!   (width, height,       (render pass)    (layout +       (terminal I/O)
//!    mode, render mode)                     paint)
//! ```
//!
//! ## Data Flow
//!
//! 1. **elementDerived** - renders the page with a fresh
//!    [`RenderContext`](crate::context::RenderContext) and returns an
//!    [`Element`](crate::element::Element) tree
//! 2. **frameDerived** - lays the tree out with Taffy and paints a
//!    [`FrameResult`](crate::renderer::FrameResult)
//! 3. **render effect** - writes each new frame to the terminal
//!
//! Both deriveds are pure. The render effect is the only place that performs
//! terminal I/O.

pub mod element_derived;
pub mod environment;
pub mod frame_derived;
pub mod mount;

pub use element_derived::{create_element_derived, render_pass};
pub use environment::Environment;
pub use frame_derived::create_frame_derived;
pub use mount::{apply_event, mount, run, run_with_navigator, tick, MountHandle};
