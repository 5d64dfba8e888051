//! Renderer - frame buffers, painting and terminal output.
//!
//! ```text
//! Element + LayoutTree → paint() → FrameResult { FrameBuffer, LinkRegions }
//!                                        ↓
//!                            DiffRenderer / write_frame → terminal
//! ```

mod buffer;
mod output;
mod paint;

pub use buffer::FrameBuffer;
pub use output::{
    enter_fullscreen, exit_fullscreen, to_crossterm_color, write_frame, DiffRenderer, InlineRenderer,
};
pub use paint::{paint, FrameResult, LinkRegion};
