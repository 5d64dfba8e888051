//! Frame Derived - layout and paint.
//!
//! Creates a Derived that lays out the current element tree and paints it
//! into a [`FrameResult`] whenever the element tree, the viewport or the
//! render mode changes.

use spark_signals::{derived, Derived};

use crate::config::RenderMode;
use crate::element::Element;
use crate::layout::compute_layout;
use crate::renderer::{paint, FrameResult};

use super::environment::Environment;

/// Create the frame derived on top of an element derived.
pub fn create_frame_derived(
    env: &Environment,
    element_derived: Derived<Element>,
) -> Derived<FrameResult> {
    let width = env.width_signal();
    let height = env.height_signal();
    let render_mode = env.render_mode_signal();

    derived(move || {
        let tw = width.get();
        let th = height.get();
        let mode = render_mode.get();
        let root = element_derived.get();

        let fullscreen = mode == RenderMode::Fullscreen;
        let layout = match compute_layout(&root, tw, th, fullscreen) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(error = %e, "layout failed, painting an empty frame");
                return FrameResult::empty(tw, th);
            }
        };

        // Inline frames are as tall as their content.
        let buffer_height = if fullscreen {
            th
        } else {
            layout.content_height.max(1)
        };

        tracing::trace!(width = tw, height = buffer_height, nodes = layout.len(), "paint");
        paint(&root, &layout, tw, buffer_height)
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::context::RenderContext;
    use crate::element::{from_fn, ElementKind, ElementStyle, Renderable};
    use crate::pipeline::element_derived::create_element_derived;
    use crate::theme::ResolvedFill;
    use crate::types::{Dimension, Rgba};

    fn mode_box() -> Rc<dyn Renderable> {
        Rc::new(from_fn(|ctx: &RenderContext| {
            let bg = if ctx.mode().is_dark() {
                Rgba::BLACK
            } else {
                Rgba::WHITE
            };
            Element::new(
                ElementKind::Box,
                ElementStyle {
                    height: Dimension::Cells(2),
                    fill: ResolvedFill::Solid(bg),
                    ..ElementStyle::default()
                },
            )
        }))
    }

    #[test]
    fn test_mode_toggle_repaints() {
        let env = Environment::new(10, 4);
        let frame = create_frame_derived(&env, create_element_derived(&env, mode_box()));

        assert_eq!(frame.get().buffer.get(0, 0).map(|c| c.bg), Some(Rgba::BLACK));
        env.toggle_mode();
        assert_eq!(frame.get().buffer.get(0, 0).map(|c| c.bg), Some(Rgba::WHITE));
    }

    #[test]
    fn test_resize_changes_buffer() {
        let env = Environment::new(10, 4);
        let frame = create_frame_derived(&env, create_element_derived(&env, mode_box()));

        assert_eq!(frame.get().buffer.width(), 10);
        env.set_viewport(30, 8);
        let result = frame.get();
        assert_eq!(result.buffer.width(), 30);
        assert_eq!(result.buffer.height(), 8);
    }

    #[test]
    fn test_inline_height_follows_content() {
        let env = Environment::new(10, 24);
        env.set_render_mode(RenderMode::Inline);
        let frame = create_frame_derived(&env, create_element_derived(&env, mode_box()));
        assert_eq!(frame.get().buffer.height(), 2);
    }
}
