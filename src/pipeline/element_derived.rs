//! Element Derived - reactive render passes.
//!
//! Creates a Derived that renders the page into an [`Element`] tree and
//! re-runs when a value the pass actually read changes:
//! - the viewport width, if any resolved value depended on the tier
//! - the color mode, if any resolved value depended on the mode

use std::rc::Rc;

use spark_signals::{derived, Derived};

use crate::context::{Reads, RenderContext};
use crate::element::{Element, Renderable};

use super::environment::Environment;

/// Render `root` once with `ctx`.
pub fn render_pass(ctx: &RenderContext, root: &dyn Renderable) -> Element {
    let element = root.render(ctx);
    let reads = ctx.reads();
    tracing::debug!(
        tier = ?reads.contains(Reads::TIER).then(|| ctx.tier()),
        mode = ?reads.contains(Reads::MODE).then(|| ctx.mode()),
        elements = element.len(),
        "render pass"
    );
    element
}

/// Create the element derived.
pub fn create_element_derived(
    env: &Environment,
    root: Rc<dyn Renderable>,
) -> Derived<Element> {
    let env = env.clone();
    derived(move || {
        // Fresh context per pass: its first reads subscribe this derived.
        let ctx = env.context();
        render_pass(&ctx, root.as_ref())
    })
}

// =============================================================================
// Tests
// =============================================================================
