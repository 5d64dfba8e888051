//! NavLink primitive - a region that asks the host to navigate.
//!
//! Routing is owned by the host. A link only carries its target path; the
//! painter reports where each link landed on screen as a
//! [`LinkRegion`](crate::renderer::LinkRegion), and the host maps a click to
//! [`Navigator::navigate`].

use crate::context::RenderContext;
use crate::element::{Child, Element, ElementKind, ElementStyle, Renderable};
use crate::renderer::LinkRegion;
use crate::types::Rect;

/// Client-side navigation, implemented by the host router.
pub trait Navigator {
    fn navigate(&self, target: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, target: &str) {
        self(target)
    }
}

pub struct NavLink {
    target: String,
    child: Child,
}

impl NavLink {
    pub fn new(target: impl Into<String>, child: impl Renderable + 'static) -> Self {
        Self {
            target: target.into(),
            child: Box::new(child),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Renderable for NavLink {
    fn render(&self, ctx: &RenderContext) -> Element {
        let kind = ElementKind::Link {
            target: self.target.clone(),
        };
        Element::new(kind, ElementStyle::default()).with_children(vec![self.child.render(ctx)])
    }
}

/// Navigate to the target of the link under `(x, y)`, if any.
///
/// The last matching region wins, since later regions paint on top.
pub fn dispatch_click(
    regions: &[LinkRegion],
    x: u16,
    y: u16,
    navigator: &dyn Navigator,
) -> bool {
    match regions.iter().rev().find(|r| r.rect.contains(x, y)) {
        Some(region) => {
            tracing::debug!(path = %region.target, x, y, "link activated");
            navigator.navigate(&region.target);
            true
        }
        None => false,
    }
}

/// Whether `rect` is large enough to receive clicks.
pub(crate) fn is_clickable(rect: &Rect) -> bool {
    rect.width > 0 && rect.height > 0
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::primitives::Text;
    use crate::responsive::Tier;
    use crate::theme::ColorMode;

    #[test]
    fn test_link_wraps_child() {
        let link = NavLink::new("/registration", Text::new("Launch App"));
        let element = link.render(&RenderContext::fixed(Tier::Small, ColorMode::Dark));
        assert_eq!(
            element.kind,
            ElementKind::Link {
                target: "/registration".into()
            }
        );
        assert_eq!(element.texts(), vec!["Launch App"]);
    }

    #[test]
    fn test_dispatch_click_hits_topmost() {
        let regions = vec![
            LinkRegion {
                rect: Rect::new(0, 0, 10, 2),
                target: "/outer".into(),
            },
            LinkRegion {
                rect: Rect::new(2, 0, 4, 1),
                target: "/inner".into(),
            },
        ];
        let visited = RefCell::new(Vec::new());
        let nav = |t: &str| visited.borrow_mut().push(t.to_string());

        assert!(dispatch_click(&regions, 3, 0, &nav));
        assert!(dispatch_click(&regions, 8, 1, &nav));
        assert!(!dispatch_click(&regions, 20, 0, &nav));
        assert_eq!(*visited.borrow(), vec!["/inner", "/outer"]);
    }

    #[test]
    fn test_empty_rect_not_clickable() {
        assert!(!is_clickable(&Rect::new(1, 1, 0, 3)));
        assert!(is_clickable(&Rect::new(1, 1, 1, 1)));
    }
}
