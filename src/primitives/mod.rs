//! Primitives - the leaf and container building blocks of a page.
//!
//! - [`ContainerBlock`] - nestable flex box with spacing, sizing, border and fill
//! - [`Text`] - styled text with a responsive [`TextSize`]
//! - [`Asset`] - opaque icon or logo of fixed intrinsic size
//! - [`NavLink`] - a region that navigates to a path through the host's [`Navigator`]
//!
//! Every primitive is a builder that implements
//! [`Renderable`](crate::element::Renderable). Style inputs that depend on the
//! viewport tier or the color mode are stored unresolved and resolved once per
//! render pass against the [`RenderContext`](crate::context::RenderContext).

mod asset;
mod container;
mod link;
mod text;

pub use asset::Asset;
pub use container::ContainerBlock;
pub(crate) use link::is_clickable;
pub use link::{dispatch_click, NavLink, Navigator};
pub use text::{Text, TextSize};
