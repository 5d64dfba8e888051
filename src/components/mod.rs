//! Page-level components built from the primitives.
//!
//! - [`HeadingBlock`] - section title with a gradient accent
//! - [`BadgeRow`] - wrapping row of rounded tags
//! - [`NavShell`] - side panel plus main panel, side hidden on small viewports

pub mod badge_row;
pub mod heading;
pub mod nav_shell;

pub use badge_row::{badge_key, Badge, BadgeRow};
pub use heading::HeadingBlock;
pub use nav_shell::{NavShell, NavShellBuilder, ShellState};
