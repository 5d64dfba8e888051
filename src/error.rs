//! Error type for composition and configuration.
//!
//! Out-of-range style values are never errors; components clamp them.
//! Errors are reserved for caller contract violations caught at construction
//! time and for configuration or terminal I/O failures.

use crate::responsive::Tier;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// A builder was finished without a renderable it cannot do without.
    #[error("{component} requires a {slot}")]
    MissingRequiredChild {
        component: &'static str,
        slot: &'static str,
    },

    #[error("breakpoint value has {given} entries but only {max} tiers exist")]
    TooManyTierValues { given: usize, max: usize },

    #[error("breakpoint value needs at least one entry")]
    EmptyBreakpointValue,

    #[error("breakpoint for {tier:?} starts at {min_width} columns, not above {previous}")]
    UnorderedBreakpoints {
        tier: Tier,
        min_width: u16,
        previous: u16,
    },

    /// The flexbox engine rejected the element tree.
    #[error("layout failed: {0}")]
    Layout(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_child_message() {
        let err = ComposeError::MissingRequiredChild {
            component: "NavShell",
            slot: "main panel",
        };
        assert_eq!(err.to_string(), "NavShell requires a main panel");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ComposeError = io.into();
        assert!(matches!(err, ComposeError::Io(_)));
    }
}
