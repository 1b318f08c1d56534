//! Error types for the cache engine.
//!
//! The engine has exactly one failure mode: an invalid configuration
//! detected at construction. Out-of-range addresses during a run are not
//! errors; they are recorded in the trace and skipped.

use core::fmt;

/// Configuration rejected by [`MruCache::init`](crate::MruCache::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The simulated address space must contain at least one block.
    NonPositiveAddressSpace(i64),
    /// The cache must have at least one set.
    ZeroSets,
    /// Each set must hold at least one line.
    ZeroAssociativity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveAddressSpace(total) => write!(
                f,
                "configuration error: total address space must be positive, got {total}"
            ),
            ConfigError::ZeroSets => {
                write!(f, "configuration error: number of sets must be positive")
            }
            ConfigError::ZeroAssociativity => {
                write!(f, "configuration error: associativity must be positive")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NonPositiveAddressSpace(-4);
        assert_eq!(
            err.to_string(),
            "configuration error: total address space must be positive, got -4"
        );
        assert!(ConfigError::ZeroSets.to_string().contains("sets"));
        assert!(ConfigError::ZeroAssociativity
            .to_string()
            .contains("associativity"));
    }
}
