// ============================================================================
// Expansion Configuration
// Base, remainder tracking and rendering options for digit expansion
// ============================================================================

use super::tracker::TrackerStrategy;
use crate::numeric::{RatioError, RatioResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radix marker used by `Display`
pub const DEFAULT_RADIX_MARKER: &str = ".";

/// Configuration for an [`Expander`](super::Expander)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpansionConfig {
    /// Positional base (at least 2)
    pub base: u32,

    /// Remainder tracker used for cycle detection
    pub tracker: TrackerStrategy,

    /// Token placed between whole and fractional digits when rendering
    pub radix_marker: String,
}

impl ExpansionConfig {
    /// Create a configuration for `base` with default tracking and marker
    pub fn new(base: u32) -> Self {
        Self {
            base,
            tracker: TrackerStrategy::Auto,
            radix_marker: DEFAULT_RADIX_MARKER.to_string(),
        }
    }

    /// Builder method: Set tracker strategy
    pub fn with_tracker(mut self, tracker: TrackerStrategy) -> Self {
        self.tracker = tracker;
        self
    }

    /// Builder method: Set radix marker
    pub fn with_radix_marker(mut self, marker: impl Into<String>) -> Self {
        self.radix_marker = marker.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// - `OutOfRange` if the base is below 2
    /// - `InvalidInput` if the radix marker is empty or contains whitespace
    pub fn validate(&self) -> RatioResult<()> {
        if self.base < 2 {
            return Err(RatioError::OutOfRange);
        }

        if self.radix_marker.is_empty() || self.radix_marker.chars().any(char::is_whitespace) {
            return Err(RatioError::InvalidInput);
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ExpansionConfig {
    /// Base 10
    pub fn decimal() -> Self {
        Self::new(10)
    }

    /// Base 2
    pub fn binary() -> Self {
        Self::new(2)
    }

    /// Base 16 (digits rendered as decimal values 0-15)
    pub fn hexadecimal() -> Self {
        Self::new(16)
    }
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self::decimal()
    }
}
