// ============================================================================
// Expansion Module
// Base-N positional digit expansion with cycle detection
// ============================================================================
//
// This module provides:
// - DigitExpansion: whole / terminating / repeating digits of a ratio
// - Expander: runs expansions with a validated ExpansionConfig
// - DigitSequence: small-vector digit container
// - TrackerStrategy: bounded slot table vs hash map remainder tracking
//
// Design principles:
// - Exact long division on BigUint magnitudes; the sign is applied last
// - Periodicity found by remembering the first index of every remainder
// - Tracker choice never changes the digits produced

mod config;
mod digit_expansion;
mod digits;
mod tracker;

pub use config::{ExpansionConfig, DEFAULT_RADIX_MARKER};
pub use digit_expansion::{expand, DigitExpansion, Expander};
pub use digits::DigitSequence;
pub use tracker::{TrackerStrategy, BOUNDED_TRACKER_CAPACITY};
