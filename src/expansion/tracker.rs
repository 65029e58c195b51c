// ============================================================================
// Remainder Tracker
// First-seen fractional index per long-division remainder
// ============================================================================

use arrayvec::ArrayVec;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest denominator served by [`BoundedTracker`]
pub const BOUNDED_TRACKER_CAPACITY: usize = 64;

/// Which remainder tracker the expansion engine uses.
///
/// The choice affects only memory and speed, never the digits produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrackerStrategy {
    /// Bounded slot table when the denominator fits, hash map otherwise
    #[default]
    Auto,
    /// Prefer the bounded slot table (falls back to the map for large
    /// denominators)
    Bounded,
    /// Always the hash map
    Map,
}

/// Remembers at which fractional index each remainder first appeared.
pub(crate) trait RemainderTracker {
    /// Record `remainder` at `index` unless it was seen before, in which case
    /// return the index it was first recorded at.
    fn record(&mut self, remainder: &BigUint, index: usize) -> Option<usize>;
}

/// Slot table indexed by remainder value.
///
/// Remainders always lie in `0..denominator`, so a denominator of at most
/// [`BOUNDED_TRACKER_CAPACITY`] gives every remainder its own slot.
pub(crate) struct BoundedTracker {
    slots: ArrayVec<Option<usize>, BOUNDED_TRACKER_CAPACITY>,
}

impl BoundedTracker {
    /// `None` if the denominator is too large for the table.
    pub(crate) fn for_denominator(denominator: &BigUint) -> Option<Self> {
        let size = denominator
            .to_usize()
            .filter(|&size| size <= BOUNDED_TRACKER_CAPACITY)?;

        let mut slots = ArrayVec::new();
        slots.extend(std::iter::repeat(None).take(size));
        Some(Self { slots })
    }
}

impl RemainderTracker for BoundedTracker {
    /// Remainders are below the denominator the table was sized for. One
    /// outside the table is reported as seen at index 0, which ends the
    /// division instead of looping.
    fn record(&mut self, remainder: &BigUint, index: usize) -> Option<usize> {
        let slot = remainder
            .to_usize()
            .and_then(|value| self.slots.get_mut(value));

        match slot {
            Some(Some(seen)) => Some(*seen),
            Some(empty) => {
                *empty = Some(index);
                None
            },
            None => Some(0),
        }
    }
}

/// Hash map from remainder to index, for any denominator.
#[derive(Default)]
pub(crate) struct MapTracker {
    seen: HashMap<BigUint, usize>,
}

impl RemainderTracker for MapTracker {
    fn record(&mut self, remainder: &BigUint, index: usize) -> Option<usize> {
        match self.seen.entry(remainder.clone()) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(index);
                None
            },
        }
    }
}
