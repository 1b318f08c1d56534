//! Access trace events.
//!
//! Every call to [`MruCache::access`](crate::MruCache::access) appends one or
//! two [`TraceEvent`]s: a classification (invalid, hit, or miss) and, for a
//! miss, what happened to the set (loaded into a vacant slot, or replaced
//! the most recently used line). Events render to the human-readable log
//! lines through `Display`.

use core::fmt;

/// One entry in the simulation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Address outside `0..total_blocks`; counters untouched.
    InvalidAddress {
        /// Requested address.
        address: i64,
    },
    /// Block was resident.
    Hit {
        /// Requested address.
        address: i64,
        /// Set the address maps to.
        set: usize,
    },
    /// Block was not resident.
    Miss {
        /// Requested address.
        address: i64,
        /// Set the address maps to.
        set: usize,
    },
    /// Block loaded into a vacant slot after a miss.
    Loaded {
        /// Loaded address.
        address: i64,
        /// Set receiving the block.
        set: usize,
    },
    /// Full set: the most recently used line was overwritten.
    Replaced {
        /// Block that left the cache.
        evicted: i64,
        /// Block that took its slot.
        loaded: i64,
        /// Set where the replacement happened.
        set: usize,
    },
}

impl TraceEvent {
    /// Short lowercase tag for the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::InvalidAddress { .. } => "invalid",
            TraceEvent::Hit { .. } => "hit",
            TraceEvent::Miss { .. } => "miss",
            TraceEvent::Loaded { .. } => "loaded",
            TraceEvent::Replaced { .. } => "replaced",
        }
    }

    /// Address that triggered the event.
    pub fn address(&self) -> i64 {
        match *self {
            TraceEvent::InvalidAddress { address }
            | TraceEvent::Hit { address, .. }
            | TraceEvent::Miss { address, .. }
            | TraceEvent::Loaded { address, .. } => address,
            TraceEvent::Replaced { loaded, .. } => loaded,
        }
    }

    /// Set index involved, if the address was valid.
    pub fn set(&self) -> Option<usize> {
        match *self {
            TraceEvent::InvalidAddress { .. } => None,
            TraceEvent::Hit { set, .. }
            | TraceEvent::Miss { set, .. }
            | TraceEvent::Loaded { set, .. }
            | TraceEvent::Replaced { set, .. } => Some(set),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::InvalidAddress { address } => {
                write!(f, "Invalid block address: {address} (out of range)")
            }
            TraceEvent::Hit { address, set } => {
                write!(f, "Access block {address}: HIT in set {set}")
            }
            TraceEvent::Miss { address, set } => {
                write!(f, "Access block {address}: MISS in set {set}")
            }
            TraceEvent::Loaded { address, set } => {
                write!(f, "Loaded block {address} into set {set}")
            }
            TraceEvent::Replaced {
                evicted,
                loaded,
                set,
            } => write!(
                f,
                "Replaced block {evicted} with block {loaded} in set {set} (MRU replaced)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_trace_event_rendering() {
        assert_eq!(
            TraceEvent::InvalidAddress { address: 2048 }.to_string(),
            "Invalid block address: 2048 (out of range)"
        );
        assert_eq!(
            TraceEvent::Hit { address: 5, set: 1 }.to_string(),
            "Access block 5: HIT in set 1"
        );
        assert_eq!(
            TraceEvent::Miss { address: 6, set: 2 }.to_string(),
            "Access block 6: MISS in set 2"
        );
        assert_eq!(
            TraceEvent::Loaded { address: 6, set: 2 }.to_string(),
            "Loaded block 6 into set 2"
        );
        assert_eq!(
            TraceEvent::Replaced {
                evicted: 28,
                loaded: 32,
                set: 0
            }
            .to_string(),
            "Replaced block 28 with block 32 in set 0 (MRU replaced)"
        );
    }

    #[test]
    fn test_trace_event_accessors() {
        let replaced = TraceEvent::Replaced {
            evicted: 28,
            loaded: 32,
            set: 0,
        };
        assert_eq!(replaced.kind(), "replaced");
        assert_eq!(replaced.address(), 32);
        assert_eq!(replaced.set(), Some(0));

        let invalid = TraceEvent::InvalidAddress { address: -1 };
        assert_eq!(invalid.kind(), "invalid");
        assert_eq!(invalid.set(), None);
    }
}
