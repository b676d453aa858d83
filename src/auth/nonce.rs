//! Nonce generation for Fireblocks request tokens.
//!
//! Every bearer token carries a nonce the platform uses to reject replays.
//! Nonces are Unix timestamps in nanoseconds, forced strictly increasing per
//! [`NonceClock`] so that concurrent signers never emit the same value.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A single reading of the nonce clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonceStamp {
    /// Nanoseconds since the UNIX epoch, unique per clock.
    pub nonce: u64,
    /// Whole seconds since the UNIX epoch, taken from the same reading.
    pub issued_at: u64,
}

/// A clock that hands out strictly increasing nanosecond nonces.
///
/// Each credential holder owns its own clock; independent clients never share
/// nonce state. The lock covers only the clock read and the comparison with
/// the previous value.
#[derive(Debug, Default)]
pub struct NonceClock {
    last_nonce: Mutex<u64>,
}

impl NonceClock {
    /// Create a new nonce clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next stamp.
    pub fn next_stamp(&self) -> NonceStamp {
        let mut last = self
            .last_nonce
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let nonce = Self::current_time_nanos().max(*last + 1);
        *last = nonce;

        NonceStamp {
            nonce,
            issued_at: nonce / NANOS_PER_SEC,
        }
    }

    fn current_time_nanos() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_nonce_strictly_increasing() {
        let clock = NonceClock::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let stamp = clock.next_stamp();
            assert!(stamp.nonce > last, "Nonce must be strictly increasing");
            last = stamp.nonce;
        }
    }

    #[test]
    fn test_issued_at_matches_nonce() {
        let clock = NonceClock::new();
        let stamp = clock.next_stamp();
        assert_eq!(stamp.issued_at, stamp.nonce / NANOS_PER_SEC);

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!(now.abs_diff(stamp.issued_at) <= 1);
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let clock = Arc::new(NonceClock::new());
        let mut handles = vec![];

        for _ in 0..8 {
            let c = clock.clone();
            handles.push(thread::spawn(move || {
                (0..1000).map(|_| c.next_stamp().nonce).collect::<Vec<_>>()
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(all_nonces.insert(nonce), "Nonce must be unique across threads");
            }
        }
        assert_eq!(all_nonces.len(), 8000);
    }
}
