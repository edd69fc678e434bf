//! Monotonic ULID generator utility
//!
//! `Ulid::new()` gives no ordering guarantee between two IDs created in the
//! same millisecond. Thought IDs double as the store's ordering key, so every
//! ID is drawn from one process-wide [`ulid::Generator`] instead.
//!
//! ```rust
//! use thinktool::common::ulid_generator::generate_monotonic_ulid;
//!
//! let first = generate_monotonic_ulid();
//! let second = generate_monotonic_ulid();
//! assert!(first < second);
//! ```

use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::Duration;
use ulid::{Generator, MonotonicError, Ulid};

static ULID_GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();

fn get_generator() -> &'static Mutex<Generator> {
    ULID_GENERATOR.get_or_init(|| Mutex::new(Generator::new()))
}

/// Generate a ULID strictly greater than every ULID previously returned
///
/// If the random component would overflow inside a single millisecond the
/// call blocks until the clock moves on, holding the lock so no other caller
/// can slip in between.
pub fn generate_monotonic_ulid() -> Ulid {
    let mut generator = get_generator()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    retry_until_next_millisecond(|| generator.generate())
}

fn retry_until_next_millisecond<F>(mut attempt: F) -> Ulid
where
    F: FnMut() -> Result<Ulid, MonotonicError>,
{
    loop {
        match attempt() {
            Ok(ulid) => return ulid,
            Err(e) => {
                tracing::trace!("ULID generation deferred: {:?}", e);
                thread::sleep(Duration::from_millis(1));
            }
        }
    }
}

/// Generate a monotonic ULID in its 26-character string form
pub fn generate_monotonic_ulid_string() -> String {
    generate_monotonic_ulid().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_ordering() {
        let ids: Vec<Ulid> = (0..1000).map(|_| generate_monotonic_ulid()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_overflow_waits_for_a_later_id() {
        let previous = generate_monotonic_ulid();
        let mut attempts = 0;

        let next = retry_until_next_millisecond(|| {
            attempts += 1;
            if attempts < 3 {
                Err(MonotonicError::Overflow)
            } else {
                Ok(generate_monotonic_ulid())
            }
        });

        assert_eq!(attempts, 3);
        assert!(next > previous);
    }

    #[test]
    fn test_string_ordering_matches_ulid_ordering() {
        let first = generate_monotonic_ulid_string();
        let second = generate_monotonic_ulid_string();

        assert_eq!(first.len(), 26);
        assert!(first < second);
    }

    #[test]
    fn test_concurrent_generation_is_unique() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..250)
                        .map(|_| generate_monotonic_ulid())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<Ulid> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
