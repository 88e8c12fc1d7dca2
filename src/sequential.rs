//! Sequential GUID generator and entry point function.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{random_guid, Guid};

/// Process-wide generator backing [`sequential_guid()`].
static GLOBAL_GENERATOR: SequentialGenerator = SequentialGenerator::new();

/// Generates a sequential GUID.
///
/// This function employs a process-wide global generator and guarantees that the trailing
/// counter region of the GUIDs it returns is strictly increasing across all threads. See
/// [`SequentialGenerator`] for the layout of the generated values.
///
/// # Examples
///
/// ```rust
/// let guid = seqguid::sequential_guid();
/// println!("{}", guid); // e.g., "8a2f90e4-10b3-43ce-003f-856bbc97a695"
/// println!("{:?}", guid.as_bytes()); // as 16-byte big-endian array
///
/// let guid_string: String = seqguid::sequential_guid().to_string();
/// ```
pub fn sequential_guid() -> Guid {
    GLOBAL_GENERATOR.generate()
}

/// Represents a sequential GUID generator that encapsulates an atomic counter and guarantees the
/// monotonic order of the counter region of GUIDs generated through a shared instance.
///
/// Each generated value keeps the first eight bytes of a fresh random GUID and carries the
/// counter in the last eight bytes, most significant byte first:
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                             rand                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                             rand                              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        counter (high)                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        counter (low)                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The counter is seeded on first use with the wall-clock time in 100-nanosecond ticks since the
/// Unix epoch and advances by exactly one per generated GUID, so the trailing eight bytes of
/// successive values compare as strictly increasing under the byte-lexicographic order of
/// [`Guid`]. Unrelated processes seed from their own clocks, which keeps the counter regions of
/// their GUIDs roughly ordered by creation time as well. The leading eight random bytes make the
/// values globally unique with the collision resistance of a plain random GUID.
///
/// Generation takes `&self` and is lock-free, so a single instance can be shared across any
/// number of threads without external synchronization:
///
/// # Examples
///
/// ```rust
/// use seqguid::SequentialGenerator;
/// use std::thread;
///
/// let g = SequentialGenerator::new();
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    /// The tick counter; zero until the first generation seeds it from the wall clock.
    ticks: AtomicI64,
}

impl SequentialGenerator {
    /// Creates a generator instance.
    pub const fn new() -> Self {
        Self {
            ticks: AtomicI64::new(0),
        }
    }

    /// Generates a new sequential GUID.
    pub fn generate(&self) -> Guid {
        self.generate_core(random_guid())
    }

    /// Generates a new sequential GUID by splicing the next counter value into the GUID passed,
    /// keeping its first eight bytes.
    ///
    /// This is the low-level primitive behind [`generate`](Self::generate) for callers that
    /// supply the random GUID themselves.
    pub fn generate_core(&self, random: Guid) -> Guid {
        let mut bytes: [u8; 16] = random.into();
        bytes[8..].copy_from_slice(&self.next_ticks().to_be_bytes());
        Guid::from(bytes)
    }

    /// Atomically advances the counter and returns the incremented value, seeding the counter
    /// from the wall clock on first use.
    fn next_ticks(&self) -> i64 {
        if self.ticks.load(Ordering::Relaxed) == 0 {
            // A caller losing this race merely shifts the starting value by the increments that
            // slipped in before the exchange; monotonicity comes from the fetch_add below.
            let _ = self.ticks.compare_exchange(
                0,
                utc_ticks(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            );
        }
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Returns the wall-clock time as 100-nanosecond ticks elapsed since the Unix epoch.
fn utc_ticks() -> i64 {
    (SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards")
        .as_nanos()
        / 100) as i64
}


#[cfg(test)]
mod tests_entry_point {
    use super::sequential_guid;
    use crate::Guid;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| sequential_guid().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Generates monotonic counter regions by creation order
    #[test]
    fn generates_monotonic_counter_regions_by_creation_order() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                let prev: Guid = samples[i - 1].parse().unwrap();
                let curr: Guid = samples[i].parse().unwrap();
                assert!(prev.as_bytes()[8..] < curr.as_bytes()[8..]);
            }
        });
    }

    /// Sets random bits of the leading region properly
    #[test]
    fn sets_random_bits_of_the_leading_region_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant version bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }
}
