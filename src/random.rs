//! Random GUID generation.

use crate::Guid;
use rand::random;

/// Generates a fully random (version 4) GUID.
///
/// This is the uniformly random 128-bit source that [`sequential_guid()`](crate::sequential_guid)
/// builds on; the sequential generator keeps the first eight random bytes and overwrites the rest
/// with its counter.
///
/// # Examples
///
/// ```rust
/// use seqguid::random_guid;
///
/// let guid = random_guid();
/// println!("{}", guid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", guid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn random_guid() -> Guid {
    let mut bytes: [u8; 16] = random();
    bytes[6] = 0x40 | (bytes[6] >> 4);
    bytes[8] = 0x80 | (bytes[8] >> 2);
    Guid::from(bytes)
}

#[cfg(test)]
mod tests {
    use super::random_guid;
    use crate::Guid;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<Guid> = (0..N_SAMPLES).map(|_| random_guid()).collect());

    /// Sets version and variant bits on every sample
    #[test]
    fn sets_version_and_variant_bits_on_every_sample() {
        SAMPLES.with(|samples| {
            for e in samples {
                let bytes = e.as_bytes();
                assert_eq!(bytes[6] >> 4, 0x4, "version nibble of {}", e);
                assert_eq!(bytes[8] >> 6, 0b10, "variant bits of {}", e);
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&Guid> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Leaves no bias in the leading bytes that feed the sequential splice
    #[test]
    fn leaves_no_bias_in_the_leading_bytes_that_feed_the_sequential_splice() {
        // count '1' of each bit of bytes 0-7, the region kept by the sequential generator
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 64];
            for e in samples {
                for (i, byte) in e.as_bytes()[..8].iter().enumerate() {
                    for bit in 0..8 {
                        bins[i * 8 + bit] += u32::from(byte >> (7 - bit)) & 1;
                    }
                }
            }
            bins
        });

        // the version nibble of byte 6 is the constant 0100
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");

        // the other bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }
}
