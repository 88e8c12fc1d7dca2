//! Sequential GUIDs that keep ordered indexes B-tree friendly
//!
//! ```rust
//! use seqguid::sequential_guid;
//!
//! let guid = sequential_guid();
//! println!("{}", guid); // e.g. "8a2f90e4-10b3-43ce-003f-856bbc97a695"
//! println!("{:?}", guid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! Purely random 128-bit identifiers scatter inserts across the whole key space of a B-tree
//! index, fragmenting its pages. The GUIDs produced by this crate stay randomly distributed in
//! their first eight bytes, for global uniqueness, while their last eight bytes carry a
//! process-wide atomic counter seeded from the wall clock in 100-nanosecond ticks. That trailing
//! region compares as strictly increasing across successive calls within one process, and as
//! roughly increasing between processes whose clocks progress, so consecutively minted keys land
//! near each other in the index.
//!
//! # Field and byte layout
//!
//! This implementation produces identifiers with the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                        counter (high)                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                        counter (low)                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 64 `rand` bits are taken unchanged from a fresh random (version 4) GUID.
//! - The 64-bit `counter` field, stored most significant byte first, holds the next value of the
//!   process-wide counter. The counter is seeded exactly once, on first use, with the wall-clock
//!   time in 100-nanosecond ticks since the Unix epoch, and is incremented atomically by one for
//!   each generated GUID. It is never reset and lives for the lifetime of the process.
//!
//! # Other features
//!
//! This library also exposes the underlying random GUID source:
//!
//! ```rust
//! use seqguid::random_guid;
//!
//! let guid = random_guid();
//! println!("{}", guid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```
//!
//! The [`Guid`] type round-trips through the usual textual layouts (hyphenated, simple, braced,
//! and parenthesized), compares byte-lexicographically, and optionally integrates with `serde`
//! and the `uuid` crate through the features of the same names.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod guid;
pub use guid::{Format, Guid, ParseError};

pub mod sequential;
#[doc(inline)]
pub use sequential::{sequential_guid, SequentialGenerator};

mod random;
pub use random::random_guid;
