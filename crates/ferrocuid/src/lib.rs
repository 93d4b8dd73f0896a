//! # ferrocuid
//!
//! Collision-resistant, time-ordered identifiers rendered as fixed-width
//! lowercase base36 text.
//!
//! Two families are provided:
//!
//! - [`Cuid`]: 25 characters, prefix `c`, one increasing counter and two
//!   random blocks.
//! - [`Guid`]: 26 characters, a configurable two-character prefix (default
//!   `nw`), an increasing and a decreasing counter and one random block.
//!
//! Every identifier embeds the millisecond timestamp, a host and process
//! [`fingerprint()`], its counters and random filler. Each field renders to a
//! zero-padded base36 block, so text sorts by creation time first.
//!
//! ## Quick start
//!
//! ```
//! use ferrocuid::{Cuid, Guid, Identifier};
//!
//! let a = ferrocuid::cuid().unwrap();
//! let b: Guid = ferrocuid::new().unwrap();
//!
//! assert!(a.to_string().starts_with('c'));
//! assert_eq!(b.to_string().parse::<Guid>().unwrap(), b);
//! assert!(Cuid::is_valid(&a.to_string()));
//! ```
//!
//! ## Custom generators
//!
//! [`LockGenerator`] takes the fingerprint, a [`TimeSource`] and a
//! [`RandSource`], so tests can pin the clock and randomness:
//!
//! ```
//! use ferrocuid::{Cuid, LockGenerator, RandSource, Result, TimeSource};
//!
//! struct NewYear;
//! impl TimeSource for NewYear {
//!     fn current_millis(&self) -> i64 {
//!         1_609_459_200_000
//!     }
//! }
//!
//! struct Zeros;
//! impl RandSource for Zeros {
//!     fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
//!         dest.fill(0);
//!         Ok(())
//!     }
//! }
//!
//! let generator = LockGenerator::<Cuid, _, _>::new(0, NewYear, Zeros);
//! assert_eq!(generator.generate().unwrap().to_string(), "ckjdigao00000000000000000");
//! ```
//!
//! ## Features
//!
//! - `serde` (default): text for human-readable formats, raw bytes otherwise
//! - `tracing`: trace spans around generation
//! - `parking-lot`: `parking_lot` counter locks instead of `std::sync`

pub mod base36;
mod error;
mod fingerprint;
mod generator;
mod global;
mod id;
mod rand;
mod scalar;
#[cfg(feature = "serde")]
#[doc(hidden)]
pub mod serde;
mod time;

pub use crate::base36::Base36Error;
pub use crate::error::*;
pub use crate::fingerprint::*;
pub use crate::generator::*;
pub use crate::global::{
    IdOption, active_prefix, cuid, guid, new, new_with_options, set_generator, set_prefix_bytes,
};
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::scalar::*;
pub use crate::time::*;
