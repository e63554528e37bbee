//! A growable string builder with golden-ratio capacity growth.
//!
//! [`StringBuilder`] owns a mutable, dynamically growing sequence of raw
//! code units (bytes), meant as a building block for string-construction
//! algorithms that must avoid repeated whole-string reallocation. When the
//! buffer runs out of room it grows by roughly 1.5x per step, keeping the
//! total copy cost of N single-unit appends at O(N) amortized; the growth
//! sequence is precomputed so repeated growth checks are table lookups
//! rather than re-derivations.
//!
//! The builder is single-owner and single-writer, carries no internal
//! synchronization, and is deliberately not Unicode-aware: it operates on
//! raw code units, and callers who need text semantics layer them on top.
//!
//! ```
//! use strbuilder::StringBuilder;
//!
//! # fn main() -> Result<(), strbuilder::Error> {
//! let mut builder = StringBuilder::with_capacity(1)?;
//! builder.push_all("Hello world, I am a fancy string builder")?;
//! builder.remove(0, 12)?;
//! assert_eq!(builder.result()?, "I am a fancy string builder");
//! # Ok(())
//! # }
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod error;
#[cfg(feature = "hashes")]
pub mod fnv;
mod growth;


pub use builder::StringBuilder;
pub use error::Error;
