//! The growable text buffer and its mutation/finalization operations.
//!
//! [`StringBuilder`] owns a contiguous run of code units and grows it with
//! the golden-ratio policy in [`crate::growth`]. One extra slot beyond the
//! logical contents is always reserved for a NUL terminator so the
//! finalized chain interops with terminated text; the slot is never
//! logically used. Reallocation is all-or-nothing: a failed growth leaves
//! storage, length, capacity, and the growth cursor exactly as they were.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::{BStr, BString, ByteSlice};

use crate::{error::Error, growth};

/// Initial capacity used by [`StringBuilder::new`].
const DEFAULT_CAPACITY: usize = 16;

/// A mutable, dynamically growing sequence of code units.
///
/// The builder is single-owner and single-writer: it carries no internal
/// synchronization, and Rust's borrow rules enforce the one-mutator
/// contract statically. All operations complete synchronously in bounded
/// (amortized) time.
///
/// ```
/// use strbuilder::StringBuilder;
///
/// # fn main() -> Result<(), strbuilder::Error> {
/// let mut builder = StringBuilder::with_capacity(1)?;
/// builder.push_all("John")?;
/// builder.push(b' ')?;
/// builder.push_all("Smith")?;
/// assert_eq!(builder.result()?, "John Smith");
/// # Ok(())
/// # }
/// ```
pub struct StringBuilder {
    /// Backing storage; its allocated length is always exactly the
    /// capacity, with no hidden slack.
    chain: Box<[u8]>,
    /// Logically used code units, `len <= chain.len()`.
    len: usize,
    /// Progress through the cached growth table; see [`growth`].
    growth_cursor: usize,
}

impl StringBuilder {
    /// Creates a builder with the default initial capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the initial storage cannot be allocated.
    pub fn new() -> Result<Self, Error> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a builder whose storage holds exactly `capacity` code units.
    ///
    /// A capacity of zero is legal; the first append allocates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the initial storage cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            chain: allocate(capacity)?,
            len: 0,
            growth_cursor: growth::seed_cursor(capacity),
        })
    }

    /// Number of logically used code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the builder holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total allocated slots, including the reserved terminator slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chain.len()
    }

    /// Appends a single code unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if growing the storage fails; the builder
    /// is left unchanged.
    pub fn push(&mut self, unit: u8) -> Result<(), Error> {
        self.ensure_capacity(1)?;
        self.chain[self.len] = unit;
        self.len += 1;
        Ok(())
    }

    /// Appends a whole sequence of code units.
    ///
    /// The capacity check covers the full sequence, so at most one
    /// reallocation happens regardless of the sequence length. Appending an
    /// empty sequence is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if growing the storage fails; the builder
    /// is left unchanged.
    pub fn push_all(&mut self, units: impl AsRef<[u8]>) -> Result<(), Error> {
        let units = units.as_ref();
        if units.is_empty() {
            return Ok(());
        }
        self.ensure_capacity(units.len())?;
        self.chain[self.len..self.len + units.len()].copy_from_slice(units);
        self.len += units.len();
        Ok(())
    }

    /// Removes the code units between `start` and `stop`, both inclusive,
    /// shifting everything after `stop` left. Capacity is never shrunk by
    /// a removal; only the length changes.
    ///
    /// Bounds are checked against the logical length, not the capacity, so
    /// uninitialized slots can never be read or shifted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] when the builder holds nothing, and
    /// [`Error::OutOfRange`] when `start > stop` or `stop` reaches past the
    /// used length. The builder is unchanged on failure.
    pub fn remove(&mut self, start: usize, stop: usize) -> Result<(), Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        if start > stop || stop >= self.len {
            return Err(Error::OutOfRange {
                start,
                stop,
                len: self.len,
            });
        }
        self.chain.copy_within(stop + 1..self.len, start);
        self.len -= stop - start + 1;
        Ok(())
    }

    /// Resets the builder to the canonical empty state.
    ///
    /// The backing storage is replaced by a minimal one-slot allocation
    /// (terminator only), releasing whatever capacity the previous contents
    /// had accumulated, and the growth cursor rewinds accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the minimal allocation fails; the
    /// builder is left unchanged.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.chain = allocate(1)?;
        self.len = 0;
        self.growth_cursor = growth::seed_cursor(1);
        Ok(())
    }

    /// Finalizes the chain in place and borrows it.
    ///
    /// Shrinks the storage to exactly the used length plus the terminator
    /// slot (when it exceeds that), writes the NUL terminator, and returns
    /// a view of the contents. The builder keeps ownership; the view is
    /// invalidated by any later mutation, which the borrow checker
    /// enforces. Calling this twice without intervening mutation returns
    /// equal content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the shrinking reallocation fails; the
    /// builder is left unchanged.
    pub fn result(&mut self) -> Result<&BStr, Error> {
        let terminated = self.len + 1;
        if self.capacity() != terminated {
            self.reallocate(terminated)?;
            self.growth_cursor = growth::seed_cursor(terminated);
        }
        self.chain[self.len] = 0;
        Ok(self.chain[..self.len].as_bstr())
    }

    /// Copies the contents into an independently owned chain.
    ///
    /// The builder is unaffected and remains usable; mutating it afterward
    /// does not change the returned copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the copy cannot be allocated.
    pub fn result_as_copy(&self) -> Result<BString, Error> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(self.len)
            .map_err(|_| Error::Alloc { requested: self.len })?;
        copy.extend_from_slice(&self.chain[..self.len]);
        Ok(BString::from(copy))
    }

    /// Consumes the builder and hands its storage to the caller.
    ///
    /// The chain is transferred as-is, without a finalizing copy or shrink;
    /// the returned value keeps the builder's allocated capacity and is
    /// truncated to the logical contents. Consuming `self` statically
    /// prevents any further use of the builder handle.
    #[must_use]
    pub fn detach(self) -> BString {
        let len = self.len;
        let mut chain = self.chain.into_vec();
        chain.truncate(len);
        BString::from(chain)
    }

    /// Guarantees room for `additional` more code units plus the reserved
    /// terminator slot, growing the storage per the golden-ratio policy.
    ///
    /// On failure nothing changes: neither storage nor length, capacity,
    /// or the growth cursor.
    fn ensure_capacity(&mut self, additional: usize) -> Result<(), Error> {
        if additional == 0 {
            return Err(Error::ZeroGrowth);
        }
        let required = self
            .len
            .checked_add(additional)
            .and_then(|used| used.checked_add(1))
            .ok_or(Error::Alloc {
                requested: usize::MAX,
            })?;
        if self.capacity() >= required {
            return Ok(());
        }
        // Advance a scratch cursor; commit it only once the reallocation
        // has succeeded.
        let mut cursor = self.growth_cursor;
        let capacity = growth::next_capacity(&mut cursor, self.capacity(), required)
            .ok_or(Error::Alloc { requested: required })?;
        self.reallocate(capacity)?;
        self.growth_cursor = cursor;
        Ok(())
    }

    /// Moves the contents into freshly allocated storage of exactly
    /// `capacity` slots and releases the old storage. The old state stays
    /// intact if the allocation fails.
    fn reallocate(&mut self, capacity: usize) -> Result<(), Error> {
        debug_assert!(capacity > self.len);
        let mut chain = allocate(capacity)?;
        chain[..self.len].copy_from_slice(&self.chain[..self.len]);
        self.chain = chain;
        Ok(())
    }
}

impl fmt::Debug for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("chain", &self.chain[..self.len].as_bstr())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Allocates zeroed storage of exactly `capacity` slots, fallibly.
fn allocate(capacity: usize) -> Result<Box<[u8]>, Error> {
    let mut chain = Vec::new();
    chain
        .try_reserve_exact(capacity)
        .map_err(|_| Error::Alloc { requested: capacity })?;
    chain.resize(capacity, 0);
    Ok(chain.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use bstr::B;

    use super::{DEFAULT_CAPACITY, StringBuilder};
    use crate::Error;

    #[test]
    fn push_reserves_the_terminator_slot() {
        let mut builder = StringBuilder::with_capacity(0).unwrap();
        builder.push(b'x').unwrap();
        assert!(builder.capacity() >= builder.len() + 1);
    }

    #[test]
    fn push_all_of_nothing_is_a_noop() {
        let mut builder = StringBuilder::new().unwrap();
        builder.push_all("").unwrap();
        assert_eq!(builder.len(), 0);
        assert_eq!(builder.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn remove_shifts_the_tail_left() {
        let mut builder = StringBuilder::new().unwrap();
        builder.push_all("abcdef").unwrap();
        builder.remove(1, 3).unwrap();
        assert_eq!(builder.result().unwrap(), B("aef"));
    }

    #[test]
    fn remove_bounds_check_uses_length_not_capacity() {
        let mut builder = StringBuilder::with_capacity(64).unwrap();
        builder.push_all("ab").unwrap();
        // Index 2 is within capacity but past the logical contents.
        assert_eq!(
            builder.remove(0, 2),
            Err(Error::OutOfRange {
                start: 0,
                stop: 2,
                len: 2
            })
        );
    }

    #[test]
    fn clear_releases_accumulated_capacity() {
        let mut builder = StringBuilder::with_capacity(1).unwrap();
        builder.push_all("some longer contents").unwrap();
        builder.clear().unwrap();
        assert_eq!(builder.len(), 0);
        assert_eq!(builder.capacity(), 1);
        assert_eq!(builder.result().unwrap(), "");
    }

    #[test]
    fn result_shrinks_to_contents_plus_terminator() {
        let mut builder = StringBuilder::with_capacity(64).unwrap();
        builder.push_all("hi").unwrap();
        assert_eq!(builder.result().unwrap(), "hi");
        assert_eq!(builder.capacity(), 3);
    }

    #[test]
    fn detach_keeps_the_allocated_capacity() {
        let mut builder = StringBuilder::with_capacity(1).unwrap();
        builder.push_all("abc").unwrap();
        let capacity = builder.capacity();
        let chain = builder.detach();
        assert_eq!(chain, "abc");
        assert_eq!(chain.capacity(), capacity);
    }

    #[test]
    fn debug_shows_contents_and_counters() {
        let mut builder = StringBuilder::with_capacity(4).unwrap();
        builder.push_all("ab").unwrap();
        let rendered = std::format!("{builder:?}");
        assert!(rendered.contains("\"ab\""));
        assert!(rendered.contains("len: 2"));
    }
}
