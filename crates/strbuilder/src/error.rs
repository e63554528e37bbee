use thiserror::Error;

/// Errors reported by [`StringBuilder`](crate::StringBuilder) operations.
///
/// Every failure is surfaced to the immediate caller; no operation retries
/// internally, and a failed growth check leaves the builder in its prior
/// valid state so the caller may retry after freeing memory elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A growth check was invoked for zero additional code units. No caller
    /// ever needs to reserve room for nothing, so this is a contract
    /// violation rather than a no-op.
    #[error("capacity request for zero code units")]
    ZeroGrowth,
    /// Remove bounds fell outside the logical contents, either because
    /// `start > stop` or because `stop` reached past the used length.
    #[error("range {start}..={stop} out of bounds for length {len}")]
    OutOfRange {
        /// Inclusive start index of the rejected range.
        start: usize,
        /// Inclusive stop index of the rejected range.
        stop: usize,
        /// Logical length of the builder at the time of the call.
        len: usize,
    },
    /// Remove was called on a builder holding no code units.
    #[error("remove from an empty builder")]
    Empty,
    /// The backing storage could not be allocated or reallocated, or the
    /// requested capacity overflowed `usize`.
    #[error("failed to allocate {requested} code units")]
    Alloc {
        /// Capacity, in code units, that could not be satisfied.
        requested: usize,
    },
}
