//! Golden-ratio growth sizing for the builder's backing storage.
//!
//! Each growth step multiplies the current capacity by roughly 1.5, via the
//! integer recurrence `new = floor(old * 3 / 2) + 1`. Because the ratio
//! between consecutive allocations stays constant, N single-unit appends
//! cost O(N) amortized copies, where a fixed-increment policy would pay
//! O(N^2). The first [`TABLE_LEN`] terms of the sequence are precomputed at
//! compile time; each builder keeps a cursor into that table and only ever
//! moves it forward, so repeated growth checks resume scanning instead of
//! re-deriving the recurrence from capacity 1.

/// Number of precomputed recurrence terms.
pub(crate) const TABLE_LEN: usize = 50;

/// First [`TABLE_LEN`] capacities of the growth sequence, starting at 1:
/// `1, 2, 4, 7, 11, 17, 26, 40, 61, ...`
pub(crate) static GROWTH_TABLE: [usize; TABLE_LEN] = growth_table();

const fn growth_table() -> [usize; TABLE_LEN] {
    let mut table = [0; TABLE_LEN];
    let mut capacity = 1;
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = capacity;
        capacity = capacity + capacity / 2 + 1;
        i += 1;
    }
    table
}

/// One step of the recurrence. The `+ 1` keeps the sequence from stalling
/// at capacity 1, where the truncating division alone makes no progress.
fn step(capacity: usize) -> Option<usize> {
    capacity
        .checked_add(capacity / 2)
        .and_then(|grown| grown.checked_add(1))
}

/// Table index of the smallest cached term `>= capacity`, or [`TABLE_LEN`]
/// when `capacity` already exceeds every cached term. O(log `TABLE_LEN`).
pub(crate) fn seed_cursor(capacity: usize) -> usize {
    GROWTH_TABLE.partition_point(|&cached| cached < capacity)
}

/// Smallest capacity of the growth sequence that satisfies `required`,
/// resuming the table scan at `cursor`.
///
/// The cursor is advanced forward only, and afterwards indexes the returned
/// term (or [`TABLE_LEN`] once the cached terms are exhausted, in which case
/// the recurrence is applied directly from `current`). Returns `None` when
/// the recurrence overflows `usize` before reaching `required`.
pub(crate) fn next_capacity(cursor: &mut usize, current: usize, required: usize) -> Option<usize> {
    while *cursor < TABLE_LEN {
        if GROWTH_TABLE[*cursor] >= required {
            return Some(GROWTH_TABLE[*cursor]);
        }
        *cursor += 1;
    }
    let mut capacity = current;
    while capacity < required {
        capacity = step(capacity)?;
    }
    Some(capacity)
}
