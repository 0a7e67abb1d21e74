//! Index arithmetic for the packed triangular pair array.
//!
//! Pair counts for `n` frequent items conceptually live in the strict upper
//! triangle of an `n`-by-`n` matrix indexed by ordinals. The triangle is
//! stored in a flat buffer of `n * (n + 1) / 2` slots; `linear_index` and
//! `triangular_to_pair` translate between the two addressings and must stay
//! exact inverses of each other.

use crate::types::Ordinal;

/// Number of slots in the flat buffer for an `n`-item triangle.
pub fn triangular_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Map a strict upper-triangle cell `(i, j)` with `i < j < n` to its slot in
/// the flat buffer.
///
/// Callers canonicalize the pair so the smaller ordinal comes first; `(a, b)`
/// and `(b, a)` therefore land on the same slot. Arguments outside the
/// contract are a logic error in the caller, not bad input, and panic.
pub fn linear_index(i: Ordinal, j: Ordinal, n: usize) -> usize {
    assert!(
        i < j && j < n,
        "triangular index ({}, {}) out of range for n = {}",
        i,
        j,
        n
    );
    n * i + j - i * (i + 1) / 2
}

/// Recover the `(row, column)` cell a flat slot stands for, with
/// row < column for every slot `linear_index` can produce.
///
/// Walks the cumulative row-end offsets until one reaches `idx`: each row
/// ends `delta` slots after the previous one, with `delta` starting at
/// `n - 1` and shrinking by one per row.
pub fn triangular_to_pair(idx: usize, n: usize) -> (Ordinal, Ordinal) {
    assert!(
        idx < triangular_len(n),
        "flat index {} out of range for n = {}",
        idx,
        n
    );

    let mut row = 0;
    let mut delta = n - 1;
    let mut x = delta;
    while x < idx {
        row += 1;
        x += delta;
        delta -= 1;
    }
    let col = n + idx - x - 1;

    (row, col)
}
