// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The column analyzer: the multiset distribution of a byte array.

/// Per-byte-value occurrence counts over a column's byte image, plus the
/// two scalar summaries the perfect-hash selector and tree builder need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnStats {
    /// Occurrence count of each of the 256 possible byte values.
    pub(crate) histogram: [u32; 256],
    /// Number of distinct byte values present (`histogram[v] > 0`).
    pub(crate) unique_bytes: u32,
    /// Largest `histogram[v]` over all `v`.
    pub(crate) max_multiplicity: u32,
}

/// Computes `(unique_bytes, max_multiplicity)` and the full histogram for a
/// byte array in one linear pass.
///
/// `unique_bytes` lower-bounds the minimum feasible perfect-hash table size
/// (any perfect hash needs at least as many slots as distinct inputs).
/// `max_multiplicity == bytes.len()` is the degenerate-column signal: every
/// key in the subtree reads the same byte here.
pub(crate) fn analyze(bytes: &[u8]) -> ColumnStats {
    let mut histogram = [0u32; 256];
    for &b in bytes {
        histogram[b as usize] += 1;
    }
    let mut unique_bytes = 0u32;
    let mut max_multiplicity = 0u32;
    for &count in &histogram {
        if count > 0 {
            unique_bytes += 1;
        }
        if count > max_multiplicity {
            max_multiplicity = count;
        }
    }
    ColumnStats {
        histogram,
        unique_bytes,
        max_multiplicity,
    }
}

mod tests;
