use serde::{Deserialize, Serialize};

/// Index triple (n, i, j) of a generalized spherical harmonic.
///
/// Valid triples satisfy 0 <= n <= order and -n <= i, j <= n. The
/// enumeration order (n ascending, i ascending, j ascending) is the
/// contract that matches coefficient positions to basis functions, so it
/// must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HarmonicIndex {
    /// Harmonic degree
    pub n: i32,
    /// First order, -n <= i <= n
    pub i: i32,
    /// Second order, -n <= j <= n
    pub j: i32,
}

/// Total number of harmonics through degree `order`.
///
/// Closed form of the sum over n of (2n+1)².
pub fn basis_size(order: usize) -> usize {
    (order + 1) * (2 * order + 1) * (2 * order + 3) / 3
}

/// Full enumeration of index triples through degree `order`.
///
/// The returned vector is the canonical coefficient ordering; it can be
/// re-traversed as often as needed.
pub fn harmonic_indices(order: usize) -> Vec<HarmonicIndex> {
    let mut indices = Vec::with_capacity(basis_size(order));
    for n in 0..=order as i32 {
        for i in -n..=n {
            for j in -n..=n {
                indices.push(HarmonicIndex { n, i, j });
            }
        }
    }
    indices
}

/// Position of a triple in the canonical enumeration.
///
/// The degrees below n occupy n(2n-1)(2n+1)/3 slots; within degree n the
/// (i, j) block is row-major with side 2n+1.
pub fn linear_index(idx: &HarmonicIndex) -> usize {
    debug_assert!(idx.n >= 0 && idx.i.abs() <= idx.n && idx.j.abs() <= idx.n);
    let n = idx.n as i64;
    let base = n * (2 * n - 1) * (2 * n + 1) / 3;
    let offset = (idx.i as i64 + n) * (2 * n + 1) + (idx.j as i64 + n);
    (base + offset) as usize
}
