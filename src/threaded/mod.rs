//! Row-parallel accumulator.
//!
//! The repeat loop stays sequential; inside each repetition the row range
//! [0, n) is partitioned across rayon's worker pool. `par_chunks_mut` hands
//! every worker a disjoint set of rows, so the writes never overlap and no
//! synchronization is needed beyond the implicit barrier when `for_each`
//! returns.

use rayon::prelude::*;

use crate::kernels;

/// In-place element-wise add with the row loop executed in parallel.
///
/// Each row's sums are computed independently by whichever worker picked it
/// up, in the same per-element order as the single-threaded kernels, so the
/// output is bit-identical to [`crate::add_assign`] - completion order of
/// the rows does not affect the values.
///
/// # Panics
///
/// Panics via chunking/indexing if either slice holds fewer than `n * n`
/// elements.
pub fn add_assign_rows(a: &mut [f64], b: &[f64], n: usize, iters: usize) {
    let kernel = kernels::detect();

    for _ in 0..iters {
        a.par_chunks_mut(n)
            .zip(b.par_chunks(n))
            .for_each(|(row_a, row_b)| kernels::row_add(kernel, row_a, row_b));
    }
}
