//! Element-wise array addition, four ways.
//!
//! I wrote this to see how much the "how" matters when the "what" is held
//! fixed: repeatedly adding one N×N array into another, in place. The same
//! operation is implemented four times:
//!
//! - naive triple-nested indexed loops
//! - one slice-wide add per repetition (auto-vectorized by the compiler)
//! - explicit AVX2/AVX-512 row kernels behind runtime CPU dispatch
//! - the SIMD version with the row loop spread across rayon's worker pool
//!
//! ## Usage
//!
//! ```
//! use elemwise::{add_assign, matrix};
//!
//! let mut a = matrix::ones(256);
//! let b = matrix::ones(256);
//!
//! add_assign(&mut a, &b, 256, 5);
//! assert_eq!(a[0], 6.0);
//! ```
//!
//! For large arrays, the row-parallel version:
//!
//! ```
//! use elemwise::{add_assign_parallel, matrix};
//!
//! let mut a = matrix::ones(1024);
//! let b = matrix::ones(1024);
//!
//! add_assign_parallel(&mut a, &b, 1024, 5);
//! ```
//!
//! ## What's inside
//!
//! - 4-lane AVX2 and 8-lane AVX-512 row kernels
//! - Runtime feature dispatch (AVX-512 > AVX2 > scalar)
//! - Row-partitioned parallelism with disjoint writes, no locks

pub mod kernels;
pub mod matrix;
pub mod simd;
pub mod threaded;

pub use matrix::naive::add_assign_naive;
pub use matrix::slicewise::add_assign_slicewise;

/// In-place element-wise add, repeated: A += B, `iters` times.
///
/// Picks the fastest available kernel for your CPU (AVX-512 > AVX2 > scalar).
/// Arrays are row-major n×n.
///
/// # Panics
///
/// Panics if the slice sizes don't match n.
pub fn add_assign(a: &mut [f64], b: &[f64], n: usize, iters: usize) {
    assert_eq!(a.len(), n * n, "a: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "b: expected {}x{}={} elements", n, n, n * n);

    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            unsafe { simd::add_avx512::add_assign_avx512(a, b, n, iters) };
            return;
        }
        if is_x86_feature_detected!("avx2") {
            unsafe { simd::add_avx2::add_assign_avx2(a, b, n, iters) };
            return;
        }
    }

    matrix::slicewise::add_assign_slicewise(a, b, iters);
}

/// Same as [`add_assign`] but splits the row loop across rayon's worker pool.
///
/// Each worker owns a disjoint set of rows, so the writes never overlap and
/// the per-row sums come out identical to the single-threaded version.
pub fn add_assign_parallel(a: &mut [f64], b: &[f64], n: usize, iters: usize) {
    assert_eq!(a.len(), n * n, "a: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "b: expected {}x{}={} elements", n, n, n * n);

    threaded::add_assign_rows(a, b, n, iters);
}
