//! AVX-512 whole-array accumulator.

use crate::kernels::avx512::row_add_avx512;

/// In-place element-wise add over the full n×n array, AVX-512 rows.
///
/// Identical structure to the AVX2 driver with the 8-lane kernel.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX-512F and that both slices hold at
/// least `n * n` elements.
#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx512f")]
pub unsafe fn add_assign_avx512(a: &mut [f64], b: &[f64], n: usize, iters: usize) {
    for _ in 0..iters {
        for j in 0..n {
            row_add_avx512(a.as_mut_ptr().add(j * n), b.as_ptr().add(j * n), n);
        }
    }
}
