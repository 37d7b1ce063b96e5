//! AVX2 whole-array accumulator.

use crate::kernels::avx2::row_add_avx2;

/// In-place element-wise add over the full n×n array, AVX2 rows.
///
/// For each of `iters` repetitions, walks the rows and hands each one to the
/// 4-lane row kernel. Produces exactly the same values as the naive indexed
/// version; f64 addition is applied per element in the same order, just four
/// columns per instruction.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2 and that both slices hold at
/// least `n * n` elements.
#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
pub unsafe fn add_assign_avx2(a: &mut [f64], b: &[f64], n: usize, iters: usize) {
    for _ in 0..iters {
        for j in 0..n {
            row_add_avx2(a.as_mut_ptr().add(j * n), b.as_ptr().add(j * n), n);
        }
    }
}
