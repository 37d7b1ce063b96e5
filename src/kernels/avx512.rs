//! 8-lane AVX-512 row-add kernel.

/// Adds `len` f64 values from `b` into `a`, 8 lanes at a time.
///
/// Same shape as the AVX2 kernel, with twice the lane width. Remainder
/// (up to 7 elements) is finished scalar rather than masked; for the row
/// lengths this crate benchmarks the tail is noise.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX-512F (checked via `#[target_feature]` at the call site)
/// - `a` points to `len` contiguous f64 values, valid for read/write
/// - `b` points to `len` contiguous f64 values, valid for read
/// - `a` and `b` do not overlap
#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx512f")]
pub unsafe fn row_add_avx512(a: *mut f64, b: *const f64, len: usize) {
    use std::arch::x86_64::*;

    let main = (len / 8) * 8;

    let mut j = 0;
    while j < main {
        let a_vec = _mm512_loadu_pd(a.add(j));
        let b_vec = _mm512_loadu_pd(b.add(j));
        _mm512_storeu_pd(a.add(j), _mm512_add_pd(a_vec, b_vec));
        j += 8;
    }

    for j in main..len {
        *a.add(j) += *b.add(j);
    }
}
