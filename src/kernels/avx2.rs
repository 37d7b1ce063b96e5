//! 4-lane AVX2 row-add kernel.

/// Adds `len` f64 values from `b` into `a`, 4 lanes at a time.
///
/// The main loop handles the 4-aligned prefix with unaligned loads/stores;
/// the remainder (up to 3 elements) is finished scalar.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 (checked via `#[target_feature]` at the call site)
/// - `a` points to `len` contiguous f64 values, valid for read/write
/// - `b` points to `len` contiguous f64 values, valid for read
/// - `a` and `b` do not overlap
#[allow(unsafe_op_in_unsafe_fn)]
#[target_feature(enable = "avx2")]
pub unsafe fn row_add_avx2(a: *mut f64, b: *const f64, len: usize) {
    use std::arch::x86_64::*;

    let main = (len / 4) * 4;

    let mut j = 0;
    while j < main {
        let a_vec = _mm256_loadu_pd(a.add(j));
        let b_vec = _mm256_loadu_pd(b.add(j));
        _mm256_storeu_pd(a.add(j), _mm256_add_pd(a_vec, b_vec));
        j += 4;
    }

    for j in main..len {
        *a.add(j) += *b.add(j);
    }
}
