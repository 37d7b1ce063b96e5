//! Per-row SIMD microkernels and runtime feature detection.
//!
//! Each kernel adds one contiguous row of B into the matching row of A.
//! The full-array drivers in [`crate::simd`] and [`crate::threaded`] loop
//! over rows and call into these.

#[cfg(target_arch = "x86_64")]
pub mod avx2;
#[cfg(target_arch = "x86_64")]
pub mod avx512;

/// Which row kernel to run, decided once per call from CPU features.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKernel {
    #[cfg(target_arch = "x86_64")]
    Avx512,
    #[cfg(target_arch = "x86_64")]
    Avx2,
    Scalar,
}

/// Pick the widest kernel the CPU supports (AVX-512 > AVX2 > scalar).
pub fn detect() -> RowKernel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            return RowKernel::Avx512;
        }
        if is_x86_feature_detected!("avx2") {
            return RowKernel::Avx2;
        }
    }

    RowKernel::Scalar
}

/// Scalar row add, the portable fallback.
pub fn row_add_scalar(a: &mut [f64], b: &[f64]) {
    for (x, y) in a.iter_mut().zip(b) {
        *x += *y;
    }
}

/// Run the given kernel on one row pair.
pub fn row_add(kernel: RowKernel, a: &mut [f64], b: &[f64]) {
    match kernel {
        #[cfg(target_arch = "x86_64")]
        RowKernel::Avx512 => unsafe {
            avx512::row_add_avx512(a.as_mut_ptr(), b.as_ptr(), a.len());
        },
        #[cfg(target_arch = "x86_64")]
        RowKernel::Avx2 => unsafe {
            avx2::row_add_avx2(a.as_mut_ptr(), b.as_ptr(), a.len());
        },
        RowKernel::Scalar => row_add_scalar(a, b),
    }
}
