//! Whole-array SIMD drivers.
//!
//! Same repeat/row/column loop structure as the naive accumulator, with the
//! column loop lowered to a SIMD row kernel. Compiled ahead of time per
//! target feature; the binary picks one at runtime in [`crate::add_assign`].
//!
//! Available implementations:
//! - `add_avx2`: 4-lane AVX2 rows
//! - `add_avx512`: 8-lane AVX-512 rows

#[cfg(target_arch = "x86_64")]
pub mod add_avx2;
#[cfg(target_arch = "x86_64")]
pub mod add_avx512;
