//! Allocation helpers and the scalar implementations.
//!
//! These provide correctness baselines for the optimized SIMD and
//! threaded versions.

pub mod naive;
pub mod self_add;
pub mod slicewise;

/// Allocate an n×n row-major array filled with ones.
pub fn ones(n: usize) -> Vec<f64> {
    vec![1.0; n * n]
}

/// Allocate an n×n row-major array filled with zeros.
pub fn zeros(n: usize) -> Vec<f64> {
    vec![0.0; n * n]
}
