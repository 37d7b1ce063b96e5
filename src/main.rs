//! Benchmark runner for the four add strategies.

use elemwise::matrix;
use elemwise::matrix::naive::add_assign_naive;
use elemwise::matrix::slicewise::add_assign_slicewise;
use elemwise::{add_assign, add_assign_parallel};
use std::time::Instant;

/// Side length of the square arrays.
const SIZE: usize = 1000;
/// Additions per timed call.
const ITERS: usize = 5;

fn main() {
    // Two arrays for computation. Distinct storage: the borrow checker rules
    // out handing the same buffer to a (&mut, &) pair, so unlike a dynamic
    // language there is no way to accidentally alias these.
    let mut a = matrix::ones(SIZE);
    let b = matrix::ones(SIZE);

    // Naive indexed loops.
    let start = Instant::now();
    add_assign_naive(&mut a, &b, SIZE, ITERS);
    println!("Naive loops time: {} \n", start.elapsed().as_secs_f64());

    // Slice-wide add, auto-vectorized.
    let start = Instant::now();
    add_assign_slicewise(&mut a, &b, ITERS);
    println!("Vectorized slice time: {} \n", start.elapsed().as_secs_f64());

    // SIMD kernel. One untimed call first so feature dispatch and page
    // faults stay out of the measurement.
    add_assign(&mut a, &b, SIZE, ITERS);
    let start = Instant::now();
    add_assign(&mut a, &b, SIZE, ITERS);
    println!("SIMD kernel time: {} \n", start.elapsed().as_secs_f64());

    // SIMD kernel, rows in parallel. Untimed call first for the same reason,
    // plus it spins up rayon's worker pool.
    add_assign_parallel(&mut a, &b, SIZE, ITERS);
    let start = Instant::now();
    add_assign_parallel(&mut a, &b, SIZE, ITERS);
    println!("SIMD parallel time: {} \n", start.elapsed().as_secs_f64());
}
