use elemwise::matrix;
use elemwise::matrix::naive::add_assign_naive;
use elemwise::matrix::self_add::double_in_place;
use elemwise::matrix::slicewise::add_assign_slicewise;
use elemwise::{add_assign, add_assign_parallel};

fn assert_arrays_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-12,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

/// a0 + iters * b, computed independently of the code under test.
fn reference_sum(a0: &[f64], b: &[f64], iters: usize) -> Vec<f64> {
    a0.iter()
        .zip(b)
        .map(|(x, y)| x + iters as f64 * y)
        .collect()
}

/// Run all four strategies on independent copies of `a0`, returning
/// (label, result) pairs.
fn run_all(a0: &[f64], b: &[f64], n: usize, iters: usize) -> Vec<(&'static str, Vec<f64>)> {
    let mut naive = a0.to_vec();
    add_assign_naive(&mut naive, b, n, iters);

    let mut slicewise = a0.to_vec();
    add_assign_slicewise(&mut slicewise, b, iters);

    let mut simd = a0.to_vec();
    add_assign(&mut simd, b, n, iters);

    let mut parallel = a0.to_vec();
    add_assign_parallel(&mut parallel, b, n, iters);

    vec![
        ("naive", naive),
        ("slicewise", slicewise),
        ("simd", simd),
        ("parallel", parallel),
    ]
}

// ============================================================
// All strategies against the closed-form reference
// ============================================================

#[test]
fn test_all_strategies_match_reference() {
    let test_sizes = [1, 3, 4, 5, 8, 16, 33];
    let iter_counts = [1, 3];

    for n in test_sizes {
        for iters in iter_counts {
            let a0: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();
            let b: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64).collect();
            let expected = reference_sum(&a0, &b, iters);

            for (label, result) in run_all(&a0, &b, n, iters) {
                assert_arrays_equal(
                    &expected,
                    &result,
                    &format!("{}_n{}_i{}", label, n, iters),
                );
            }
        }
    }
}

#[test]
fn test_zero_iterations_is_identity() {
    let n = 8;
    let a0: Vec<f64> = (0..n * n).map(|i| i as f64).collect();
    let b = matrix::ones(n);

    for (label, result) in run_all(&a0, &b, n, 0) {
        assert_eq!(a0, result, "{}: zero iterations must not touch the input", label);
    }
}

// ============================================================
// Fixed end-to-end scenarios
// ============================================================

#[test]
fn test_ones_plus_ones_single_pass_gives_twos() {
    let a0 = matrix::ones(4);
    let b = matrix::ones(4);

    for (label, result) in run_all(&a0, &b, 4, 1) {
        assert_eq!(result, vec![2.0; 16], "{}", label);
    }
}

#[test]
fn test_zeros_plus_ones_three_passes_gives_threes() {
    let a0 = matrix::zeros(4);
    let b = matrix::ones(4);

    for (label, result) in run_all(&a0, &b, 4, 3) {
        assert_eq!(result, vec![3.0; 16], "{}", label);
    }
}

#[test]
fn test_warmup_then_timed_call_accumulates_both() {
    // The driver makes one untimed call before the timed one; both mutate
    // the accumulator, so fresh inputs end at a0 + 2*I*b.
    let n = 16;
    let iters = 5;
    let a0: Vec<f64> = (0..n * n).map(|i| (i % 4) as f64).collect();
    let b = matrix::ones(n);
    let expected = reference_sum(&a0, &b, 2 * iters);

    let mut simd = a0.clone();
    add_assign(&mut simd, &b, n, iters);
    add_assign(&mut simd, &b, n, iters);
    assert_arrays_equal(&expected, &simd, "simd_warmup_plus_timed");

    let mut parallel = a0.clone();
    add_assign_parallel(&mut parallel, &b, n, iters);
    add_assign_parallel(&mut parallel, &b, n, iters);
    assert_arrays_equal(&expected, &parallel, "parallel_warmup_plus_timed");
}

// ============================================================
// Lane-boundary sizes (SIMD remainder handling)
// ============================================================

#[test]
fn test_simd_matches_naive_at_lane_boundaries() {
    // Straddles both the 4-lane and 8-lane widths.
    let test_sizes = [3, 4, 5, 7, 8, 9, 15, 16, 17];

    for n in test_sizes {
        let a0: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i % 13) as f64).collect();

        let mut naive = a0.clone();
        add_assign_naive(&mut naive, &b, n, 2);

        let mut simd = a0.clone();
        add_assign(&mut simd, &b, n, 2);

        // Per-element adds in the same order, so exact equality.
        assert_eq!(naive, simd, "lane_boundary_n{}", n);
    }
}

// ============================================================
// Parallel vs single-threaded
// ============================================================

#[test]
fn test_parallel_matches_single_threaded_exactly() {
    let test_sizes = [64, 256, 1000];

    for n in test_sizes {
        let a0: Vec<f64> = (0..n * n).map(|i| (i % 17) as f64).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i % 13) as f64).collect();

        let mut single = a0.clone();
        add_assign(&mut single, &b, n, 5);

        let mut parallel = a0.clone();
        add_assign_parallel(&mut parallel, &b, n, 5);

        // Rows never share partial sums, so thread scheduling cannot
        // reassociate anything: bit-identical output.
        assert_eq!(single, parallel, "parallel_n{}", n);
    }
}

#[test]
fn test_parallel_small_array() {
    let a0 = matrix::ones(2);
    let b = matrix::ones(2);

    let mut parallel = a0.clone();
    add_assign_parallel(&mut parallel, &b, 2, 3);

    assert_eq!(parallel, vec![4.0; 4]);
}

// ============================================================
// Aliased-storage characterization
// ============================================================

#[test]
fn test_doubling_matches_add_of_cloned_operand() {
    let n = 8;
    let a0: Vec<f64> = (0..n * n).map(|i| (i % 5) as f64 + 1.0).collect();

    let mut doubled = a0.clone();
    double_in_place(&mut doubled, 3);

    // A += A three times is the same as adding a snapshot-per-round, i.e.
    // each round doubles: a0 * 2^3.
    let expected: Vec<f64> = a0.iter().map(|x| x * 8.0).collect();
    assert_eq!(doubled, expected);
}

#[test]
fn test_aliased_driver_value_sequence() {
    // Characterizes the shared-storage driver: both operands alias, so each
    // call's 5 additions are 5 doublings. Six accumulating invocations
    // (two plain calls, then warm-up + timed twice) walk the array through
    // 2^5, 2^10, ..., 2^30.
    let mut a = matrix::ones(4);
    let mut expected = 1.0f64;

    for call in 1..=6 {
        double_in_place(&mut a, 5);
        expected *= 32.0;
        assert!(
            a.iter().all(|&x| x == expected),
            "after call {}: expected {} everywhere",
            call,
            expected
        );
    }

    assert_eq!(expected, (1u64 << 30) as f64);
}
