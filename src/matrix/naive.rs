/// Naive in-place accumulation using explicit index arithmetic.
///
/// For each of `iters` repetitions, walks every row and column and adds the
/// matching element of B into A. Every access pays the `j * n + k` index
/// computation and a bounds check; this is the baseline the other three
/// strategies are compared against.
///
/// # Arguments
///
/// * `a` - Accumulator (n × n), row-major, mutated in place
/// * `b` - Addend (n × n), row-major
/// * `n` - Side length of both arrays
/// * `iters` - Number of times B is added into A
///
/// # Panics
///
/// Panics via slice indexing if `n * n` exceeds either slice length.
pub fn add_assign_naive(a: &mut [f64], b: &[f64], n: usize, iters: usize) {
    for _ in 0..iters {
        for j in 0..n {
            for k in 0..n {
                a[j * n + k] += b[j * n + k];
            }
        }
    }
}
