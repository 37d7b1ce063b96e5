/// In-place accumulation as one slice-wide add per repetition.
///
/// No index arithmetic: each repetition zips the flat storage of A and B and
/// adds pairwise. The iterator chain carries no bounds checks in the loop
/// body, so the compiler auto-vectorizes it. Result is identical to
/// [`add_assign_naive`](crate::matrix::naive::add_assign_naive) for equal
/// inputs.
///
/// Extra elements in a longer `b` are ignored, matching `zip` semantics.
pub fn add_assign_slicewise(a: &mut [f64], b: &[f64], iters: usize) {
    for _ in 0..iters {
        for (x, y) in a.iter_mut().zip(b) {
            *x += *y;
        }
    }
}
