/// In-place doubling: A += A, repeated.
///
/// This is what the element-wise add degenerates to when both operands share
/// the same storage. The two-operand signatures in this crate take `&mut` and
/// `&` borrows and therefore cannot alias, so callers that want the
/// shared-storage behavior call this instead. Starting from all ones, `iters`
/// repetitions leave every element at `2^iters`.
pub fn double_in_place(a: &mut [f64], iters: usize) {
    for _ in 0..iters {
        for x in a.iter_mut() {
            *x += *x;
        }
    }
}
