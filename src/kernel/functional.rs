//! Elementwise loops over contiguous tensor storage.

/// Write `value` into every element of `out`.
pub fn fill<T: Copy>(value: T, out: &mut [T]) {
    for elem in out {
        *elem = value;
    }
}

/// Apply a unary function over the first `size` elements of `data_in`, writing the results to `data_out`.
///
/// For every index `i` in `0..size`, `data_out[i] = f(data_in[i])`.
///
/// # Panics
///
/// If either of the buffers holds fewer than `size` elements.
pub fn apply_unary_map_fn<In, Out, F>(f: F, data_in: &[In], data_out: &mut [Out], size: usize)
where
    In: Copy,
    F: Fn(In) -> Out,
{
    for (out, &val_in) in data_out[..size].iter_mut().zip(&data_in[..size]) {
        *out = f(val_in);
    }
}

/// Apply a unary function over every element of `data`, in place.
///
/// Each element is read before the result for it is written, so `f` always sees the original value.
pub fn apply_unary_map_fn_inplace<T, F>(f: F, data: &mut [T])
where
    T: Copy,
    F: Fn(T) -> T,
{
    for elem in data {
        *elem = f(*elem);
    }
}
