//! Fixed-length sliding-window extraction.

/// Produces every stride-1 contiguous window of `seq_len` elements that
/// leaves at least one unused trailing element.
///
/// For input length `N` this yields exactly `N - seq_len` windows, window
/// `i` covering `data[i..i + seq_len]`; the element after each window is
/// available as a prediction target. `N <= seq_len` (and `seq_len == 0`)
/// yield no windows rather than an error.
///
/// The row type is generic, so a scalar series (`&[f64]`) produces windows
/// of scalars and a multi-feature series (`&[Vec<f64>]`) produces windows
/// of feature rows.
pub fn make_sequences<T: Clone>(data: &[T], seq_len: usize) -> Vec<Vec<T>> {
    if seq_len == 0 || data.len() <= seq_len {
        return Vec::new();
    }

    data.windows(seq_len)
        .take(data.len() - seq_len)
        .map(|window| window.to_vec())
        .collect()
}
