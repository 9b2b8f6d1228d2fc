use super::statistics::median_unchecked;

/// Extend `samples` by `half` elements on both ends using median padding
///
/// The leading block repeats the median of the first `half` samples and the
/// trailing block the median of the last `half` samples. The statistic length
/// is clipped to the signal length, so windows wider than the signal still get
/// a well-defined boundary. Every padded position receives the same single
/// value; there is no running boundary median.
///
/// `samples` must be non-empty and finite.
pub(crate) fn median_pad(samples: &[f64], half: usize) -> Vec<f64> {
    if half == 0 {
        return samples.to_vec();
    }

    let stat_length = half.min(samples.len());
    let leading = median_unchecked(&samples[..stat_length]);
    let trailing = median_unchecked(&samples[samples.len() - stat_length..]);

    let mut padded = Vec::with_capacity(samples.len() + 2 * half);
    padded.resize(half, leading);
    padded.extend_from_slice(samples);
    padded.resize(padded.len() + half, trailing);
    padded
}
