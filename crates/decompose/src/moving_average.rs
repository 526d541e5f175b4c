//! Centred moving average used as the trend estimate.

/// Centred moving average of window `period`.
///
/// For odd `period` this is the plain `period`-point average. For even
/// `period` it is the `2 x period` average: `period + 1` points with half
/// weight on both ends. Either way the first and last `period / 2`
/// positions have no full window and are `None`.
///
/// Returns all `None` when the series is shorter than the window.
pub fn centered_moving_average(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = data.len();
    let half = period / 2;
    let mut out = vec![None; n];
    if period == 0 || n < 2 * half + 1 {
        return out;
    }

    let p = period as f64;
    for (i, slot) in out.iter_mut().enumerate().take(n - half).skip(half) {
        let window = &data[i - half..=i + half];
        let value = if period % 2 == 0 {
            let inner: f64 = window[1..window.len() - 1].iter().sum();
            (0.5 * window[0] + inner + 0.5 * window[window.len() - 1]) / p
        } else {
            window.iter().sum::<f64>() / p
        };
        *slot = Some(value);
    }
    out
}
