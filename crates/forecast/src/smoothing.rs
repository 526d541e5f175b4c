//! Additive Holt-Winters recursions.
//!
//! **Not part of the public API.**

/// Level, trend and seasonal state.
///
/// `season` is a ring of length `period`: slot `t % period` holds the most
/// recent seasonal value for time `t`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Components {
    pub level: f64,
    pub trend: f64,
    pub season: Vec<f64>,
}

/// Initial state from the first two cycles.
///
/// Level is the mean of the first cycle, trend is the mean per-step change
/// between the first and second cycles, and seasonal values are the first
/// cycle's deviations from that level. Requires `data.len() >= 2 * period`.
pub(crate) fn initial_components(data: &[f64], period: usize) -> Components {
    let p = period as f64;
    let level = data[..period].iter().sum::<f64>() / p;
    let trend = (0..period)
        .map(|i| (data[period + i] - data[i]) / p)
        .sum::<f64>()
        / p;
    let season = data[..period].iter().map(|y| y - level).collect();
    Components {
        level,
        trend,
        season,
    }
}

/// Smoothing weights, each in `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Weights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Result of one pass of the recursions over the data.
#[derive(Debug, Clone)]
pub(crate) struct Pass {
    pub sse: f64,
    pub fitted: Vec<f64>,
    pub state: Components,
}

/// Runs the recursions from `init` over `data`.
pub(crate) fn run(data: &[f64], init: &Components, w: Weights) -> Pass {
    let period = init.season.len();
    let mut level = init.level;
    let mut trend = init.trend;
    let mut season = init.season.clone();
    let mut fitted = Vec::with_capacity(data.len());
    let mut sse = 0.0;

    for (t, &y) in data.iter().enumerate() {
        let slot = t % period;
        let s_old = season[slot];
        let yhat = level + trend + s_old;
        fitted.push(yhat);
        sse += (y - yhat) * (y - yhat);

        let new_level = w.alpha * (y - s_old) + (1.0 - w.alpha) * (level + trend);
        let new_trend = w.beta * (new_level - level) + (1.0 - w.beta) * trend;
        season[slot] = w.gamma * (y - level - trend) + (1.0 - w.gamma) * s_old;
        level = new_level;
        trend = new_trend;
    }

    Pass {
        sse,
        fitted,
        state: Components {
            level,
            trend,
            season,
        },
    }
}

/// The last `period` seasonal values in time order, ending at `n - 1`.
pub(crate) fn latest_season(state: &Components, n: usize) -> Vec<f64> {
    let period = state.season.len();
    (0..period)
        .map(|k| state.season[(n + k) % period])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seasonal(n: usize) -> Vec<f64> {
        let pattern = [5.0, -3.0, 1.0, -3.0];
        (0..n).map(|t| 20.0 + 0.5 * t as f64 + pattern[t % 4]).collect()
    }

    #[test]
    fn initial_level_and_trend() {
        let data = seasonal(8);
        let c = initial_components(&data, 4);
        assert_relative_eq!(c.level, 20.75);
        assert_relative_eq!(c.trend, 0.5);
        assert_eq!(c.season.len(), 4);
        assert_relative_eq!(c.season.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_series_has_zero_error() {
        let data = vec![7.0; 12];
        let init = initial_components(&data, 4);
        let pass = run(
            &data,
            &init,
            Weights {
                alpha: 0.4,
                beta: 0.2,
                gamma: 0.3,
            },
        );
        assert_relative_eq!(pass.sse, 0.0);
        assert!(pass.fitted.iter().all(|&f| (f - 7.0).abs() < 1e-12));
    }

    #[test]
    fn fitted_matches_data_length() {
        let data = seasonal(20);
        let init = initial_components(&data, 4);
        let pass = run(
            &data,
            &init,
            Weights {
                alpha: 0.5,
                beta: 0.1,
                gamma: 0.1,
            },
        );
        assert_eq!(pass.fitted.len(), 20);
        assert!(pass.sse.is_finite());
    }

    #[test]
    fn latest_season_is_time_ordered() {
        let state = Components {
            level: 0.0,
            trend: 0.0,
            season: vec![0.0, 1.0, 2.0, 3.0],
        };
        // n = 6: last four times are 2, 3, 4, 5 -> slots 2, 3, 0, 1
        assert_eq!(latest_season(&state, 6), vec![2.0, 3.0, 0.0, 1.0]);
    }
}
