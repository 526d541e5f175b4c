//! Nelder-Mead estimation of the Holt-Winters smoothing weights.
//!
//! Wraps the `argmin` crate. Weights are searched on the real line and
//! mapped into `(0, 1)` with the logistic function.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor, State, TerminationReason};
use argmin::solver::neldermead::NelderMead;
use tracing::debug;

use crate::error::ForecastError;
use crate::fit::HoltWintersFit;
use crate::smoothing::{self, Components, Weights};
use crate::spec::HoltWintersSpec;

const START_ALPHA: f64 = 0.3;
const START_BETA: f64 = 0.1;
const START_GAMMA: f64 = 0.1;
const SIMPLEX_STEP: f64 = 1.0;

pub(crate) fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

pub(crate) fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

fn to_weights(params: &[f64]) -> Weights {
    Weights {
        alpha: logistic(params[0]),
        beta: logistic(params[1]),
        gamma: logistic(params[2]),
    }
}

/// Fits the smoothing weights to already validated data.
///
/// 1. Initial state from the first two cycles
/// 2. Nelder-Mead on the scaled one-step-ahead SSE
/// 3. Final pass at the best weights for fitted values and end state
pub(crate) fn fit_holt_winters(
    spec: &HoltWintersSpec,
    data: &[f64],
) -> Result<HoltWintersFit, ForecastError> {
    let init = smoothing::initial_components(data, spec.period());

    // Scale by the data variance so the tolerance does not depend on units.
    let var = kairos_stats::variance(data);
    let scale = if var > 0.0 {
        var * data.len() as f64
    } else {
        1.0
    };

    let start = vec![logit(START_ALPHA), logit(START_BETA), logit(START_GAMMA)];
    let mut simplex = vec![start.clone()];
    for i in 0..start.len() {
        let mut vertex = start.clone();
        vertex[i] += SIMPLEX_STEP;
        simplex.push(vertex);
    }

    let cost = HoltWintersCost {
        data,
        init: &init,
        scale,
    };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(spec.tolerance())
        .map_err(|e| ForecastError::ForecastConvergence {
            reason: e.to_string(),
        })?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(spec.max_iters()))
        .run()
        .map_err(|e| ForecastError::ForecastConvergence {
            reason: e.to_string(),
        })?;

    let state = result.state();
    let best_cost = state.get_best_cost();
    debug!(
        iterations = state.get_iter(),
        best_cost,
        termination = ?state.get_termination_reason(),
        "holt-winters optimisation finished"
    );

    if let Some(TerminationReason::MaxItersReached) = state.get_termination_reason() {
        return Err(ForecastError::ForecastConvergence {
            reason: format!("iteration cap of {} reached", spec.max_iters()),
        });
    }
    if !best_cost.is_finite() || best_cost == f64::MAX {
        return Err(ForecastError::ForecastConvergence {
            reason: "non-finite objective".to_string(),
        });
    }
    let best = state
        .get_best_param()
        .ok_or_else(|| ForecastError::ForecastConvergence {
            reason: "optimiser returned no parameters".to_string(),
        })?;

    let weights = to_weights(best);
    let pass = smoothing::run(data, &init, weights);
    debug!(
        alpha = weights.alpha,
        beta = weights.beta,
        gamma = weights.gamma,
        sse = pass.sse,
        "holt-winters weights"
    );

    Ok(HoltWintersFit::new(*spec, weights, data, pass))
}

/// Cost function for argmin: scaled sum of squared one-step-ahead errors.
struct HoltWintersCost<'a> {
    data: &'a [f64],
    init: &'a Components,
    scale: f64,
}

impl CostFunction for HoltWintersCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let pass = smoothing::run(self.data, self.init, to_weights(params));
        let scaled = pass.sse / self.scale;
        if scaled.is_finite() {
            Ok(scaled)
        } else {
            Ok(f64::MAX)
        }
    }
}
