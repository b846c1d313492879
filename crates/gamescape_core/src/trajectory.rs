use crate::game::PayoffMatrix;
use crate::solvers::ForwardEuler;
use crate::traits::{DynamicalSystem, Steppable};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub dt: f64,
    pub steps: usize,
    /// Integration stops once |dx/dt| falls below this value.
    pub convergence_tolerance: f64,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps: 2000,
            convergence_tolerance: 1e-10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseInitialConditionError {
    #[error("Non-numeric initial condition: {value:?}")]
    NonNumeric { value: String },
    #[error("Initial condition must be finite, got {value}")]
    NonFinite { value: f64 },
}

/// Parses one initial strategy-0 share. Values outside [0, 1] are accepted
/// and clamped at integration time.
pub fn parse_initial_condition(s: &str) -> Result<f64, ParseInitialConditionError> {
    let trimmed = s.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseInitialConditionError::NonNumeric {
            value: trimmed.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ParseInitialConditionError::NonFinite { value });
    }
    Ok(value)
}

/// Integrates the replicator equation from `x0` with forward Euler.
pub fn trajectory(game: &PayoffMatrix, x0: f64, dt: f64, steps: usize) -> Vec<f64> {
    let settings = IntegrationSettings {
        dt,
        steps,
        ..IntegrationSettings::default()
    };
    trajectory_with(game, x0, &settings)
}

/// Integrates the replicator equation from `x0`.
///
/// The returned sequence starts with the initial condition (clamped into
/// [0, 1]) and holds one value per step. Every step is clamped into [0, 1].
/// When the slope of a step drops below `convergence_tolerance` the value it
/// produced is kept and integration stops. A NaN initial condition has no
/// position on [0, 1] and yields an empty sequence.
pub fn trajectory_with(game: &PayoffMatrix, x0: f64, settings: &IntegrationSettings) -> Vec<f64> {
    if x0.is_nan() {
        debug!("initial condition is NaN; nothing to integrate");
        return Vec::new();
    }
    let mut state = [x0.clamp(0.0, 1.0)];
    let mut xs = Vec::with_capacity(settings.steps + 1);
    xs.push(state[0]);

    let mut stepper = ForwardEuler::new(game.dimension());
    let mut t = 0.0;
    for step in 0..settings.steps {
        stepper.step(game, &mut t, &mut state, settings.dt);
        state[0] = state[0].clamp(0.0, 1.0);
        xs.push(state[0]);

        if stepper.slope()[0].abs() < settings.convergence_tolerance {
            debug!(step, x = state[0], "trajectory converged");
            break;
        }
    }
    xs
}
