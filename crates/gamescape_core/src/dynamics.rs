use crate::game::PayoffMatrix;
use crate::traits::DynamicalSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Numerical tolerances used by fixed-point analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Distance into the interior at which boundary stability is probed.
    pub boundary_offset: f64,
    /// Below this magnitude the selection gradient is treated as zero and no
    /// interior point is reported.
    pub degenerate_denominator: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            boundary_offset: 1e-8,
            degenerate_denominator: 1e-12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedPointKind {
    /// x = 0: nobody plays strategy 0.
    #[serde(rename = "all-strategy-1")]
    AllStrategy1,
    #[serde(rename = "interior")]
    Interior,
    /// x = 1: everybody plays strategy 0.
    #[serde(rename = "all-strategy-0")]
    AllStrategy0,
}

impl FixedPointKind {
    pub fn label(self) -> &'static str {
        match self {
            FixedPointKind::AllStrategy1 => "all-strategy-1",
            FixedPointKind::Interior => "interior",
            FixedPointKind::AllStrategy0 => "all-strategy-0",
        }
    }
}

impl fmt::Display for FixedPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedPoint {
    pub x: f64,
    pub stable: bool,
    pub label: FixedPointKind,
}

/// dx/dt = x (1 - x) (f0 - f1).
///
/// Exactly zero on and outside the boundaries, whatever the fitness
/// difference evaluates to there.
pub fn replicator_dx(game: &PayoffMatrix, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return 0.0;
    }
    let (f0, f1) = game.fitness(x);
    x * (1.0 - x) * (f0 - f1)
}

impl DynamicalSystem<f64> for PayoffMatrix {
    fn dimension(&self) -> usize {
        1
    }

    fn apply(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        out[0] = replicator_dx(self, x[0]);
    }
}

pub fn find_fixed_points(game: &PayoffMatrix) -> Vec<FixedPoint> {
    find_fixed_points_with(game, &Tolerances::default())
}

/// Enumerates the fixed points of the replicator dynamics, sorted by `x`.
pub fn find_fixed_points_with(game: &PayoffMatrix, tolerances: &Tolerances) -> Vec<FixedPoint> {
    let eps = tolerances.boundary_offset;
    let mut points = vec![
        FixedPoint {
            x: 0.0,
            stable: replicator_dx(game, eps) < 0.0,
            label: FixedPointKind::AllStrategy1,
        },
        FixedPoint {
            x: 1.0,
            stable: replicator_dx(game, 1.0 - eps) > 0.0,
            label: FixedPointKind::AllStrategy0,
        },
    ];

    if let Some(interior) = interior_fixed_point(game, tolerances) {
        points.push(interior);
    }

    points.sort_by(|lhs, rhs| lhs.x.total_cmp(&rhs.x));
    points
}

/// Root of f0(x) = f1(x) strictly inside (0, 1), if there is one.
///
/// At such a root the linearization of x (1 - x) (f0 - f1) collapses to
/// x* (1 - x*) times the selection gradient.
fn interior_fixed_point(game: &PayoffMatrix, tolerances: &Tolerances) -> Option<FixedPoint> {
    let denom = game.selection_gradient();
    if denom.abs() <= tolerances.degenerate_denominator {
        debug!(denom, "selection gradient is degenerate; no interior fixed point");
        return None;
    }

    let x_star = (game.d - game.b) / denom;
    if !(x_star > 0.0 && x_star < 1.0) {
        debug!(x_star, "interior root lies outside (0, 1)");
        return None;
    }

    let slope = x_star * (1.0 - x_star) * denom;
    Some(FixedPoint {
        x: x_star,
        stable: slope < 0.0,
        label: FixedPointKind::Interior,
    })
}
