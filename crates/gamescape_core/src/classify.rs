//! Qualitative classification of a game by its fixed-point structure.

use crate::dynamics::{find_fixed_points_with, FixedPoint, FixedPointKind, Tolerances};
use crate::game::PayoffMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameClass {
    /// Strategy 0 takes over from any mixed start.
    #[serde(rename = "dominant-strategy-0")]
    DominantStrategy0,
    /// Strategy 1 takes over from any mixed start.
    #[serde(rename = "dominant-strategy-1")]
    DominantStrategy1,
    /// Both boundaries attract; an unstable interior threshold splits the basins.
    #[serde(rename = "coordination")]
    Coordination,
    /// Both boundaries repel; a stable mixed equilibrium attracts.
    #[serde(rename = "coexistence")]
    Coexistence,
    /// Both boundaries attract with no interior point reported.
    #[serde(rename = "bistable")]
    Bistable,
    #[serde(rename = "other")]
    Other,
}

impl GameClass {
    pub fn label(self) -> &'static str {
        match self {
            GameClass::DominantStrategy0 => "dominant-strategy-0",
            GameClass::DominantStrategy1 => "dominant-strategy-1",
            GameClass::Coordination => "coordination",
            GameClass::Coexistence => "coexistence",
            GameClass::Bistable => "bistable",
            GameClass::Other => "other",
        }
    }
}

impl fmt::Display for GameClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_game(game: &PayoffMatrix) -> GameClass {
    classify_game_with(game, &Tolerances::default())
}

pub fn classify_game_with(game: &PayoffMatrix, tolerances: &Tolerances) -> GameClass {
    classify_fixed_points(&find_fixed_points_with(game, tolerances))
}

/// Maps a fixed-point set to its regime. The first matching pattern wins.
///
/// A missing boundary point counts as unstable.
pub fn classify_fixed_points(points: &[FixedPoint]) -> GameClass {
    let stable_at = |kind: FixedPointKind| points.iter().any(|p| p.label == kind && p.stable);
    let all_0 = stable_at(FixedPointKind::AllStrategy0);
    let all_1 = stable_at(FixedPointKind::AllStrategy1);
    let interior = points.iter().find(|p| p.label == FixedPointKind::Interior);

    match (all_0, all_1, interior) {
        (true, false, None) => GameClass::DominantStrategy0,
        (false, true, None) => GameClass::DominantStrategy1,
        (true, true, Some(p)) if !p.stable => GameClass::Coordination,
        (false, false, Some(p)) if p.stable => GameClass::Coexistence,
        (true, true, None) => GameClass::Bistable,
        _ => GameClass::Other,
    }
}
