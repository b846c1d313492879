use anyhow::{Context, Result};
use gamescape_core::{
    classify_fixed_points, find_fixed_points, FixedPoint, GameClass, PayoffMatrix, CLASSIC_GAMES,
};
use serde::Serialize;

/// Machine-readable summary of a game's dynamics.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    pub matrix: PayoffMatrix,
    pub classification: GameClass,
    pub fixed_points: Vec<FixedPoint>,
}

impl AnalysisReport {
    pub fn new(name: Option<&str>, matrix: &PayoffMatrix) -> Self {
        let fixed_points = find_fixed_points(matrix);
        Self {
            game: name.map(str::to_string),
            matrix: *matrix,
            classification: classify_fixed_points(&fixed_points),
            fixed_points,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize analysis report.")
    }
}

pub fn render_game_list() -> String {
    let mut lines = vec![String::new(), "Available classic games:".to_string()];
    for (name, game) in CLASSIC_GAMES.iter() {
        lines.push(format!(
            "  {name:20}  [{:.0},{:.0},{:.0},{:.0}]",
            game.a, game.b, game.c, game.d
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
