use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Payoffs of a symmetric two-strategy game, seen from the focal player.
///
/// | focal \ opponent | 0 | 1 |
/// |------------------|---|---|
/// | 0                | a | b |
/// | 1                | c | d |
///
/// Strategy 0 is conventionally "cooperate" and strategy 1 "defect".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl PayoffMatrix {
    /// Builds a matrix from row-major payoffs (0v0, 0v1, 1v0, 1v1).
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.a, self.b, self.c, self.d)
    }

    /// Fitness of strategy 0 and strategy 1 when a fraction `x` of the
    /// population plays strategy 0 and opponents are matched at random.
    pub fn fitness(&self, x: f64) -> (f64, f64) {
        let f0 = self.a * x + self.b * (1.0 - x);
        let f1 = self.c * x + self.d * (1.0 - x);
        (f0, f1)
    }

    pub fn avg_fitness(&self, x: f64) -> f64 {
        let (f0, f1) = self.fitness(x);
        x * f0 + (1.0 - x) * f1
    }

    /// Slope of `fitness0 - fitness1` in `x`.
    pub fn selection_gradient(&self) -> f64 {
        self.a - self.b - self.c + self.d
    }
}

impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.a, self.b, self.c, self.d)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsePayoffError {
    #[error("Expected 4 comma-separated values (a,b,c,d), got {found}")]
    WrongFieldCount { found: usize },
    #[error("Non-numeric value in matrix at position {position}: {value:?}")]
    NonNumeric { position: usize, value: String },
    #[error("Payoff at position {position} must be finite, got {value}")]
    NonFinite { position: usize, value: f64 },
}

impl FromStr for PayoffMatrix {
    type Err = ParsePayoffError;

    /// Parses `"a,b,c,d"`; whitespace around each field is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 4 {
            return Err(ParsePayoffError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut values = [0.0; 4];
        for (idx, field) in fields.iter().enumerate() {
            let trimmed = field.trim();
            let value: f64 = trimmed.parse().map_err(|_| ParsePayoffError::NonNumeric {
                position: idx + 1,
                value: trimmed.to_string(),
            })?;
            if !value.is_finite() {
                return Err(ParsePayoffError::NonFinite {
                    position: idx + 1,
                    value,
                });
            }
            values[idx] = value;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

pub const PRISONERS_DILEMMA: PayoffMatrix = PayoffMatrix::new(3.0, 0.0, 5.0, 1.0);
pub const STAG_HUNT: PayoffMatrix = PayoffMatrix::new(4.0, 0.0, 3.0, 2.0);
pub const HAWK_DOVE: PayoffMatrix = PayoffMatrix::new(0.0, 3.0, 5.0, 1.0);
pub const COORDINATION: PayoffMatrix = PayoffMatrix::new(4.0, 0.0, 0.0, 3.0);
pub const HARMONY: PayoffMatrix = PayoffMatrix::new(4.0, 3.0, 2.0, 1.0);

/// Named classic games, in display order.
pub const CLASSIC_GAMES: [(&str, PayoffMatrix); 5] = [
    ("prisoners-dilemma", PRISONERS_DILEMMA),
    ("stag-hunt", STAG_HUNT),
    ("hawk-dove", HAWK_DOVE),
    ("coordination", COORDINATION),
    ("harmony", HARMONY),
];

pub fn classic_game(name: &str) -> Option<PayoffMatrix> {
    CLASSIC_GAMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, game)| *game)
}

pub fn classic_game_names() -> [&'static str; 5] {
    CLASSIC_GAMES.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn fitness_matches_random_matching() {
        let game = PayoffMatrix::new(3.0, 0.0, 5.0, 1.0);
        let (f0, f1) = game.fitness(0.5);
        assert!((f0 - 1.5).abs() < 1e-12);
        assert!((f1 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn fitness_agrees_with_matrix_product() {
        let game = HAWK_DOVE;
        for &x in &[0.0, 0.25, 0.6, 1.0] {
            let product = game.matrix() * Vector2::new(x, 1.0 - x);
            let (f0, f1) = game.fitness(x);
            assert!((product[0] - f0).abs() < 1e-12);
            assert!((product[1] - f1).abs() < 1e-12);
        }
    }

    #[test]
    fn avg_fitness_weights_by_share() {
        let game = PRISONERS_DILEMMA;
        let avg = game.avg_fitness(0.5);
        assert!((avg - 2.25).abs() < 1e-12);
        assert!((game.avg_fitness(1.0) - 3.0).abs() < 1e-12);
        assert!((game.avg_fitness(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parse_accepts_spaces_and_floats() {
        let game: PayoffMatrix = "3, 0, 5, 1".parse().expect("matrix should parse");
        assert_eq!(game, PRISONERS_DILEMMA);

        let game: PayoffMatrix = "3.5,0.1,5.2,1.0".parse().expect("matrix should parse");
        assert!((game.a - 3.5).abs() < 1e-12);
        assert!((game.c - 5.2).abs() < 1e-12);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            "3,0,5".parse::<PayoffMatrix>(),
            Err(ParsePayoffError::WrongFieldCount { found: 3 })
        );
        assert_eq!(
            "3,x,5,1".parse::<PayoffMatrix>(),
            Err(ParsePayoffError::NonNumeric {
                position: 2,
                value: "x".to_string()
            })
        );
        assert!(matches!(
            "3,0,inf,1".parse::<PayoffMatrix>(),
            Err(ParsePayoffError::NonFinite { position: 3, .. })
        ));
    }

    #[test]
    fn parse_error_messages_are_descriptive() {
        let err = "1,2".parse::<PayoffMatrix>().expect_err("expected error");
        assert!(format!("{err}").contains("Expected 4 comma-separated values"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let game = PayoffMatrix::new(4.0, -0.5, 2.25, 1.0);
        let parsed: PayoffMatrix = game.to_string().parse().expect("matrix should parse");
        assert_eq!(parsed, game);
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(classic_game("stag-hunt"), Some(STAG_HUNT));
        assert_eq!(classic_game("harmony"), Some(PayoffMatrix::new(4.0, 3.0, 2.0, 1.0)));
        assert_eq!(classic_game("chicken"), None);
        assert_eq!(
            classic_game_names(),
            ["prisoners-dilemma", "stag-hunt", "hawk-dove", "coordination", "harmony"]
        );
        assert!(CLASSIC_GAMES
            .iter()
            .all(|(_, g)| [g.a, g.b, g.c, g.d].iter().all(|v| v.is_finite())));
    }
}
