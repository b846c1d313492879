/// The `gamescape_core` crate holds the analytical content of gamescape:
/// replicator dynamics for symmetric two-strategy games.
///
/// Key components:
/// - **Game**: `PayoffMatrix`, fitness evaluation and the classic-game registry.
/// - **Dynamics**: the replicator derivative, fixed-point enumeration and stability.
/// - **Solvers / Trajectory**: a forward Euler stepper and clamped trajectory integration.
/// - **Classify**: the qualitative regime of a game derived from its fixed points.
pub mod classify;
pub mod dynamics;
pub mod game;
pub mod solvers;
pub mod traits;
pub mod trajectory;

pub use classify::{classify_fixed_points, classify_game, classify_game_with, GameClass};
pub use dynamics::{
    find_fixed_points, find_fixed_points_with, replicator_dx, FixedPoint, FixedPointKind,
    Tolerances,
};
pub use game::{classic_game, classic_game_names, ParsePayoffError, PayoffMatrix, CLASSIC_GAMES};
pub use trajectory::{
    parse_initial_condition, trajectory, trajectory_with, IntegrationSettings,
    ParseInitialConditionError,
};
