use clap::builder::PossibleValuesParser;
use clap::Parser;
use gamescape_core::{classic_game, classic_game_names, parse_initial_condition, PayoffMatrix};

const EXAMPLES: &str = "\
Examples:
  gamescape prisoners-dilemma
  gamescape --matrix 3,0,5,1
  gamescape stag-hunt --no-color
  gamescape --list";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gamescape",
    version,
    about = "Visualize evolutionary game theory dynamics in your terminal.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Name of a classic 2x2 game.
    #[arg(value_parser = PossibleValuesParser::new(classic_game_names()))]
    pub game: Option<String>,

    /// Custom payoff matrix as 'a,b,c,d' (row-major: CC,CD,DC,DD). Overrides GAME.
    #[arg(long, short = 'm', value_name = "A,B,C,D", allow_hyphen_values = true)]
    pub matrix: Option<PayoffMatrix>,

    /// Disable ANSI colors. Also honoured through the NO_COLOR environment variable.
    #[arg(long)]
    pub no_color: bool,

    /// List available classic games.
    #[arg(long)]
    pub list: bool,

    /// Print the analysis as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Number of cells in the phase-flow line.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u16).range(2..))]
    pub width: u16,

    /// Width of the trajectory plot in columns.
    #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(u16).range(7..))]
    pub plot_width: u16,

    /// Height of the trajectory plot in rows.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(2..))]
    pub plot_height: u16,

    /// Initial strategy-0 shares plotted as trajectories.
    #[arg(
        long,
        value_name = "X0,...",
        value_delimiter = ',',
        value_parser = parse_initial_condition,
        default_values_t = [0.1, 0.3, 0.5, 0.7, 0.9]
    )]
    pub x0: Vec<f64>,
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    List,
    Game {
        name: Option<String>,
        matrix: PayoffMatrix,
    },
    Missing,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        if self.list {
            return Selection::List;
        }
        if let Some(matrix) = self.matrix {
            return Selection::Game { name: None, matrix };
        }
        match self.game.as_deref().and_then(|name| classic_game(name).map(|m| (name, m))) {
            Some((name, matrix)) => Selection::Game {
                name: Some(name.to_string()),
                matrix,
            },
            None => Selection::Missing,
        }
    }

    pub fn color_enabled(&self) -> bool {
        let env_disabled = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        !self.no_color && !env_disabled
    }
}
