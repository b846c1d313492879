//! Presentation layer for gamescape: argument handling and terminal output
//! built on top of `gamescape_core`.

pub mod cli;
pub mod render;
pub mod report;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{Cli, Selection};
use crate::render::{render_analysis, RenderOptions};
use crate::report::{render_game_list, AnalysisReport};

/// Result of handling one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text to write to stdout.
    Print(String),
    /// No game was selected; the caller should show usage and fail.
    Usage,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color_enabled(),
            flow_width: usize::from(self.width),
            plot_width: usize::from(self.plot_width),
            plot_height: usize::from(self.plot_height),
            initial_conditions: self.x0.clone(),
        }
    }
}

pub fn execute(cli: &Cli) -> Result<Outcome> {
    match cli.selection() {
        Selection::List => Ok(Outcome::Print(render_game_list())),
        Selection::Missing => {
            debug!("no game selected");
            Ok(Outcome::Usage)
        }
        Selection::Game { name, matrix } => {
            info!(game = name.as_deref().unwrap_or("custom"), %matrix, "analyzing game");
            if cli.json {
                let report = AnalysisReport::new(name.as_deref(), &matrix);
                return Ok(Outcome::Print(report.to_json()?));
            }
            Ok(Outcome::Print(render_analysis(&matrix, &cli.render_options())))
        }
    }
}
