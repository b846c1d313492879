//! Text rendering of a game's dynamics: payoff table, fixed points, phase
//! flow and trajectory plot.

use gamescape_core::{
    classify_game, find_fixed_points, replicator_dx, trajectory, FixedPoint, PayoffMatrix,
};
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

/// Steps integrated per plotted trajectory.
const PLOT_STEPS: usize = 200;
const PLOT_DT: f64 = 0.01;
const TRACE_SYMBOLS: [char; 8] = ['*', '+', '~', '#', '^', '=', '%', '&'];

/// Applies ANSI styles, or passes text through untouched when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[cfg(test)]
    fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint<D: Display>(&self, text: D, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading<D: Display>(&self, text: D) -> String {
        self.paint(text, Style::new().bold())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub color: bool,
    pub flow_width: usize,
    pub plot_width: usize,
    pub plot_height: usize,
    pub initial_conditions: Vec<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            flow_width: 60,
            plot_width: 70,
            plot_height: 20,
            initial_conditions: vec![0.1, 0.3, 0.5, 0.7, 0.9],
        }
    }
}

fn stability_style(stable: bool) -> Style {
    if stable {
        Style::new().green()
    } else {
        Style::new().red()
    }
}

fn fixed_point_glyph(point: &FixedPoint) -> char {
    if point.stable {
        '@'
    } else {
        'o'
    }
}

fn trace_style(idx: usize) -> Style {
    match idx % 8 {
        0 | 6 => Style::new().cyan(),
        1 | 7 => Style::new().green(),
        2 => Style::new().yellow(),
        3 => Style::new().magenta(),
        4 => Style::new().red(),
        _ => Style::new().blue(),
    }
}

fn trace_symbol(idx: usize, palette: Palette) -> String {
    palette.paint(TRACE_SYMBOLS[idx % TRACE_SYMBOLS.len()], trace_style(idx))
}

/// One-line phase portrait on [0, 1], x = 0 (all-D) on the left.
///
/// Cells within half a cell of a fixed point show `@` (stable) or `o`
/// (unstable); the rest show the direction of selection.
pub fn render_flow_line(game: &PayoffMatrix, width: usize, palette: Palette) -> String {
    let points = find_fixed_points(game);
    let span = width.saturating_sub(1).max(1) as f64;
    let snap = 0.5 / width.max(1) as f64;

    let cells: String = (0..width)
        .map(|i| {
            let x = i as f64 / span;
            if let Some(point) = points.iter().find(|p| (x - p.x).abs() < snap) {
                return palette.paint(
                    fixed_point_glyph(point),
                    stability_style(point.stable).bold(),
                );
            }
            let dx = replicator_dx(game, x);
            if dx > 0.0 {
                palette.paint('>', Style::new().cyan())
            } else if dx < 0.0 {
                palette.paint('<', Style::new().magenta())
            } else {
                palette.paint('.', Style::new().dimmed())
            }
        })
        .collect();

    format!("  all-D |{cells}| all-C")
}

/// Plots x(t) for each initial condition on a `width` x `height` grid.
pub fn render_trajectory_plot(
    game: &PayoffMatrix,
    initial_conditions: &[f64],
    width: usize,
    height: usize,
    palette: Palette,
) -> String {
    let width = width.max(1);
    let height = height.max(1);
    let trajectories: Vec<Vec<f64>> = initial_conditions
        .iter()
        .map(|&x0| trajectory(game, x0, PLOT_DT, PLOT_STEPS))
        .collect();
    let max_t = trajectories.iter().map(Vec::len).max().unwrap_or(1);

    // Each cell remembers the last trajectory drawn through it.
    let mut grid: Vec<Vec<Option<usize>>> = vec![vec![None; width]; height];
    let col_span = (width - 1) as f64;
    let row_span = (height - 1) as f64;
    for (idx, xs) in trajectories.iter().enumerate() {
        for (t_idx, &x) in xs.iter().enumerate() {
            let col = ((t_idx as f64 / max_t as f64) * col_span) as usize;
            let row = (height - 1).saturating_sub((x * row_span) as usize);
            grid[row.min(height - 1)][col.min(width - 1)] = Some(idx);
        }
    }

    let rule = format!("  {:>4} {}", "", "─".repeat(width));
    let mut lines = Vec::with_capacity(height + 7);
    lines.push(format!(
        "  x(t) trajectories from {} initial conditions",
        initial_conditions.len()
    ));
    lines.push(rule.clone());

    for (r, row) in grid.iter().enumerate() {
        let level = 1.0 - r as f64 / row_span.max(1.0);
        let cells: String = row
            .iter()
            .map(|cell| match cell {
                Some(idx) => trace_symbol(*idx, palette),
                None => " ".to_string(),
            })
            .collect();
        lines.push(format!("  {:>4}|{cells}|", format!("{level:.1}")));
    }

    lines.push(rule);
    lines.push(format!("  {:>4} t=0{}t=T", "", " ".repeat(width.saturating_sub(6))));
    lines.push(String::new());

    let legend: Vec<String> = initial_conditions
        .iter()
        .enumerate()
        .map(|(idx, x0)| format!("{} x0={x0:.1}", trace_symbol(idx, palette)))
        .collect();
    lines.push(format!("  {}", legend.join("  ")));

    lines.join("\n")
}

pub fn render_payoff_table(game: &PayoffMatrix, palette: Palette) -> String {
    let header = format!("{:>12}{:>12}{:>12}", "", "Cooperate", "Defect");
    let cell = |value: f64, style: Style| palette.paint(format!("{value:>12.1}"), style);
    let row_c = format!(
        "{:>12}{}{}",
        "Cooperate",
        cell(game.a, Style::new().green()),
        cell(game.b, Style::new().red())
    );
    let row_d = format!(
        "{:>12}{}{}",
        "Defect",
        cell(game.c, Style::new().yellow()),
        cell(game.d, Style::new().blue())
    );
    format!("  {header}\n  {row_c}\n  {row_d}")
}

pub fn render_fixed_points(points: &[FixedPoint], palette: Palette) -> String {
    points
        .iter()
        .map(|point| {
            let style = stability_style(point.stable);
            let stability = if point.stable { "stable" } else { "unstable" };
            format!(
                "    {} x={:.4} ({}, {})",
                palette.paint(fixed_point_glyph(point), style),
                point.x,
                point.label,
                palette.paint(stability, style)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full text report for one game.
pub fn render_analysis(game: &PayoffMatrix, options: &RenderOptions) -> String {
    let palette = Palette::new(options.color);
    let points = find_fixed_points(game);
    let classification = classify_game(game);

    let mut lines = vec![
        format!("\n  {}", palette.heading("Game Analysis")),
        format!("  {}", "=".repeat(40)),
        String::new(),
        format!("  {}", palette.heading("Payoff Matrix:")),
        render_payoff_table(game, palette),
        String::new(),
        format!(
            "  {} {}",
            palette.heading("Classification:"),
            palette.paint(classification, Style::new().cyan())
        ),
        String::new(),
        format!("  {}", palette.heading("Fixed Points:")),
        render_fixed_points(&points, palette),
        String::new(),
        format!("  {}", palette.heading("Phase Flow:")),
        render_flow_line(game, options.flow_width, palette),
        String::new(),
        format!("  {}", palette.heading("Trajectories:")),
        render_trajectory_plot(
            game,
            &options.initial_conditions,
            options.plot_width,
            options.plot_height,
            palette,
        ),
    ];
    lines.push(String::new());
    lines.join("\n")
}
