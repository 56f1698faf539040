use crate::search::{Cell, Grid, Point, Solution};
use console::Style;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Mark explored cells with `.`.
    pub show_explored: bool,
    /// Emit ANSI colour codes.
    pub colour: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Wall,
    Start,
    Goal,
    Current,
    Solution,
    Explored,
    Open,
}

impl Glyph {
    fn symbol(&self) -> &'static str {
        match self {
            Glyph::Wall => "█",
            Glyph::Start => "A",
            Glyph::Goal => "B",
            Glyph::Current => "@",
            Glyph::Solution => "*",
            Glyph::Explored => ".",
            Glyph::Open => " ",
        }
    }

    fn style(&self) -> Style {
        match self {
            Glyph::Wall => Style::new().dim(),
            Glyph::Start => Style::new().red().bold(),
            Glyph::Goal => Style::new().green().bold(),
            Glyph::Current => Style::new().blue().bold(),
            Glyph::Solution => Style::new().yellow(),
            Glyph::Explored => Style::new().magenta(),
            Glyph::Open => Style::new(),
        }
    }
}

/// Render `grid` one line per row. Later arguments take priority over
/// earlier ones: the current node is drawn over the solution, which is drawn
/// over explored cells.
pub fn render_grid(
    grid: &Grid,
    options: &RenderOptions,
    solution: Option<&Solution>,
    explored: &[Point],
    current: Option<Point>,
) -> String {
    let solution_cells: HashSet<Point> = solution
        .map(|solution| solution.cells().collect())
        .unwrap_or_default();
    let explored_cells: HashSet<Point> = if options.show_explored {
        explored.iter().copied().collect()
    } else {
        HashSet::new()
    };

    let glyph = |cell: &Cell| {
        let point = cell.point;
        if cell.blocked {
            Glyph::Wall
        } else if point == grid.start() {
            Glyph::Start
        } else if point == grid.goal() {
            Glyph::Goal
        } else if current == Some(point) {
            Glyph::Current
        } else if solution_cells.contains(&point) {
            Glyph::Solution
        } else if explored_cells.contains(&point) {
            Glyph::Explored
        } else {
            Glyph::Open
        }
    };

    let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
    for cell in grid.cells() {
        let glyph = glyph(&cell);
        if options.colour {
            output.push_str(&glyph.style().force_styling(true).apply_to(glyph.symbol()).to_string());
        } else {
            output.push_str(glyph.symbol());
        }
        if cell.point.col as usize == grid.width() - 1 {
            output.push('\n');
        }
    }
    output
}
