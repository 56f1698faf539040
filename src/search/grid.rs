//! The [`Grid`] is the validated, immutable form of a maze that the search
//! engines and the renderer work on.

use crate::parsed_types::{ParsedMaze, Tile};
use crate::parsers::Parser;
use crate::search::Point;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("starting location not found")]
    StartNotFound,
    #[error("goal location not found")]
    GoalNotFound,
    #[error("more than one starting location, found {first} and {second}")]
    MultipleStarts { first: Point, second: Point },
    #[error("more than one goal location, found {first} and {second}")]
    MultipleGoals { first: Point, second: Point },
    #[error("cannot read maze file {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("row {row} is malformed: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error("maze is empty")]
    Empty,
}

/// A single position of the grid together with whether it is a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub point: Point,
    pub blocked: bool,
}

/// A rectangular maze with exactly one start and one goal, both open cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major wall flags.
    walls: Vec<bool>,
    start: Point,
    goal: Point,
}

impl Grid {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::IoFailure {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let (remaining, maze) =
            ParsedMaze::parse(text).map_err(|e| LoadError::MalformedRow {
                row: 1,
                reason: format!("{:?}", e),
            })?;

        if let Some(found) = remaining.fragment().chars().next() {
            return Err(LoadError::MalformedRow {
                row: remaining.location_line() as usize,
                reason: format!(
                    "unexpected character {:?} at column {}",
                    found,
                    remaining.get_utf8_column()
                ),
            });
        }

        Self::try_from(maze)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as usize) < self.height
            && (point.col as usize) < self.width
    }

    /// Whether `point` is a wall. The point must be in bounds, see
    /// [`Grid::in_bounds`].
    pub fn is_blocked(&self, point: Point) -> bool {
        debug_assert!(self.in_bounds(point), "{} is out of bounds", point);
        self.walls[point.row as usize * self.width + point.col as usize]
    }

    /// Number of cells that are not walls.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().enumerate().map(|(index, &blocked)| Cell {
            point: Point::new((index / self.width) as i32, (index % self.width) as i32),
            blocked,
        })
    }
}

impl TryFrom<ParsedMaze> for Grid {
    type Error = LoadError;

    fn try_from(maze: ParsedMaze) -> Result<Self, Self::Error> {
        if maze.is_empty() {
            return Err(LoadError::Empty);
        }
        let rows = maze.into_rows();
        let width = rows[0].len();
        if width == 0 {
            return Err(LoadError::MalformedRow {
                row: 1,
                reason: "row is empty".to_string(),
            });
        }

        let mut walls = Vec::with_capacity(rows.len() * width);
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LoadError::MalformedRow {
                    row: r + 1,
                    reason: format!("expected {} tiles, found {}", width, row.len()),
                });
            }
            for (c, tile) in row.iter().enumerate() {
                let point = Point::new(r as i32, c as i32);
                match tile {
                    Tile::Start => {
                        if let Some(first) = start {
                            return Err(LoadError::MultipleStarts {
                                first,
                                second: point,
                            });
                        }
                        start = Some(point);
                    }
                    Tile::Goal => {
                        if let Some(first) = goal {
                            return Err(LoadError::MultipleGoals {
                                first,
                                second: point,
                            });
                        }
                        goal = Some(point);
                    }
                    Tile::Wall | Tile::Open => {}
                }
                walls.push(tile.is_wall());
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            walls,
            start: start.ok_or(LoadError::StartNotFound)?,
            goal: goal.ok_or(LoadError::GoalNotFound)?,
        })
    }
}
