//! Contains the raw, unvalidated types produced by the maze parser.

mod maze;
mod tile;

pub use maze::ParsedMaze;
pub use tile::Tile;
