//! Contains definitions for a parsed maze via the [`ParsedMaze`] type.

use crate::parsed_types::Tile;

/// The rows of a maze file exactly as written. Rows may differ in length and
/// may contain any number of start or goal tiles; validation happens when the
/// maze is turned into a [`Grid`](crate::search::Grid).
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMaze(Vec<Vec<Tile>>);

impl ParsedMaze {
    pub const fn new(rows: Vec<Vec<Tile>>) -> Self {
        Self(rows)
    }

    pub const fn rows(&self) -> &Vec<Vec<Tile>> {
        &self.0
    }

    pub fn into_rows(self) -> Vec<Vec<Tile>> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
