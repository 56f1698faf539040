//! Contains the [`Tile`] type, a single character of a maze file.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// `#`
    Wall,
    /// A space.
    Open,
    /// `A`
    Start,
    /// `B`
    Goal,
}

impl Tile {
    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub const fn as_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => ' ',
            Tile::Start => 'A',
            Tile::Goal => 'B',
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '#' => Ok(Tile::Wall),
            ' ' => Ok(Tile::Open),
            'A' => Ok(Tile::Start),
            'B' => Ok(Tile::Goal),
            other => Err(other),
        }
    }
}
