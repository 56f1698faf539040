//! Provides parsers for maze files.

use crate::parsed_types::{ParsedMaze, Tile};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::character::complete::{char, line_ending};
use nom::combinator::{map, value};
use nom::multi::{many0, separated_list0};

/// Parses a single tile, i.e. one of `#`, ` `, `A` or `B`.
pub fn parse_tile<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Tile> {
    alt((
        value(Tile::Wall, char('#')),
        value(Tile::Open, char(' ')),
        value(Tile::Start, char('A')),
        value(Tile::Goal, char('B')),
    ))(input.into())
}

/// Parses a row of tiles. Stops at the first character that is not a tile,
/// which is normally the line ending.
pub fn parse_row<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Tile>> {
    many0(parse_tile)(input.into())
}

/// Parses a maze, i.e. rows of tiles separated by `\n` or `\r\n`. Trailing
/// empty rows are dropped. Parsing stops at the first character that is not
/// part of the grammar, so callers must check the remaining input.
pub fn parse_maze<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, ParsedMaze> {
    map(separated_list0(line_ending, parse_row), |mut rows| {
        while rows.last().is_some_and(|row: &Vec<Tile>| row.is_empty()) {
            rows.pop();
        }
        ParsedMaze::new(rows)
    })(input.into())
}

impl crate::parsers::Parser for ParsedMaze {
    type Item = ParsedMaze;

    /// Parses a maze.
    ///
    /// ## See also
    /// See [`parse_maze`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_maze(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Parser;

    #[test]
    fn tiles() {
        let (_, tile) = parse_tile("#").unwrap();
        assert_eq!(tile, Tile::Wall);
        let (_, tile) = parse_tile(" ").unwrap();
        assert_eq!(tile, Tile::Open);
        let (_, tile) = parse_tile("A").unwrap();
        assert_eq!(tile, Tile::Start);
        let (_, tile) = parse_tile("B").unwrap();
        assert_eq!(tile, Tile::Goal);
        assert!(parse_tile("x").is_err());
    }

    #[test]
    fn row_stops_at_line_ending() {
        let (remainder, row) = parse_row("#A #\nB").unwrap();
        assert_eq!(row, vec![Tile::Wall, Tile::Start, Tile::Open, Tile::Wall]);
        assert_eq!(remainder.fragment(), &"\nB");
    }

    #[test]
    fn maze_with_trailing_newlines() {
        let (remainder, maze) = parse_maze("A #\n# B\n\n").unwrap();
        assert!(remainder.is_empty());
        assert_eq!(maze.rows().len(), 2);
        assert_eq!(maze.rows()[1], vec![Tile::Wall, Tile::Open, Tile::Goal]);
    }

    #[test]
    fn maze_with_crlf() {
        let maze = ParsedMaze::from_str("A#\r\n B\r\n").unwrap();
        assert_eq!(
            maze.rows(),
            &vec![vec![Tile::Start, Tile::Wall], vec![Tile::Open, Tile::Goal]]
        );
    }

    #[test]
    fn keeps_unparsed_text() {
        let (remainder, maze) = parse_maze("A #\n#xB\n").unwrap();
        assert_eq!(maze.rows().len(), 2);
        assert_eq!(maze.rows()[1], vec![Tile::Wall]);
        assert_eq!(remainder.fragment(), &"xB\n");
        assert_eq!(remainder.location_line(), 2);
        assert_eq!(remainder.get_utf8_column(), 2);
    }
}
