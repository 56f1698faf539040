use crate::search::Point;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The move that led to a search node. Only the root node carries
/// [`Action::None`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Action {
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// The moves in the order candidates are generated, before shuffling.
    pub const MOVES: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Unit offset applied to a point by this action.
    pub fn offset(&self) -> Point {
        match self {
            Action::None => Point::new(0, 0),
            Action::Up => Point::new(-1, 0),
            Action::Down => Point::new(1, 0),
            Action::Left => Point::new(0, -1),
            Action::Right => Point::new(0, 1),
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        point + self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn moves_cover_every_non_trivial_action() {
        let moves: Vec<Action> = Action::iter().filter(|a| *a != Action::None).collect();
        assert_eq!(moves, Action::MOVES.to_vec());
    }

    #[test]
    fn apply_moves_one_cell() {
        let p = Point::new(1, 1);
        for action in Action::MOVES {
            assert!(action.apply(p).is_adjacent(&p));
        }
        assert_eq!(Action::None.apply(p), p);
        assert_eq!(Action::Up.apply(p), Point::new(0, 1));
        assert_eq!(Action::Right.apply(p), Point::new(1, 2));
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Action::Down.to_string(), "down");
        assert_eq!(Action::None.to_string(), "none");
    }
}
