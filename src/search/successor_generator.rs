//! Generates the cells reachable in one move from a given cell.

use crate::search::{Action, Grid, Point};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// A cell reachable in one move, and the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub state: Point,
    pub action: Action,
}

pub type Neighbours = SmallVec<[Neighbour; 4]>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessorGenerator {}

impl SuccessorGenerator {
    pub fn new() -> Self {
        Self {}
    }

    /// In-bounds, non-wall neighbours of `state`, in the fixed order up,
    /// down, left, right.
    pub fn get_neighbours(&self, state: Point, grid: &Grid) -> Neighbours {
        Action::MOVES
            .iter()
            .map(|&action| Neighbour {
                state: action.apply(state),
                action,
            })
            .filter(|neighbour| grid.in_bounds(neighbour.state))
            .filter(|neighbour| !grid.is_blocked(neighbour.state))
            .collect()
    }

    /// Same as [`SuccessorGenerator::get_neighbours`], but uniformly
    /// shuffled so that ties in the frontier are not always broken in favour
    /// of the same direction.
    pub fn get_shuffled_neighbours<R: Rng + ?Sized>(
        &self,
        state: Point,
        grid: &Grid,
        rng: &mut R,
    ) -> Neighbours {
        let mut neighbours = self.get_neighbours(state, grid);
        neighbours.shuffle(rng);
        neighbours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn corner_has_two_neighbours() {
        let grid = Grid::from_text(OPEN_3X3_TEXT).unwrap();
        let neighbours = SuccessorGenerator::new().get_neighbours(Point::new(0, 0), &grid);
        assert_eq!(
            neighbours.as_slice(),
            &[
                Neighbour {
                    state: Point::new(1, 0),
                    action: Action::Down
                },
                Neighbour {
                    state: Point::new(0, 1),
                    action: Action::Right
                },
            ]
        );
    }

    #[test]
    fn centre_has_four_neighbours() {
        let grid = Grid::from_text(OPEN_3X3_TEXT).unwrap();
        let neighbours = SuccessorGenerator::new().get_neighbours(Point::new(1, 1), &grid);
        let actions: Vec<Action> = neighbours.iter().map(|n| n.action).collect();
        assert_eq!(actions, Action::MOVES.to_vec());
    }

    #[test]
    fn walls_are_filtered() {
        let grid = Grid::from_text(MAZE1_TEXT).unwrap();
        // Start is in the bottom-left corner with a wall to its right.
        let neighbours = SuccessorGenerator::new().get_neighbours(grid.start(), &grid);
        assert_eq!(neighbours.len(), 1);
        assert_eq!(neighbours[0].state, Point::new(4, 0));
        assert_eq!(neighbours[0].action, Action::Up);
    }

    #[test]
    fn shuffle_keeps_the_same_neighbours() {
        let grid = Grid::from_text(OPEN_3X3_TEXT).unwrap();
        let generator = SuccessorGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let expected: HashSet<Point> = generator
            .get_neighbours(Point::new(1, 1), &grid)
            .iter()
            .map(|n| n.state)
            .collect();
        for _ in 0..20 {
            let shuffled = generator.get_shuffled_neighbours(Point::new(1, 1), &grid, &mut rng);
            let states: HashSet<Point> = shuffled.iter().map(|n| n.state).collect();
            assert_eq!(shuffled.len(), 4);
            assert_eq!(states, expected);
        }
    }

    #[test]
    fn shuffle_is_reproducible_and_varies() {
        let grid = Grid::from_text(OPEN_3X3_TEXT).unwrap();
        let generator = SuccessorGenerator::new();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| generator.get_shuffled_neighbours(Point::new(1, 1), &grid, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(3), run(3));

        let orders: HashSet<Vec<Action>> = run(11)
            .iter()
            .map(|neighbours| neighbours.iter().map(|n| n.action).collect())
            .collect();
        assert!(orders.len() > 1);
    }
}
