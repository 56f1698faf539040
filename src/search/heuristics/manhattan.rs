use crate::search::{Heuristic, HeuristicValue, Point};

/// Number of unit moves to the goal ignoring walls. Admissible for 4-way
/// movement.
#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance {}

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, state: Point, goal: Point) -> HeuristicValue {
        f64::from(state.manhattan_distance(&goal)).into()
    }
}
