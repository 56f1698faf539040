use crate::search::{Heuristic, HeuristicValue, Point};

/// Straight-line distance to the goal.
#[derive(Clone, Debug, Default)]
pub struct EuclideanDistance {}

impl EuclideanDistance {
    pub fn new() -> Self {
        EuclideanDistance {}
    }
}

impl Heuristic for EuclideanDistance {
    fn evaluate(&self, state: Point, goal: Point) -> HeuristicValue {
        state.euclidean_distance(&goal).into()
    }
}
