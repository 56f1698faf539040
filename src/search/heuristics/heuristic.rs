use crate::search::heuristics::{EuclideanDistance, ManhattanDistance};
use crate::search::Point;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining distance from `state` to `goal`.
    fn evaluate(&self, state: Point, goal: Point) -> HeuristicValue;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicName {
    Manhattan,
    Euclidean,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::Euclidean => Box::new(EuclideanDistance::new()),
        }
    }
}
