mod euclidean;
mod heuristic;
mod manhattan;

pub use euclidean::EuclideanDistance;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanDistance;
