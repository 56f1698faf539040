mod node_evaluator;
mod search_engine;
mod strategy;

pub use node_evaluator::NodeEvaluator;
pub use search_engine::{SearchEngine, SearchOutcome, SearchResult};
pub use strategy::{AstarCost, Strategy};
