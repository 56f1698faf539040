mod action;
mod frontier;
mod grid;
pub mod heuristics;
mod observer;
mod point;
mod search_node;
mod search_space;
pub mod search_engines;
mod search_statistics;
mod solution;
mod successor_generator;
mod termination_condition;
mod validate;
mod verbosity;

pub use action::Action;
pub use frontier::{EmptyFrontierError, Frontier, FrontierKind};
pub use grid::{Cell, Grid, LoadError};
pub use heuristics::{Heuristic, HeuristicValue};
pub use observer::{ExpansionObserver, NoObserver};
pub use point::Point;
pub use search_engines::{AstarCost, SearchEngine, SearchOutcome, SearchResult, Strategy};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use solution::{Solution, SolutionStep};
pub use successor_generator::{Neighbour, Neighbours, SuccessorGenerator};
pub use termination_condition::TerminationCondition;
pub use validate::{validate, InvalidSolution};
pub use verbosity::Verbosity;
