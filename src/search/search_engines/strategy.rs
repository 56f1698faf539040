use crate::search::heuristics::HeuristicName;
use crate::search::search_engines::NodeEvaluator;
use crate::search::FrontierKind;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    #[default]
    #[clap(help = "Depth-first search, not necessarily shortest.")]
    Dfs,
    #[clap(help = "Breadth-first search, shortest by number of moves.")]
    Bfs,
    #[clap(help = "Greedy best-first search on the Manhattan distance to the goal.")]
    Gbfs,
    #[clap(help = "A* search on cost plus Euclidean distance to the goal.")]
    Astar,
    #[clap(help = "Dijkstra's algorithm with unit move costs.")]
    Dijkstra,
}

/// How A* computes the cost-to-reach part of its priority.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AstarCost {
    /// Manhattan distance from the start of the maze to the node, regardless
    /// of the path that reached it.
    #[default]
    StartDistance,
    /// Number of moves along the path that reached the node.
    PathLength,
}

impl Strategy {
    pub fn frontier_kind(&self) -> FrontierKind {
        match self {
            Strategy::Dfs => FrontierKind::Stack,
            Strategy::Bfs => FrontierKind::Queue,
            Strategy::Gbfs => FrontierKind::HeuristicPriority,
            Strategy::Astar => FrontierKind::CostHeuristicPriority,
            Strategy::Dijkstra => FrontierKind::CostPriority,
        }
    }

    pub fn heuristic_name(&self) -> Option<HeuristicName> {
        match self {
            Strategy::Gbfs => Some(HeuristicName::Manhattan),
            Strategy::Astar => Some(HeuristicName::Euclidean),
            Strategy::Dfs | Strategy::Bfs | Strategy::Dijkstra => None,
        }
    }

    /// Builds the rule that fills in the cost fields of new nodes.
    /// `astar_cost` is only used by [`Strategy::Astar`].
    pub fn evaluator(&self, astar_cost: AstarCost) -> NodeEvaluator {
        let heuristic = self.heuristic_name().map(|name| name.create());
        match (self, astar_cost) {
            (Strategy::Astar, AstarCost::StartDistance) => NodeEvaluator::start_distance(heuristic),
            _ => NodeEvaluator::path_length(heuristic),
        }
    }
}
