use crate::search::{Grid, Heuristic, HeuristicValue, SearchNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CostModel {
    /// One more than the parent's cost, zero at the root.
    PathLength,
    /// Manhattan distance from the start of the maze.
    StartDistance,
}

/// Fills in the `g` and `h` values of a node when it is opened. Together
/// with the frontier kind this is all that differs between strategies.
#[derive(Debug)]
pub struct NodeEvaluator {
    cost_model: CostModel,
    heuristic: Option<Box<dyn Heuristic>>,
}

impl NodeEvaluator {
    pub fn path_length(heuristic: Option<Box<dyn Heuristic>>) -> Self {
        Self {
            cost_model: CostModel::PathLength,
            heuristic,
        }
    }

    pub fn start_distance(heuristic: Option<Box<dyn Heuristic>>) -> Self {
        Self {
            cost_model: CostModel::StartDistance,
            heuristic,
        }
    }

    /// Open `node` with its cost values. `parent_g` is `None` for the root.
    pub fn open(&self, node: &mut SearchNode, parent_g: Option<HeuristicValue>, grid: &Grid) {
        let state = node.get_state();
        let g = match self.cost_model {
            CostModel::PathLength => parent_g.map_or(HeuristicValue::from(0.), |g| g + 1.),
            CostModel::StartDistance => f64::from(state.manhattan_distance(&grid.start())).into(),
        };
        let h = self
            .heuristic
            .as_ref()
            .map_or(HeuristicValue::from(0.), |heuristic| {
                heuristic.evaluate(state, grid.goal())
            });
        node.open(g, h);
    }
}
