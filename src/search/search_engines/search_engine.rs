use crate::search::{
    search_engines::{AstarCost, Strategy},
    ExpansionObserver, Frontier, Grid, NoObserver, Point, SearchSpace, SearchStatistics, Solution,
    SuccessorGenerator, TerminationCondition,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached
    Solved(Solution),
    /// The frontier ran out before the goal was reached
    Unsolvable,
    /// The search engine hit its expansion limit
    ExpansionLimitReached,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    /// Expanded states in expansion order. The goal is not included.
    pub explored: Vec<Point>,
    /// Number of nodes removed from the frontier, including the goal.
    pub explored_count: usize,
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }
}

/// Runs one [`Strategy`] over mazes. Every call to [`SearchEngine::solve`]
/// starts from a fresh random source seeded with the engine's seed, so
/// repeated runs on the same maze explore the same nodes.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    strategy: Strategy,
    astar_cost: AstarCost,
    seed: u64,
    generator: SuccessorGenerator,
    expansion_limit: Option<usize>,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
}

impl SearchEngine {
    /// Create an engine with a seed drawn from the thread's random source.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_seed(strategy, rand::random())
    }

    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            astar_cost: AstarCost::default(),
            seed,
            generator: SuccessorGenerator::new(),
            expansion_limit: None,
            time_limit: None,
            memory_limit_mb: None,
        }
    }

    pub fn with_astar_cost(self, astar_cost: AstarCost) -> Self {
        Self { astar_cost, ..self }
    }

    pub fn with_expansion_limit(self, expansion_limit: Option<usize>) -> Self {
        Self {
            expansion_limit,
            ..self
        }
    }

    pub fn with_time_limit(self, time_limit: Option<Duration>) -> Self {
        Self { time_limit, ..self }
    }

    pub fn with_memory_limit(self, memory_limit_mb: Option<usize>) -> Self {
        Self {
            memory_limit_mb,
            ..self
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn solve(&self, grid: &Grid) -> SearchResult {
        self.solve_with_observer(grid, &mut NoObserver)
    }

    pub fn solve_with_observer(
        &self,
        grid: &Grid,
        observer: &mut dyn ExpansionObserver,
    ) -> SearchResult {
        info!(
            strategy = %self.strategy,
            seed = self.seed,
            start = %grid.start(),
            goal = %grid.goal(),
            "starting search"
        );
        let mut rng = StdRng::seed_from_u64(self.seed);
        let evaluator = self.strategy.evaluator(self.astar_cost);
        let mut statistics = SearchStatistics::new();
        let mut termination =
            TerminationCondition::new(self.expansion_limit, self.time_limit, self.memory_limit_mb);
        let mut frontier = Frontier::new(self.strategy.frontier_kind());
        let mut search_space = SearchSpace::new(grid.start());
        let mut explored_states: HashSet<Point> = HashSet::new();
        let mut explored = Vec::new();
        let mut explored_count = 0;

        let root_node = search_space.get_root_node_mut();
        evaluator.open(root_node, None, grid);
        frontier.push(root_node);
        statistics.increment_opened_nodes();
        statistics.register_frontier_size(frontier.len());

        let outcome = loop {
            if let Some(outcome) = termination.should_terminate(explored_count) {
                break outcome;
            }
            termination.log_if_needed();

            if frontier.is_empty() {
                break SearchOutcome::Unsolvable;
            }
            trace!(frontier = ?frontier.states().collect::<Vec<_>>(), "frontier before remove");
            let node_id = match frontier.pop() {
                Ok(node_id) => node_id,
                Err(e) => {
                    debug!("{}", e);
                    break SearchOutcome::Unsolvable;
                }
            };

            let node = search_space.get_node_mut(node_id);
            node.close();
            let state = node.get_state();
            let g_value = node.get_g();
            trace!(
                removed = %state,
                g = g_value.into_inner(),
                h = node.get_h().into_inner()
            );
            explored_count += 1;
            statistics.increment_expanded_nodes();

            if state == grid.goal() {
                let solution = search_space.extract_solution(search_space.get_node(node_id));
                break SearchOutcome::Solved(solution);
            }

            explored.push(state);
            explored_states.insert(state);
            observer.on_expand(explored_count, state);

            let neighbours = self
                .generator
                .get_shuffled_neighbours(state, grid, &mut rng);
            statistics.increment_generated_nodes(neighbours.len());
            for neighbour in neighbours {
                if frontier.contains_state(neighbour.state)
                    || explored_states.contains(&neighbour.state)
                {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                let child_node =
                    search_space.insert_node(neighbour.state, neighbour.action, node_id);
                evaluator.open(child_node, Some(g_value), grid);
                frontier.push(child_node);
                statistics.increment_opened_nodes();
            }
            statistics.register_frontier_size(frontier.len());
        };

        statistics.finalise_search();
        termination.finalise();
        match &outcome {
            SearchOutcome::Solved(solution) => {
                info!(solution_length = solution.len(), explored_count, "solution found");
                debug!("solution:\n{}", solution);
            }
            outcome => info!(?outcome, explored_count, "no solution found"),
        }

        SearchResult {
            outcome,
            explored,
            explored_count,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, Action};
    use crate::test_utils::*;
    use clap::ValueEnum;
    use std::collections::VecDeque;

    const SEEDS: std::ops::Range<u64> = 0..16;

    fn all_strategies() -> &'static [Strategy] {
        Strategy::value_variants()
    }

    /// Shortest path length and number of reachable cells, computed
    /// independently of the engine.
    fn reference_bfs(grid: &Grid) -> (Option<usize>, usize) {
        let mut distances = std::collections::HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(grid.start(), 0);
        queue.push_back(grid.start());
        while let Some(current) = queue.pop_front() {
            for action in Action::MOVES {
                let next = action.apply(current);
                if grid.in_bounds(next) && !grid.is_blocked(next) && !distances.contains_key(&next)
                {
                    distances.insert(next, distances[&current] + 1);
                    queue.push_back(next);
                }
            }
        }
        (distances.get(&grid.goal()).copied(), distances.len())
    }

    #[test]
    fn open_3x3_bfs_takes_four_steps() {
        let grid = Grid::from_text(OPEN_3X3_TEXT).unwrap();
        for seed in SEEDS {
            let result = SearchEngine::with_seed(Strategy::Bfs, seed).solve(&grid);
            let solution = result.solution().expect("3x3 grid is solvable");
            assert_eq!(solution.len(), 4);
            assert_eq!(solution.cells().last(), Some(grid.goal()));
            assert!(result.explored_count <= 9);
            assert!(validate(solution, &grid).is_ok());
        }
    }

    #[test]
    fn isolated_start_has_no_solution() {
        let grid = Grid::from_text(ISOLATED_START_TEXT).unwrap();
        for &strategy in all_strategies() {
            let result = SearchEngine::with_seed(strategy, 1).solve(&grid);
            assert_eq!(result.outcome, SearchOutcome::Unsolvable);
            assert!(result.solution().is_none());
            assert_eq!(result.explored_count, 1);
            assert_eq!(result.explored, vec![grid.start()]);
        }
    }

    #[test]
    fn walled_goal_exhausts_reachable_region() {
        let grid = Grid::from_text(WALLED_TEXT).unwrap();
        let (shortest, reachable) = reference_bfs(&grid);
        assert_eq!(shortest, None);
        assert_eq!(reachable, 16);
        for &strategy in all_strategies() {
            for seed in SEEDS {
                let result = SearchEngine::with_seed(strategy, seed).solve(&grid);
                assert_eq!(result.outcome, SearchOutcome::Unsolvable);
                assert_eq!(result.explored_count, reachable);
                let unique: HashSet<Point> = result.explored.iter().copied().collect();
                assert_eq!(unique.len(), reachable);
            }
        }
    }

    #[test]
    fn bfs_and_dijkstra_are_shortest() {
        for text in [MAZE1_TEXT, MAZE2_TEXT, LOOPS_TEXT, OPEN_3X3_TEXT] {
            let grid = Grid::from_text(text).unwrap();
            let (shortest, _) = reference_bfs(&grid);
            for strategy in [Strategy::Bfs, Strategy::Dijkstra] {
                for seed in SEEDS {
                    let result = SearchEngine::with_seed(strategy, seed).solve(&grid);
                    assert_eq!(result.solution().map(|s| s.len()), shortest);
                }
            }
        }
    }

    #[test]
    fn every_strategy_finds_a_valid_path() {
        for text in [MAZE1_TEXT, MAZE2_TEXT, LOOPS_TEXT, OPEN_3X3_TEXT] {
            let grid = Grid::from_text(text).unwrap();
            let (shortest, reachable) = reference_bfs(&grid);
            let shortest = shortest.unwrap();
            for &strategy in all_strategies() {
                for seed in SEEDS {
                    let result = SearchEngine::with_seed(strategy, seed).solve(&grid);
                    let solution = result.solution().expect("maze is solvable");
                    assert!(validate(solution, &grid).is_ok(), "{} {}", strategy, seed);
                    assert!(solution.len() >= shortest);
                    assert!(solution.cells().all(|cell| !grid.is_blocked(cell)));
                    assert!(result.explored.iter().all(|&p| grid.in_bounds(p)));
                    assert!(result.explored_count <= reachable);
                    assert_eq!(result.explored_count, result.explored.len() + 1);
                }
            }
        }
    }

    #[test]
    fn maze1_has_a_single_path() {
        let grid = Grid::from_text(MAZE1_TEXT).unwrap();
        for &strategy in all_strategies() {
            let result = SearchEngine::with_seed(strategy, 5).solve(&grid);
            let solution = result.solution().unwrap();
            assert_eq!(solution.len(), 10);
            assert_eq!(solution[0].action, Action::Up);
            assert_eq!(solution[0].cell, Point::new(4, 0));
            assert_eq!(solution.steps().last().unwrap().cell, Point::new(0, 5));
        }
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let grid = Grid::from_text(MAZE2_TEXT).unwrap();
        for &strategy in all_strategies() {
            let engine = SearchEngine::with_seed(strategy, 42);
            let first = engine.solve(&grid);
            let second = engine.solve(&grid);
            assert_eq!(first.outcome, second.outcome);
            assert_eq!(first.explored_count, second.explored_count);
            assert_eq!(first.explored, second.explored);

            let other = SearchEngine::with_seed(strategy, 42).solve(&grid);
            assert_eq!(first.outcome, other.outcome);
        }
    }

    #[test]
    fn goal_is_counted_but_not_explored() {
        let grid = Grid::from_text(MAZE1_TEXT).unwrap();
        let result = SearchEngine::with_seed(Strategy::Bfs, 0).solve(&grid);
        assert_eq!(result.explored_count, 11);
        assert_eq!(result.explored.len(), 10);
        assert_eq!(result.explored[0], grid.start());
        assert!(!result.explored.contains(&grid.goal()));
    }

    #[test]
    fn observer_sees_every_expansion() {
        let grid = Grid::from_text(LOOPS_TEXT).unwrap();
        let mut seen = vec![];
        let mut observer = |count: usize, state: Point| seen.push((count, state));
        let result =
            SearchEngine::with_seed(Strategy::Dfs, 9).solve_with_observer(&grid, &mut observer);
        assert_eq!(seen.len(), result.explored.len());
        for (index, (count, state)) in seen.iter().enumerate() {
            assert_eq!(*count, index + 1);
            assert_eq!(*state, result.explored[index]);
        }
    }

    #[test]
    fn expansion_limit_stops_the_search() {
        let grid = Grid::from_text(MAZE2_TEXT).unwrap();
        let result = SearchEngine::with_seed(Strategy::Bfs, 0)
            .with_expansion_limit(Some(5))
            .solve(&grid);
        assert_eq!(result.outcome, SearchOutcome::ExpansionLimitReached);
        assert_eq!(result.explored_count, 5);
        assert!(result.solution().is_none());
    }

    #[test]
    fn statistics_match_the_result() {
        let grid = Grid::from_text(LOOPS_TEXT).unwrap();
        let result = SearchEngine::with_seed(Strategy::Astar, 3).solve(&grid);
        let statistics = &result.statistics;
        assert_eq!(statistics.expanded_nodes(), result.explored_count);
        assert_eq!(
            statistics.generated_nodes(),
            statistics.opened_nodes() - 1 + statistics.pruned_nodes()
        );
        assert!(statistics.peak_frontier_size() >= 1);
    }
}
