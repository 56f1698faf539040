use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes removed from the frontier, including the goal
    expanded_nodes: usize,
    /// Number of neighbour candidates produced by the successor generator
    generated_nodes: usize,
    /// Number of nodes pushed to the frontier, including the root
    opened_nodes: usize,
    /// Number of neighbours skipped because they were already in the
    /// frontier or explored
    pruned_nodes: usize,
    /// Largest frontier size seen
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Set once the search is finalised
    search_duration: Option<Duration>,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            opened_nodes: 0,
            pruned_nodes: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_opened_nodes(&mut self) {
        self.opened_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn opened_nodes(&self) -> usize {
        self.opened_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    /// Wall-clock time of the search, or the time elapsed so far if the
    /// search has not been finalised.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            opened_nodes = self.opened_nodes,
            pruned_nodes = self.pruned_nodes,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        self.search_duration = Some(self.search_start_time.elapsed());
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_duration().as_secs_f64());
    }
}
