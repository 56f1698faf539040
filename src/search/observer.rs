//! Hooks for watching a search as it runs, e.g. to draw one frame per
//! expansion.

use crate::search::Point;

pub trait ExpansionObserver {
    /// Called once per expanded non-goal node, after it has been added to
    /// the explored set and before its neighbours are generated.
    fn on_expand(&mut self, explored_count: usize, state: Point);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl ExpansionObserver for NoObserver {
    fn on_expand(&mut self, _explored_count: usize, _state: Point) {}
}

impl<F> ExpansionObserver for F
where
    F: FnMut(usize, Point),
{
    fn on_expand(&mut self, explored_count: usize, state: Point) {
        self(explored_count, state)
    }
}
