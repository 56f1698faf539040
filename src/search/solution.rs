//! A solution is the sequence of moves that leads from the start of a maze to
//! its goal. This module provides the [`Solution`] struct, which represents a
//! solution.

use crate::search::{Action, Point};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// One move of a solution and the cell it ends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub action: Action,
    pub cell: Point,
}

/// The moves from the start (exclusive) to the goal (inclusive), in forward
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Solution {
    steps: Vec<SolutionStep>,
}

impl Solution {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<SolutionStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.steps.iter().map(|step| step.action)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|step| step.cell)
    }

    pub fn contains_cell(&self, cell: Point) -> bool {
        self.steps.iter().any(|step| step.cell == cell)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.steps
                .iter()
                .map(|step| format!("{} {}", step.action, step.cell))
                .join("\n")
        )
    }
}

impl IntoIterator for Solution {
    type Item = SolutionStep;
    type IntoIter = std::vec::IntoIter<SolutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Solution {
    type Target = [SolutionStep];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_steps() -> Solution {
        Solution::new(vec![
            SolutionStep {
                action: Action::Down,
                cell: Point::new(1, 0),
            },
            SolutionStep {
                action: Action::Right,
                cell: Point::new(1, 1),
            },
        ])
    }

    #[test]
    fn accessors() {
        let solution = two_steps();
        assert_eq!(solution.len(), 2);
        assert!(!solution.is_empty());
        assert_eq!(
            solution.actions().collect::<Vec<_>>(),
            vec![Action::Down, Action::Right]
        );
        assert!(solution.contains_cell(Point::new(1, 1)));
        assert!(!solution.contains_cell(Point::new(0, 0)));
        assert!(Solution::empty().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(two_steps().to_string(), "down (1, 0)\nright (1, 1)");
    }
}
