use crate::search::{Action, Grid, Point, Solution};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSolution {
    #[error("step {step}: {action} from {from} does not lead to {cell}")]
    NotAdjacent {
        step: usize,
        action: Action,
        from: Point,
        cell: Point,
    },
    #[error("step {step}: {cell} is outside the maze")]
    OutOfBounds { step: usize, cell: Point },
    #[error("step {step}: {cell} is a wall")]
    Blocked { step: usize, cell: Point },
    #[error("solution ends at {end} instead of the goal {goal}")]
    WrongEnd { end: Point, goal: Point },
}

/// Replays `solution` from the start of `grid` and checks that every move is
/// legal and that the last move ends on the goal.
pub fn validate(solution: &Solution, grid: &Grid) -> Result<(), InvalidSolution> {
    let mut current = grid.start();
    for (step, solution_step) in solution.iter().enumerate() {
        let next = solution_step.action.apply(current);
        if next != solution_step.cell || !next.is_adjacent(&current) {
            return Err(InvalidSolution::NotAdjacent {
                step,
                action: solution_step.action,
                from: current,
                cell: solution_step.cell,
            });
        }
        if !grid.in_bounds(next) {
            return Err(InvalidSolution::OutOfBounds { step, cell: next });
        }
        if grid.is_blocked(next) {
            return Err(InvalidSolution::Blocked { step, cell: next });
        }
        current = next;
    }

    if current != grid.goal() {
        return Err(InvalidSolution::WrongEnd {
            end: current,
            goal: grid.goal(),
        });
    }
    Ok(())
}
