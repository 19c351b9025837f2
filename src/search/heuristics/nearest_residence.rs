use crate::search::{Cell, GridProblem, GridState, Heuristic, HeuristicValue};

/// Manhattan distance from the current position to the closest residence
/// not visited yet, or zero once every residence is visited. Only the
/// nearest residence is considered; the cost of touring the others is
/// ignored, and A* makes no optimality promise when run with this estimator.
#[derive(Clone, Debug, Default)]
pub struct NearestResidence;

impl NearestResidence {
    pub fn new() -> Self {
        NearestResidence {}
    }
}

fn manhattan_distance(a: Cell, b: Cell) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

impl Heuristic<GridProblem> for NearestResidence {
    fn evaluate(&mut self, state: &GridState, problem: &GridProblem) -> HeuristicValue {
        let visited = state.visited();
        problem
            .grid()
            .residences()
            .iter()
            .enumerate()
            .filter(|(index, _)| !visited.contains(*index))
            .map(|(_, &residence)| manhattan_distance(state.position(), residence))
            .min()
            .unwrap_or(0)
    }
}
