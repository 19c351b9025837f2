use crate::search::{GridProblem, GridState, Heuristic, HeuristicValue};

/// Counts the residences that have not been visited yet. A* makes no
/// optimality promise when run with this estimator.
#[derive(Clone, Debug, Default)]
pub struct ResidenceCounting;

impl ResidenceCounting {
    pub fn new() -> Self {
        ResidenceCounting {}
    }
}

impl Heuristic<GridProblem> for ResidenceCounting {
    fn evaluate(&mut self, state: &GridState, problem: &GridProblem) -> HeuristicValue {
        problem.grid().num_residences() - state.visited().len()
    }
}
