mod grid_problem;
mod search_problem;

pub use grid_problem::GridProblem;
pub use search_problem::{SearchProblem, SearchState, Successor};
