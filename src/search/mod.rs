mod config;
mod direction;
mod frontier;
mod grid;
pub mod heuristics;
mod plan;
pub mod problem_formulations;
pub mod search_engines;
mod state;
mod validate;
mod verbosity;

pub use config::{ConfigError, SearchConfig};
pub use direction::Direction;
pub use frontier::{Frontier, PriorityFrontier, Queue, Stack};
pub use grid::{Cell, Grid, GridError};
pub use heuristics::{
    Heuristic, HeuristicName, HeuristicValue, NearestResidence, ResidenceCounting, ZeroHeuristic,
};
pub use plan::{Plan, PlanError};
pub use problem_formulations::{GridProblem, SearchProblem, SearchState, Successor};
pub use search_engines::{
    a_star_search, breadth_first_search, depth_first_search, SearchEngine, SearchEngineName,
    SearchResult,
};
pub use state::{GridState, GridStateKey, ResidenceSet};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
