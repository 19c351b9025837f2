use crate::search::heuristics::{NearestResidence, ResidenceCounting, ZeroHeuristic};
use crate::search::{GridProblem, SearchProblem};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Estimated number of moves still needed to reach a goal.
pub type HeuristicValue = usize;

pub trait Heuristic<P: SearchProblem>: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;

    /// Evaluate a batch of states with respect to the given problem. The
    /// default implementation simply calls `evaluate` for each state
    /// sequentially. This method should be overridden if a more efficient
    /// implementation is possible.
    fn evaluate_batch(&mut self, states: &[P::State], problem: &P) -> Vec<HeuristicValue> {
        states
            .iter()
            .map(|state| self.evaluate(state, problem))
            .collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Always zero. A* becomes uniform cost search.")]
    Zero,
    #[clap(help = "The number of residences not yet visited.")]
    ResidenceCounting,
    #[clap(help = "The Manhattan distance to the nearest unvisited residence.")]
    NearestResidence,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<GridProblem>> {
        match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicName::ResidenceCounting => Box::new(ResidenceCounting::new()),
            HeuristicName::NearestResidence => Box::new(NearestResidence::new()),
        }
    }
}
