use crate::search::{Direction, Plan};
use std::fmt::Debug;
use std::hash::Hash;

/// A node of the search graph as seen by the search engines.
pub trait SearchState: Clone + Debug {
    /// States with equal keys are the same node of the search graph, however
    /// they were reached.
    type Key: Hash + Eq;

    fn key(&self) -> Self::Key;

    /// The moves leading from the start state to this state.
    fn actions(&self) -> Plan;

    /// Number of moves leading from the start state to this state.
    fn path_len(&self) -> usize;
}

/// A successor of a state: the new state, the move leading to it and the
/// cost of that move.
pub type Successor<S> = (S, Direction, usize);

pub trait SearchProblem: Debug {
    type State: SearchState;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// The total cost of a sequence of legal moves.
    fn cost_of_actions(&self, actions: &[Direction]) -> usize;
}
