//! The loop shared by all search engines. The engines differ only in the
//! frontier they pass in.

use crate::search::{
    search_engines::{SearchResult, SearchStatistics, TerminationCondition},
    Frontier, SearchProblem, SearchState,
};
use std::collections::HashSet;
use tracing::debug;

/// Run a graph search from the start state of `problem`.
///
/// Successors are pushed without checking whether they were seen before, so
/// a node can sit in the frontier several times. Duplicates are dropped when
/// popped instead: a state whose key was already expanded is skipped. The
/// first goal state popped is the result.
pub(super) fn graph_search<P, F>(
    problem: &P,
    frontier: &mut F,
    termination_condition: &mut TerminationCondition,
    statistics: &mut SearchStatistics,
) -> SearchResult
where
    P: SearchProblem,
    F: Frontier<P::State>,
{
    let mut closed: HashSet<<P::State as SearchState>::Key> = HashSet::new();
    frontier.push(problem.start_state());

    while !frontier.is_empty() {
        if let Some(result) = termination_condition.should_terminate(statistics.expanded_nodes())
        {
            return result;
        }
        termination_condition.log_if_needed();

        let Some(state) = frontier.pop() else {
            break;
        };
        if !closed.insert(state.key()) {
            statistics.increment_duplicate_nodes();
            continue;
        }

        if problem.is_goal_state(&state) {
            debug!(plan_length = state.path_len(), "goal state popped");
            return SearchResult::Success(state.actions());
        }

        statistics.increment_expanded_nodes();
        let successors = problem.successors(&state);
        statistics.increment_generated_nodes(successors.len());
        for (successor, _action, _step_cost) in successors {
            frontier.push(successor);
        }
    }

    SearchResult::ProvablyUnsolvable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Direction::*, Grid, GridProblem, Queue, Stack};

    // Start between two residences: every tour passes the start cell twice,
    // the second time with one residence already collected.
    const CORRIDOR: &str = "1 3\n1 0 1\n0 1\n";

    fn run<F: Frontier<crate::search::GridState>>(frontier: &mut F) -> SearchResult {
        let problem = GridProblem::from(Grid::from_text(CORRIDOR).unwrap());
        graph_search(
            &problem,
            frontier,
            &mut TerminationCondition::unlimited(),
            &mut SearchStatistics::new(),
        )
    }

    #[test]
    fn revisits_cell_with_different_residences() {
        let result = run(&mut Queue::new());
        let plan = result.into_plan();
        assert_eq!(plan.steps(), &[Right, Left, Left]);

        let plan = run(&mut Stack::new()).into_plan();
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn duplicates_are_dropped_on_pop() {
        let problem = GridProblem::from(Grid::from_text(CORRIDOR).unwrap());
        let mut statistics = SearchStatistics::new();
        let result = graph_search(
            &problem,
            &mut Queue::new(),
            &mut TerminationCondition::unlimited(),
            &mut statistics,
        );

        assert!(matches!(result, SearchResult::Success(_)));
        // RIGHT LEFT RIGHT leads back to (0, 2) holding the same single
        // residence as after RIGHT, so it is skipped when popped.
        assert!(statistics.duplicate_nodes() > 0);
        assert!(statistics.expanded_nodes() <= 6);
    }
}
