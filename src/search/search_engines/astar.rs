//! A* search. States are ordered by `g + h`, where `g` is the number of moves
//! taken so far and `h` the heuristic estimate; ties go to the state pushed
//! first.

use crate::search::{
    search_engines::{
        graph_search::graph_search, SearchEngine, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    Frontier, Heuristic, HeuristicValue, PriorityFrontier, SearchProblem, SearchState,
};
use tracing::info;

/// Priority frontier that evaluates the heuristic as states are pushed.
struct BestFirstFrontier<'a, P: SearchProblem> {
    problem: &'a P,
    heuristic: &'a mut dyn Heuristic<P>,
    queue: PriorityFrontier<P::State, HeuristicValue>,
    evaluations: usize,
}

impl<'a, P: SearchProblem> Frontier<P::State> for BestFirstFrontier<'a, P> {
    fn push(&mut self, state: P::State) {
        let h_value = self.heuristic.evaluate(&state, self.problem);
        self.evaluations += 1;
        let f_value = state.path_len() + h_value;
        self.queue.push(state, f_value);
    }

    fn pop(&mut self) -> Option<P::State> {
        self.queue.pop()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug)]
pub struct AStar<P: SearchProblem> {
    heuristic: Box<dyn Heuristic<P>>,
}

impl<P: SearchProblem> AStar<P> {
    pub fn new(heuristic: Box<dyn Heuristic<P>>) -> Self {
        Self { heuristic }
    }
}

impl<P: SearchProblem> SearchEngine<P> for AStar<P> {
    fn search(
        &mut self,
        problem: &P,
        mut termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        info!(heuristic = ?self.heuristic, "running A* search");
        let mut statistics = SearchStatistics::new();
        let mut frontier = BestFirstFrontier {
            problem,
            heuristic: self.heuristic.as_mut(),
            queue: PriorityFrontier::new(),
            evaluations: 0,
        };

        let result = graph_search(
            problem,
            &mut frontier,
            &mut termination_condition,
            &mut statistics,
        );
        statistics.increment_evaluated_nodes(frontier.evaluations);

        statistics.finalise_search();
        termination_condition.finalise();
        (result, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        a_star_search, breadth_first_search, validate, Grid, GridProblem, HeuristicName,
        NearestResidence, ResidenceCounting, ZeroHeuristic,
    };
    use crate::test_utils::*;

    #[test]
    fn astar_with_zero_heuristic_is_optimal() {
        for (text, optimal) in [
            (CORNERS_GRID_TEXT, 6),
            (CORRIDOR_GRID_TEXT, CORRIDOR_OPTIMAL_LENGTH),
            (SMALL_GRID_TEXT, SMALL_GRID_OPTIMAL_LENGTH),
        ] {
            let grid = Grid::from_text(text).unwrap();
            let problem = GridProblem::from(grid.clone());
            let plan = a_star_search(&problem, Box::new(ZeroHeuristic::new()));

            assert_eq!(plan.len(), optimal);
            assert!(validate(&plan, &grid).is_ok());
        }
    }

    #[test]
    fn astar_matches_bfs_length() {
        let problem = GridProblem::from(Grid::from_text(CORRIDOR_GRID_TEXT).unwrap());
        let astar_plan = a_star_search(&problem, Box::new(ZeroHeuristic::new()));
        assert_eq!(astar_plan.len(), breadth_first_search(&problem).len());
    }

    // Neither estimator comes with an optimality guarantee for A*, so these
    // only check that a valid tour comes back and that it is no shorter than
    // the optimum.
    #[test]
    fn astar_with_other_heuristics_finds_valid_tours() {
        for text in [CORNERS_GRID_TEXT, CORRIDOR_GRID_TEXT, SMALL_GRID_TEXT] {
            let grid = Grid::from_text(text).unwrap();
            let problem = GridProblem::from(grid.clone());
            let optimal = breadth_first_search(&problem).len();

            let counting = a_star_search(&problem, Box::new(ResidenceCounting::new()));
            assert!(validate(&counting, &grid).is_ok());
            assert!(counting.len() >= optimal);

            let nearest = a_star_search(&problem, Box::new(NearestResidence::new()));
            assert!(validate(&nearest, &grid).is_ok());
            assert!(nearest.len() >= optimal);
        }
    }

    #[test]
    fn informed_heuristic_evaluates_and_expands() {
        let problem = GridProblem::from(Grid::from_text(CORRIDOR_GRID_TEXT).unwrap());
        let (result, statistics) = AStar::new(HeuristicName::NearestResidence.create())
            .search(&problem, TerminationCondition::unlimited());

        assert!(matches!(result, SearchResult::Success(_)));
        assert!(statistics.evaluated_nodes() > 0);
        // Every pushed state is evaluated, the start state included.
        assert_eq!(
            statistics.evaluated_nodes(),
            statistics.generated_nodes() + 1
        );
    }

    #[test]
    fn astar_respects_time_limit() {
        let problem = GridProblem::from(Grid::from_text(CORRIDOR_GRID_TEXT).unwrap());
        let (result, statistics) = AStar::new(HeuristicName::Zero.create()).search(
            &problem,
            TerminationCondition::new(Some(std::time::Duration::ZERO), None, None),
        );

        assert_eq!(result, SearchResult::TimeLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn astar_walks_long_corridor() {
        let grid = long_corridor_grid(LONG_CORRIDOR_COLUMNS);
        let problem = GridProblem::from(grid.clone());
        for name in [HeuristicName::Zero, HeuristicName::NearestResidence] {
            let plan = a_star_search(&problem, name.create());

            assert_eq!(plan.len(), LONG_CORRIDOR_COLUMNS - 1);
            assert!(validate(&plan, &grid).is_ok());
        }
    }
}
