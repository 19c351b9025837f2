//! Depth first search

use crate::search::{
    search_engines::{
        graph_search::graph_search, SearchEngine, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    SearchProblem, Stack,
};
use tracing::info;

/// Depth first search. Complete on finite grids, but the tour it returns
/// can be much longer than the shortest one.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(
        &mut self,
        problem: &P,
        mut termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        info!("running depth first search");
        let mut statistics = SearchStatistics::new();
        let mut frontier = Stack::new();

        let result = graph_search(
            problem,
            &mut frontier,
            &mut termination_condition,
            &mut statistics,
        );

        statistics.finalise_search();
        termination_condition.finalise();
        (result, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        breadth_first_search, depth_first_search, validate, Direction::*, Grid, GridProblem,
    };
    use crate::test_utils::*;

    #[test]
    fn dfs_finds_a_valid_tour() {
        for text in [CORNERS_GRID_TEXT, SMALL_GRID_TEXT, CORRIDOR_GRID_TEXT] {
            let grid = Grid::from_text(text).unwrap();
            let problem = GridProblem::from(grid.clone());
            let plan = depth_first_search(&problem);

            assert!(!plan.is_empty());
            assert!(validate(&plan, &grid).is_ok(), "invalid plan {:?}", plan);
            assert!(plan.len() >= breadth_first_search(&problem).len());
        }
    }

    #[test]
    fn dfs_follows_last_pushed_successor() {
        // Successors are pushed in the order UP, RIGHT, DOWN, LEFT, so the
        // stack hands back LEFT first, then DOWN.
        let grid = Grid::from_text("2 3\n0 0 0\n1 0 0\n0 1\n").unwrap();
        let problem = GridProblem::from(grid);
        let plan = depth_first_search(&problem);
        assert_eq!(plan.steps(), &[Left, Down]);
    }

    #[test]
    fn dfs_walks_long_corridor() {
        // LEFT is popped first but leads back to an expanded state, so the
        // search keeps heading right.
        let problem = GridProblem::new(std::sync::Arc::new(long_corridor_grid(
            LONG_CORRIDOR_COLUMNS,
        )));
        let plan = depth_first_search(&problem);

        assert_eq!(plan.len(), LONG_CORRIDOR_COLUMNS - 1);
        assert!(plan.iter().all(|&step| step == Right));
    }
}
