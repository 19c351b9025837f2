//! Breadth first search

use crate::search::{
    search_engines::{
        graph_search::graph_search, SearchEngine, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    Queue, SearchProblem,
};
use tracing::info;

#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(
        &mut self,
        problem: &P,
        mut termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        info!("running breadth first search");
        let mut statistics = SearchStatistics::new();
        let mut frontier = Queue::new();

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
