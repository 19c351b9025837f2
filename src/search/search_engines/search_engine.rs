use crate::search::{
    search_engines::{AStar, SearchStatistics, TerminationCondition, BFS, DFS},
    GridProblem, Heuristic, Plan, SearchProblem,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// Every reachable state was expanded without finding a goal
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
    /// The search engine expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
}

impl SearchResult {
    /// The plan found, or the empty plan if the search did not succeed.
    pub fn into_plan(self) -> Plan {
        match self {
            SearchResult::Success(plan) => plan,
            _ => Plan::empty(),
        }
    }
}

pub trait SearchEngine<P: SearchProblem> {
    fn search(
        &mut self,
        problem: &P,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth first search. Finds a tour, not necessarily a short one.")]
    Dfs,
    #[clap(help = "Breadth first search. Finds a shortest tour.")]
    Bfs,
    #[clap(help = "A* search guided by the chosen heuristic.")]
    Astar,
}

impl SearchEngineName {
    /// Create the engine. Only A* makes use of the heuristic.
    pub fn create(
        &self,
        heuristic: Box<dyn Heuristic<GridProblem>>,
    ) -> Box<dyn SearchEngine<GridProblem>> {
        match self {
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Bfs => Box::new(BFS::new()),
            SearchEngineName::Astar => Box::new(AStar::new(heuristic)),
        }
    }
}

/// Depth first search without limits. Returns an empty plan if there is no
/// solution.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Plan {
    let (result, _) = DFS::new().search(problem, TerminationCondition::unlimited());
    result.into_plan()
}

/// Breadth first search without limits. Returns an empty plan if there is no
/// solution.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Plan {
    let (result, _) = BFS::new().search(problem, TerminationCondition::unlimited());
    result.into_plan()
}

/// A* search without limits. Returns an empty plan if there is no solution.
pub fn a_star_search<P: SearchProblem>(problem: &P, heuristic: Box<dyn Heuristic<P>>) -> Plan {
    let (result, _) = AStar::new(heuristic).search(problem, TerminationCondition::unlimited());
    result.into_plan()
}
