mod astar;
mod bfs;
mod dfs;
mod graph_search;
mod search_engine;
mod search_statistics;
mod termination_condition;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{
    a_star_search, breadth_first_search, depth_first_search, SearchEngine, SearchEngineName,
    SearchResult,
};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
