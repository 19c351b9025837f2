mod heuristic;
mod nearest_residence;
mod residence_counting;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use nearest_residence::NearestResidence;
pub use residence_counting::ResidenceCounting;
pub use zero_heuristic::ZeroHeuristic;
