use crate::search::{
    Direction, Grid, GridState, GridStateKey, Plan, ResidenceSet, SearchProblem, SearchState,
    Successor,
};
use std::sync::Arc;

impl SearchState for GridState {
    type Key = GridStateKey;

    fn key(&self) -> GridStateKey {
        GridState::key(self)
    }

    fn actions(&self) -> Plan {
        GridState::actions(self)
    }

    fn path_len(&self) -> usize {
        GridState::path_len(self)
    }
}

/// The grid tour as a search problem: states are (position, residences
/// collected) pairs, and a state is a goal once every residence has been
/// collected.
#[derive(Debug, Clone)]
pub struct GridProblem {
    grid: Arc<Grid>,
}

impl GridProblem {
    pub fn new(grid: Arc<Grid>) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl From<Grid> for GridProblem {
    fn from(grid: Grid) -> Self {
        Self::new(Arc::new(grid))
    }
}

impl SearchProblem for GridProblem {
    type State = GridState;

    fn start_state(&self) -> GridState {
        let start = self.grid.start();
        let visited = match self.grid.residence_index(start) {
            Some(index) => ResidenceSet::new().with(index),
            None => ResidenceSet::new(),
        };
        GridState::new_initial(start, visited)
    }

    fn is_goal_state(&self, state: &GridState) -> bool {
        // The visited set only ever holds residences, so comparing sizes is
        // enough.
        state.visited().len() == self.grid.num_residences()
    }

    fn successors(&self, state: &GridState) -> Vec<Successor<GridState>> {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        Direction::EXPANSION_ORDER
            .into_iter()
            .filter_map(|direction| {
                let target = direction.apply(state.position(), rows, columns)?;
                if self.grid.is_obstacle(target) {
                    return None;
                }
                let visited = match self.grid.residence_index(target) {
                    Some(index) => state.visited().with(index),
                    None => state.visited().clone(),
                };
                let successor = GridState::new_child(state, direction, target, visited);
                Some((successor, direction, 1))
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> usize {
        actions.len()
    }
}
