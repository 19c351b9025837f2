use crate::search::{Cell, Direction, Grid, Plan};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: {action} from {from:?} leaves the grid")]
    LeavesGrid {
        step: usize,
        action: Direction,
        from: Cell,
    },
    #[error("step {step}: {action} moves onto the obstacle at {cell:?}")]
    HitsObstacle {
        step: usize,
        action: Direction,
        cell: Cell,
    },
    #[error("plan ends at {end:?} without visiting residences {missing:?}")]
    MissingResidences { end: Cell, missing: Vec<Cell> },
}

/// Replay `plan` from the start cell of `grid`, checking that every move is
/// legal and that every residence is visited along the way.
pub fn validate(plan: &Plan, grid: &Grid) -> Result<(), ValidationError> {
    let mut position = grid.start();
    let mut visited: HashSet<Cell> = HashSet::new();
    if grid.residence_index(position).is_some() {
        visited.insert(position);
    }

    for (index, &action) in plan.iter().enumerate() {
        let step = index + 1;
        let target = action
            .apply(position, grid.rows(), grid.columns())
            .ok_or(ValidationError::LeavesGrid {
                step,
                action,
                from: position,
            })?;
        if grid.is_obstacle(target) {
            return Err(ValidationError::HitsObstacle {
                step,
                action,
                cell: target,
            });
        }
        position = target;
        if grid.residence_index(position).is_some() {
            visited.insert(position);
        }
    }

    let missing: Vec<Cell> = grid
        .residences()
        .iter()
        .filter(|residence| !visited.contains(residence))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingResidences {
            end: position,
            missing,
        });
    }

    Ok(())
}
