use crate::search::Cell;
use strum_macros::{Display, EnumIter, EnumString};

/// A unit move on the grid. The textual form of each variant is the action
/// label used in plan files and printed plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The order in which successors are generated. Only affects tie
    /// breaking in DFS and BFS.
    pub const EXPANSION_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Apply the move to `cell` on a grid of the given dimensions, returning
    /// `None` if the move would leave the grid.
    pub fn apply(self, cell: Cell, rows: usize, columns: usize) -> Option<Cell> {
        let (x, y) = cell;
        match self {
            Direction::Up if x > 0 => Some((x - 1, y)),
            Direction::Down if x + 1 < rows => Some((x + 1, y)),
            Direction::Left if y > 0 => Some((x, y - 1)),
            Direction::Right if y + 1 < columns => Some((x, y + 1)),
            _ => None,
        }
    }
}
