/// Three residence-free rows; the start cell is trivially a goal.
pub const OPEN_GRID_TEXT: &str = "3 3
0 0 0
0 0 0
0 0 0
0 0
";

/// Residences in two opposite corners, start in a third. The shortest tour
/// has 6 moves.
pub const CORNERS_GRID_TEXT: &str = "3 3
0 0 1
0 0 0
1 0 0
0 0
";

/// Two residences on the right edge, with a wall in the middle row.
pub const SMALL_GRID_TEXT: &str = "3 4
0 0 0 1
0 -1 -1 0
0 0 0 1
2 0
";

pub const SMALL_GRID_OPTIMAL_LENGTH: usize = 5;

/// Both residences sit at the end of dead-end corridors, so any tour walks
/// back over cells it has already visited, this time with one more residence
/// collected.
pub const CORRIDOR_GRID_TEXT: &str = "3 5
1 -1 0 -1 1
0 -1 0 -1 0
0 0 0 0 0
0 2
";

pub const CORRIDOR_OPTIMAL_LENGTH: usize = 14;

/// A single cell which is both the start and the only residence.
pub const SINGLE_CELL_GRID_TEXT: &str = "1 1
1
0 0
";

/// The residence in the top right corner is walled off.
pub const UNREACHABLE_GRID_TEXT: &str = "3 3
0 -1 1
0 -1 -1
1 0 0
0 0
";

/// A single row with the start at the left end and the only residence at the
/// right end, so the one tour walks the full length of the row.
pub fn long_corridor_grid(columns: usize) -> crate::search::Grid {
    crate::search::Grid::new(
        1,
        columns,
        std::collections::HashSet::new(),
        std::collections::HashSet::from([(0, columns - 1)]),
        (0, 0),
    )
}

pub const LONG_CORRIDOR_COLUMNS: usize = 100_000;
