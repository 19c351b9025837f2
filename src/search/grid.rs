//! The grid environment: dimensions, obstacles, residences and the start
//! cell. A [`Grid`] is built once and never changes afterwards, so a single
//! grid can be shared by any number of searches.
//!
//! Grids are usually read from a text file of the form
//!
//! ```text
//! 3 3
//! 0 0 1
//! 0 -1 0
//! 1 0 0
//! 0 0
//! ```
//!
//! where the first line gives `rows columns`, each of the following `rows`
//! lines gives one row of cells (`-1` obstacle, `0` free, `1` residence) and
//! the last line gives the start cell as `row column`.

use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// A `(row, column)` coordinate on the grid.
pub type Cell = (usize, usize);

const OBSTACLE: i64 = -1;
const FREE: i64 = 0;
const RESIDENCE: i64 = 1;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
    #[error("grid description ended early, expected {0}")]
    MissingLine(&'static str),
    #[error("line {line}: {token:?} is not an integer")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: expected {expected} values, found {found}")]
    WrongValueCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unknown cell value {value}, expected -1, 0 or 1")]
    InvalidCell { line: usize, value: i64 },
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: i64, columns: i64 },
    #[error("start cell ({0}, {1}) lies outside the grid")]
    StartOutOfBounds(i64, i64),
    #[error("start cell ({0}, {1}) is an obstacle")]
    StartOnObstacle(usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    obstacles: HashSet<Cell>,
    /// Residences in row-major order. The position of a residence in this
    /// vector is its index in a [`ResidenceSet`](crate::search::ResidenceSet).
    residences: Vec<Cell>,
    residence_indices: HashMap<Cell, usize>,
    start: Cell,
}

impl Grid {
    /// Build a grid from already parsed parts. No validation happens here:
    /// residences and obstacles are assumed disjoint and everything is
    /// assumed to lie inside the grid.
    pub fn new(
        rows: usize,
        columns: usize,
        obstacles: HashSet<Cell>,
        residences: HashSet<Cell>,
        start: Cell,
    ) -> Self {
        let residences: Vec<Cell> = residences.into_iter().sorted().collect();
        let residence_indices = residences
            .iter()
            .enumerate()
            .map(|(index, &cell)| (cell, index))
            .collect();
        Self {
            rows,
            columns,
            obstacles,
            residences,
            residence_indices,
            start,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (line_number, line) = lines.next().ok_or(GridError::MissingLine("dimensions"))?;
        let (rows, columns) = parse_pair(line_number, line)?;
        if rows <= 0 || columns <= 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        let (rows, columns) = (rows as usize, columns as usize);

        let mut obstacles = HashSet::new();
        let mut residences = HashSet::new();
        for row in 0..rows {
            let (line_number, line) = lines.next().ok_or(GridError::MissingLine("grid row"))?;
            let values = parse_integers(line_number, line)?;
            if values.len() != columns {
                return Err(GridError::WrongValueCount {
                    line: line_number,
                    expected: columns,
                    found: values.len(),
                });
            }
            for (column, value) in values.into_iter().enumerate() {
                match value {
                    OBSTACLE => {
                        obstacles.insert((row, column));
                    }
                    RESIDENCE => {
                        residences.insert((row, column));
                    }
                    FREE => {}
                    value => {
                        return Err(GridError::InvalidCell {
                            line: line_number,
                            value,
                        })
                    }
                }
            }
        }

        let (line_number, line) = lines.next().ok_or(GridError::MissingLine("start cell"))?;
        let (start_row, start_column) = parse_pair(line_number, line)?;
        if start_row < 0
            || start_column < 0
            || start_row as usize >= rows
            || start_column as usize >= columns
        {
            return Err(GridError::StartOutOfBounds(start_row, start_column));
        }
        let start = (start_row as usize, start_column as usize);
        if obstacles.contains(&start) {
            return Err(GridError::StartOnObstacle(start.0, start.1));
        }

        debug!(
            rows = rows,
            columns = columns,
            obstacles = obstacles.len(),
            residences = residences.len(),
            "parsed grid"
        );
        Ok(Self::new(rows, columns, obstacles, residences, start))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn residences(&self) -> &[Cell] {
        &self.residences
    }

    pub fn num_residences(&self) -> usize {
        self.residences.len()
    }

    pub fn num_obstacles(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    /// The index of `cell` among the residences, or `None` if it is not a
    /// residence.
    pub fn residence_index(&self, cell: Cell) -> Option<usize> {
        self.residence_indices.get(&cell).copied()
    }
}

impl Display for Grid {
    /// Writes the grid in the same format [`Grid::from_text`] reads.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.columns)?;
        for row in 0..self.rows {
            let line = (0..self.columns)
                .map(|column| {
                    let cell = (row, column);
                    if self.is_obstacle(cell) {
                        OBSTACLE
                    } else if self.residence_index(cell).is_some() {
                        RESIDENCE
                    } else {
                        FREE
                    }
                })
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        write!(f, "{} {}", self.start.0, self.start.1)
    }
}

fn parse_integers(line_number: usize, line: &str) -> Result<Vec<i64>, GridError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| GridError::InvalidInteger {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_pair(line_number: usize, line: &str) -> Result<(i64, i64), GridError> {
    let values = parse_integers(line_number, line)?;
    match values[..] {
        [first, second] => Ok((first, second)),
        _ => Err(GridError::WrongValueCount {
            line: line_number,
            expected: 2,
            found: values.len(),
        }),
    }
}
