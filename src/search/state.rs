//! Search states for the grid tour problem.
//!
//! A state is a position together with the residences collected on the way
//! there. Many states share a parent, so both the residence set and the path
//! are cheap to copy: the set is a small bitset and the path is a linked
//! list whose prefix is shared with every other state expanded from the same
//! ancestors.

use crate::search::{Cell, Direction, Plan};
use smallvec::{smallvec, SmallVec};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

const BLOCK_BITS: usize = u64::BITS as usize;

/// A set of residences, stored as a bitset over residence indices (see
/// [`Grid::residence_index`](crate::search::Grid::residence_index)). Grids
/// with up to 64 residences never allocate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResidenceSet {
    blocks: SmallVec<[u64; 1]>,
}

impl ResidenceSet {
    pub fn new() -> Self {
        Self {
            blocks: smallvec![],
        }
    }

    /// Returns a copy of this set with `index` added. The receiver is left
    /// untouched.
    pub fn with(&self, index: usize) -> Self {
        let mut result = self.clone();
        result.insert(index);
        result
    }

    fn insert(&mut self, index: usize) {
        let block = index / BLOCK_BITS;
        if block >= self.blocks.len() {
            self.blocks.resize(block + 1, 0);
        }
        self.blocks[block] |= 1u64 << (index % BLOCK_BITS);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.blocks
            .get(index / BLOCK_BITS)
            .map_or(false, |block| block & (1u64 << (index % BLOCK_BITS)) != 0)
    }

    pub fn len(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| block.count_ones() as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&block| block == 0)
    }
}

struct PathNode {
    action: Direction,
    parent: Option<Rc<PathNode>>,
}

impl PathNode {
    fn iter(&self) -> impl Iterator<Item = &PathNode> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }
}

// Paths can be as long as the grid has cells times residences, so neither
// printing nor dropping a path may recurse along it.
impl Debug for PathNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| node.action))
            .finish()
    }
}

impl Drop for PathNode {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// The key two states are compared by when detecting duplicates: the path
/// is deliberately left out.
pub type GridStateKey = (Cell, ResidenceSet);

#[derive(Debug, Clone)]
pub struct GridState {
    position: Cell,
    visited: ResidenceSet,
    path: Option<Rc<PathNode>>,
    path_len: usize,
}

impl GridState {
    pub fn new_initial(position: Cell, visited: ResidenceSet) -> Self {
        Self {
            position,
            visited,
            path: None,
            path_len: 0,
        }
    }

    /// Create the state reached by taking `action` from `parent`, arriving at
    /// `position` with the residences in `visited` collected.
    pub fn new_child(
        parent: &GridState,
        action: Direction,
        position: Cell,
        visited: ResidenceSet,
    ) -> Self {
        Self {
            position,
            visited,
            path: Some(Rc::new(PathNode {
                action,
                parent: parent.path.clone(),
            })),
            path_len: parent.path_len + 1,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn visited(&self) -> &ResidenceSet {
        &self.visited
    }

    pub fn path_len(&self) -> usize {
        self.path_len
    }

    pub fn key(&self) -> GridStateKey {
        (self.position, self.visited.clone())
    }

    /// The moves taken from the start to reach this state.
    pub fn actions(&self) -> Plan {
        let mut steps: Vec<Direction> = self
            .path
            .iter()
            .flat_map(|node| node.iter().map(|node| node.action))
            .collect();
        steps.reverse();
        Plan::new(steps)
    }
}

impl PartialEq for GridState {
    fn eq(&self, other: &Self) -> bool {
        if self.position != other.position
            || self.visited != other.visited
            || self.path_len != other.path_len
        {
            return false;
        }

        let mut left = self.path.as_ref();
        let mut right = other.path.as_ref();
        loop {
            match (left, right) {
                (Some(a), Some(b)) if Rc::ptr_eq(a, b) => return true,
                (Some(a), Some(b)) if a.action == b.action => {
                    left = a.parent.as_ref();
                    right = b.parent.as_ref();
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Eq for GridState {}
