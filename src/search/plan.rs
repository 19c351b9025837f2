//! A plan is a sequence of moves that takes the agent from the start cell
//! through every residence. This module provides the [`Plan`] struct, which
//! represents a plan.

use crate::search::Direction;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown action label {label:?} on line {line}")]
    UnknownAction { label: String, line: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Direction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Parse a plan from whitespace separated action labels. Everything after
    /// a `;` on a line is a comment.
    pub fn from_text(text: &str) -> Result<Self, PlanError> {
        let mut steps = vec![];
        for (index, line) in text.lines().enumerate() {
            let content = line.split(';').next().unwrap_or_default();
            for label in content.split_whitespace() {
                let step =
                    Direction::from_str(label).map_err(|_| PlanError::UnknownAction {
                        label: label.to_string(),
                        line: index + 1,
                    })?;
                steps.push(step);
            }
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl From<Vec<Direction>> for Plan {
    fn from(steps: Vec<Direction>) -> Self {
        Self::new(steps)
    }
}

impl IntoIterator for Plan {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn from_text_works() {
        let plan_text = r#"RIGHT
        RIGHT DOWN
        DOWN
        ; cost = 4 (unit cost)
        LEFT ; trailing comment
        "#;

        let plan = Plan::from_text(plan_text).unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!(plan.steps(), &[Right, Right, Down, Down, Left]);
    }

    #[test]
    fn from_text_rejects_unknown_labels() {
        let result = Plan::from_text("UP\nUP\nSIDEWAYS\n");
        match result {
            Err(PlanError::UnknownAction { label, line }) => {
                assert_eq!(label, "SIDEWAYS");
                assert_eq!(line, 3);
            }
            other => panic!("expected unknown action error, got {:?}", other),
        }
    }

    #[test]
    fn display_prints_one_label_per_line() {
        let plan = Plan::new(vec![Up, Left, Down]);
        assert_eq!(plan.to_string(), "UP\nLEFT\nDOWN");
        assert_eq!(Plan::from_text(&plan.to_string()).unwrap(), plan);
        assert_eq!(Plan::empty().to_string(), "");
    }
}
