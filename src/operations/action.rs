use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of edit an `Operation` describes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Equal,
    Insert,
    Delete,
    Replace,
    None,
}

impl Action {
    /// Classify the gap in front of a matching block by whether the block
    /// starts right at the current position in each sequence.
    #[must_use]
    pub fn for_gap(starts_at_old_position: bool, starts_at_new_position: bool) -> Self {
        match (starts_at_old_position, starts_at_new_position) {
            (true, true) => Action::None,
            (true, false) => Action::Insert,
            (false, true) => Action::Delete,
            (false, false) => Action::Replace,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Equal => write!(f, "equal"),
            Action::Insert => write!(f, "insert"),
            Action::Delete => write!(f, "delete"),
            Action::Replace => write!(f, "replace"),
            Action::None => write!(f, "none"),
        }
    }
}
