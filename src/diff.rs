use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Enum representing the different ops of diff
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Ops {
    Delete = -1,
    Insert,
    Equal,
}

/// A single step of a line level edit script.
///
/// `left_line` and `right_line` are 1-based positions in the respective input text and are
/// only present on the side the op references:
/// - `(Ops::Equal, "foo", Some(3), Some(5))` line 3 on the left is line 5 on the right
/// - `(Ops::Delete, "foo", Some(3), None)` line 3 of the left is gone
/// - `(Ops::Insert, "foo", None, Some(5))` line 5 of the right is new
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOp {
    pub(crate) op: Ops,
    pub(crate) content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) left_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) right_line: Option<usize>,
}

impl Display for DiffOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {})", self.op(), self.content())
    }
}

impl DiffOp {
    /// A line present on both sides
    pub fn equal(content: &str, left_line: usize, right_line: usize) -> Self {
        Self {
            op: Ops::Equal,
            content: content.to_string(),
            left_line: Some(left_line),
            right_line: Some(right_line),
        }
    }

    /// A line only present on the right
    pub fn insert(content: &str, right_line: usize) -> Self {
        Self {
            op: Ops::Insert,
            content: content.to_string(),
            left_line: None,
            right_line: Some(right_line),
        }
    }

    /// A line only present on the left
    pub fn delete(content: &str, left_line: usize) -> Self {
        Self {
            op: Ops::Delete,
            content: content.to_string(),
            left_line: Some(left_line),
            right_line: None,
        }
    }

    // returns the operation of the current diff
    pub fn op(&self) -> Ops {
        self.op
    }

    // returns the line content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn left_line(&self) -> Option<usize> {
        self.left_line
    }

    pub fn right_line(&self) -> Option<usize> {
        self.right_line
    }

    pub(crate) fn into_content(self) -> String {
        self.content
    }
}

/// A single character of an intra-line diff, produced when highlighting a change block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffChar {
    pub(crate) op: Ops,
    pub(crate) value: char,
}

impl Display for DiffChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {})", self.op(), self.value())
    }
}

impl DiffChar {
    pub fn new(op: Ops, value: char) -> Self {
        Self { op, value }
    }

    pub fn op(&self) -> Ops {
        self.op
    }

    pub fn value(&self) -> char {
        self.value
    }
}
