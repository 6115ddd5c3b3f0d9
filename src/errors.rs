use thiserror::Error;

/// Errors raised while computing a diff.
///
/// The diff itself is total: any two texts produce a result. The variants here
/// only surface the resource limits a host can configure on [`TextDiff`], so a
/// caller can tell the user the input was refused instead of showing a partial diff.
///
/// [`TextDiff`]: crate::TextDiff
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `(n + 1) * (m + 1)` table would exceed the configured cell cap
    #[error("input too large: diff table needs {cells} cells, limit is {limit}")]
    InputTooLarge { cells: usize, limit: usize },

    /// The configured timeout elapsed while filling the table
    #[error("diff deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded { elapsed_ms: i64 },
}
