use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::{errors::Error, Ops};

/// One step of a backtracked edit script.
/// `left` and `right` are 0-based indices into the inputs, present only on the side the step references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) op: Ops,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl Step {
    fn equal(left: usize, right: usize) -> Self {
        Self {
            op: Ops::Equal,
            left: Some(left),
            right: Some(right),
        }
    }

    fn insert(right: usize) -> Self {
        Self {
            op: Ops::Insert,
            left: None,
            right: Some(right),
        }
    }

    fn delete(left: usize) -> Self {
        Self {
            op: Ops::Delete,
            left: Some(left),
            right: None,
        }
    }
}

/// Resource limits for a single run, resolved from [`TextDiff`] settings at call time.
///
/// [`TextDiff`]: crate::TextDiff
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    pub(crate) max_cells: Option<usize>,
    pub(crate) started: DateTime<Utc>,
    pub(crate) deadline: Option<DateTime<Utc>>,
}

impl Budget {
    #[cfg(test)]
    pub(crate) fn unlimited() -> Self {
        Self {
            max_cells: None,
            started: Utc::now(),
            deadline: None,
        }
    }

    fn check_cells(&self, rows: usize, cols: usize) -> Result<(), Error> {
        let cells = rows.saturating_mul(cols);
        if let Some(limit) = self.max_cells {
            if cells > limit {
                warn!(cells, limit, "refusing diff, table exceeds cell cap");
                return Err(Error::InputTooLarge { cells, limit });
            }
        }

        Ok(())
    }

    fn check_deadline(&self) -> Result<(), Error> {
        if let Some(deadline) = self.deadline {
            let now = Utc::now();
            if now >= deadline {
                let elapsed_ms = (now - self.started).num_milliseconds();
                warn!(elapsed_ms, "diff deadline exceeded");
                return Err(Error::DeadlineExceeded { elapsed_ms });
            }
        }

        Ok(())
    }
}

/// The `(n + 1) x (m + 1)` LCS length table, stored row major.
/// Lengths never exceed the shorter input so `u32` cells are enough for anything that fits the cap.
struct Table {
    cols: usize,
    cells: Vec<u32>,
}

impl Table {
    fn fill<T, F>(old: &[T], new: &[T], eq: &F, budget: &Budget) -> Result<Self, Error>
    where
        F: Fn(&T, &T) -> bool,
    {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        budget.check_cells(rows, cols)?;

        debug!(old = old.len(), new = new.len(), "filling lcs table");

        let mut cells = vec![0_u32; rows * cols];
        for i in 1..rows {
            budget.check_deadline()?;

            for j in 1..cols {
                let idx = i * cols + j;
                cells[idx] = if eq(&old[i - 1], &new[j - 1]) {
                    cells[idx - cols - 1] + 1
                } else {
                    cells[idx - cols].max(cells[idx - 1])
                };
            }
        }

        Ok(Self { cols, cells })
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}

/// Computes the edit script turning `old` into `new` with the classic LCS dynamic program.
///
/// Backtracking starts at the end of both inputs and, on a tie between the two directions,
/// takes the insert first. Since the script is collected back to front, tied deletes end up
/// *before* their inserts in the returned, forward ordered, script.
///
/// Costs O(n * m) time and memory.
pub(crate) fn script_by<T, F>(
    old: &[T],
    new: &[T],
    eq: F,
    budget: &Budget,
) -> Result<Vec<Step>, Error>
where
    F: Fn(&T, &T) -> bool,
{
    // Trivial shapes, same output the table would give
    if old.is_empty() {
        return Ok((0..new.len()).map(Step::insert).collect());
    }

    if new.is_empty() {
        return Ok((0..old.len()).map(Step::delete).collect());
    }

    if old.len() == new.len() && old.iter().zip(new).all(|(o, n)| eq(o, n)) {
        return Ok((0..old.len()).map(|i| Step::equal(i, i)).collect());
    }

    let table = Table::fill(old, new, &eq, budget)?;

    let mut steps = Vec::with_capacity(old.len() + new.len());
    let (mut i, mut j) = (old.len(), new.len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && eq(&old[i - 1], &new[j - 1]) {
            steps.push(Step::equal(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            steps.push(Step::insert(j - 1));
            j -= 1;
        } else {
            steps.push(Step::delete(i - 1));
            i -= 1;
        }
    }

    steps.reverse();

    Ok(steps)
}

#[inline]
pub(crate) fn script<T: PartialEq>(
    old: &[T],
    new: &[T],
    budget: &Budget,
) -> Result<Vec<Step>, Error> {
    script_by(old, new, |a, b| a == b, budget)
}
