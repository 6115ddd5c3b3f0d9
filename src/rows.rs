use serde::{Deserialize, Serialize};

use crate::{DiffChar, DiffOp, Ops};

/// What a single side of a [`DiffRow`] shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Equal,
    Insert,
    Delete,
    /// Placeholder opposite an unpaired insert or delete
    Empty,
}

impl From<Ops> for LineKind {
    fn from(op: Ops) -> Self {
        match op {
            Ops::Equal => Self::Equal,
            Ops::Insert => Self::Insert,
            Ops::Delete => Self::Delete,
        }
    }
}

/// One half of a side-by-side row.
/// A blank side has no line number, empty content and [`LineKind::Empty`].
///
/// The missing line number serializes as `"line": null`, not as a `-1` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub(crate) line: Option<usize>,
    pub(crate) content: String,
    pub(crate) kind: LineKind,
}

impl Side {
    fn new(line: Option<usize>, content: String, kind: LineKind) -> Self {
        Self {
            line,
            content,
            kind,
        }
    }

    fn blank() -> Self {
        Self::new(None, String::new(), LineKind::Empty)
    }

    /// 1-based line number, `None` for a blank side
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Empty
    }
}

/// A display row of a side-by-side diff. At least one side is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRow {
    pub(crate) left: Side,
    pub(crate) right: Side,
    pub(crate) is_change_block: bool,
}

impl DiffRow {
    fn equal(op: DiffOp) -> Self {
        let (left_line, right_line) = (op.left_line(), op.right_line());
        let content = op.into_content();

        Self {
            left: Side::new(left_line, content.clone(), LineKind::Equal),
            right: Side::new(right_line, content, LineKind::Equal),
            is_change_block: false,
        }
    }

    fn inserted(op: DiffOp) -> Self {
        let line = op.right_line();
        Self {
            left: Side::blank(),
            right: Side::new(line, op.into_content(), LineKind::Insert),
            is_change_block: false,
        }
    }

    fn deleted(op: DiffOp) -> Self {
        let line = op.left_line();
        Self {
            left: Side::new(line, op.into_content(), LineKind::Delete),
            right: Side::blank(),
            is_change_block: false,
        }
    }

    fn change(delete: DiffOp, insert: DiffOp) -> Self {
        let (left_line, right_line) = (delete.left_line(), insert.right_line());
        Self {
            left: Side::new(left_line, delete.into_content(), LineKind::Delete),
            right: Side::new(right_line, insert.into_content(), LineKind::Insert),
            is_change_block: true,
        }
    }

    pub fn left(&self) -> &Side {
        &self.left
    }

    pub fn right(&self) -> &Side {
        &self.right
    }

    /// `true` when this row pairs a deleted line with the insert right after it
    pub fn is_change_block(&self) -> bool {
        self.is_change_block
    }
}

/// Regroups a line edit script into side-by-side rows with a single forward pass.
///
/// A `Delete` immediately followed by an `Insert` becomes one change block row. Pairing is
/// purely positional: a run of deletes followed by a run of inserts only pairs across the
/// boundary where they touch, lines are never matched by similarity.
pub(crate) fn project(ops: Vec<DiffOp>) -> Vec<DiffRow> {
    let mut rows = Vec::with_capacity(ops.len());
    let mut ops = ops.into_iter().peekable();

    while let Some(op) = ops.next() {
        let row = match op.op() {
            Ops::Delete => match ops.next_if(|next| next.op() == Ops::Insert) {
                Some(insert) => DiffRow::change(op, insert),
                None => DiffRow::deleted(op),
            },
            Ops::Insert => DiffRow::inserted(op),
            Ops::Equal => DiffRow::equal(op),
        };

        rows.push(row);
    }

    rows
}

/// A run of characters sharing the same op
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub(crate) op: Ops,
    pub(crate) text: String,
}

impl Span {
    pub fn new(op: Ops, text: &str) -> Self {
        Self {
            op,
            text: text.to_string(),
        }
    }

    pub fn op(&self) -> Ops {
        self.op
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Inline highlighting of a change block.
///
/// The left side keeps the equal and deleted characters of the character diff, the right
/// side keeps the equal and inserted ones. Adjacent characters with the same op are merged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlight {
    pub(crate) left: Vec<Span>,
    pub(crate) right: Vec<Span>,
}

impl Highlight {
    pub fn from_chars(chars: &[DiffChar]) -> Self {
        let mut hl = Self::default();
        for c in chars {
            match c.op() {
                Ops::Equal => {
                    push_char(&mut hl.left, c);
                    push_char(&mut hl.right, c);
                }
                Ops::Delete => push_char(&mut hl.left, c),
                Ops::Insert => push_char(&mut hl.right, c),
            }
        }

        hl
    }

    pub fn left(&self) -> &[Span] {
        &self.left
    }

    pub fn right(&self) -> &[Span] {
        &self.right
    }
}

fn push_char(spans: &mut Vec<Span>, c: &DiffChar) {
    match spans.last_mut() {
        Some(last) if last.op == c.op() => last.text.push(c.value()),
        _ => spans.push(Span {
            op: c.op(),
            text: c.value().to_string(),
        }),
    }
}

/// Row counts of a side-by-side diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffStats {
    pub equal: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        rows.iter().fold(Self::default(), |mut stats, row| {
            if row.is_change_block() {
                stats.modified += 1;
            } else if row.left().is_blank() {
                stats.inserted += 1;
            } else if row.right().is_blank() {
                stats.deleted += 1;
            } else {
                stats.equal += 1;
            }

            stats
        })
    }

    /// No row carries a change
    pub fn is_identical(&self) -> bool {
        self.inserted + self.deleted + self.modified == 0
    }
}

/// The rows of a comparison together with the inline highlights of its change blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub(crate) rows: Vec<DiffRow>,
    // aligned with `rows`
    pub(crate) highlights: Vec<Option<Highlight>>,
}

impl Comparison {
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    /// Each row with its highlight, `None` for rows that are not change blocks or when
    /// highlighting is switched off
    pub fn iter(&self) -> impl Iterator<Item = (&DiffRow, Option<&Highlight>)> {
        self.rows
            .iter()
            .zip(self.highlights.iter().map(Option::as_ref))
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::from_rows(&self.rows)
    }

    pub fn is_identical(&self) -> bool {
        self.stats().is_identical()
    }
}
