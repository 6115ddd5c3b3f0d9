use chrono::{TimeDelta, Utc};
use tracing::{debug, warn};

use crate::{
    errors::Error,
    html::HtmlConfig,
    lcs::{self, Budget},
    rows::{self, Comparison, Highlight},
    Chars, DiffChar, DiffOp, DiffRow, Granularity, LineKind, Lines, Ops, Side, Span,
};

pub struct TextDiff {
    /// Upper bound on the `(n + 1) * (m + 1)` cells of the LCS table, `None` for no bound.
    /// Defaults to 16_000_000 (two texts of ~4000 lines).
    max_cells: Option<usize>,
    /// A timeout in num milliseconds, `None` (the default) means no deadline
    timeout: Option<u32>,
    /// Attach character level highlights to change blocks in [`TextDiff::compare`]. Defaults to `true`
    highlight_changes: bool,
}

impl Default for TextDiff {
    fn default() -> Self {
        Self {
            max_cells: Some(16_000_000),
            timeout: None,
            highlight_changes: true,
        }
    }
}

impl TextDiff {
    // returns the configured cell cap
    fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Caps the size of the LCS table. Inputs needing more cells fail with [`Error::InputTooLarge`]
    /// instead of allocating, `None` removes the cap.
    ///
    /// Defaults to `16_000_000` cells
    pub fn set_max_cells(&mut self, max_cells: Option<usize>) {
        self.max_cells = max_cells;
    }

    fn timeout(&self) -> Option<i64> {
        self.timeout.map(|t| t as i64)
    }

    /// Set a timeout in number of `milliseconds`. Checked once per table row, an expired
    /// deadline fails with [`Error::DeadlineExceeded`].
    ///
    /// Defaults to `None`, no deadline
    pub fn set_timeout(&mut self, tout: Option<u32>) {
        self.timeout = tout;
    }

    fn highlight_changes(&self) -> bool {
        self.highlight_changes
    }

    /// Enables or disables character level highlighting of change blocks in [`TextDiff::compare`]
    pub fn set_highlight_changes(&mut self, highlight: bool) {
        self.highlight_changes = highlight;
    }

    // limits for one run, the deadline starts now
    pub(crate) fn budget(&self) -> Budget {
        let started = Utc::now();
        Budget {
            max_cells: self.max_cells(),
            started,
            deadline: self
                .timeout()
                .and_then(|t| started.checked_add_signed(TimeDelta::milliseconds(t))),
        }
    }

    fn diff_internal<G: Granularity>(&self, old: &str, new: &str) -> Result<Vec<G::Output>, Error> {
        let old = G::split(old);
        let new = G::split(new);

        let steps = lcs::script(&old, &new, &self.budget())?;

        Ok(steps
            .into_iter()
            .map(|step| {
                G::emit(
                    step.op,
                    step.left.map(|idx| (idx, old[idx])),
                    step.right.map(|idx| (idx, new[idx])),
                )
            })
            .collect())
    }
}

// Public APIs
impl TextDiff {
    /// Create a new instance of the struct with default settings
    /// # Example
    /// ```
    /// use lcs_diff_rs::{TextDiff, Error};
    ///
    /// # fn main() -> Result<(), Error> {
    /// let mut differ = TextDiff::new();
    /// // refuse anything larger than ~1000 x 1000 lines
    /// differ.set_max_cells(Some(1_000_000));
    /// let ops = differ.diff_lines("a\nb", "a\nc")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the differences between two texts at the given [`Granularity`].
    ///
    /// # Example
    /// ```
    /// # use lcs_diff_rs::{TextDiff, Error, Lines, Chars};
    /// # fn main() -> Result<(), Error> {
    /// let differ = TextDiff::new();
    /// let lines = differ.diff::<Lines>("one\ntwo", "one\n2")?;
    /// let chars = differ.diff::<Chars>("two", "too")?;
    /// assert_eq!(3, lines.len());
    /// assert_eq!(4, chars.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn diff<G: Granularity>(&self, old: &str, new: &str) -> Result<Vec<G::Output>, Error> {
        self.diff_internal::<G>(old, new)
    }

    /// Line level edit script of two texts, split on `\n`. Every op carries the 1-based line
    /// numbers of the side(s) it references.
    ///
    /// When both directions of the LCS table tie, the backtrack takes the insert first, so in
    /// the returned order a tied delete comes before its insert.
    ///
    /// # Example
    /// ```
    /// # use lcs_diff_rs::{TextDiff, Error, DiffOp};
    /// # fn main() -> Result<(), Error> {
    /// let differ = TextDiff::new();
    /// let ops = differ.diff_lines("a\nb", "b\na")?;
    /// assert_eq!(
    ///     vec![DiffOp::delete("a", 1), DiffOp::equal("b", 2, 1), DiffOp::insert("a", 2)],
    ///     ops
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn diff_lines(&self, old: &str, new: &str) -> Result<Vec<DiffOp>, Error> {
        debug!(old = old.len(), new = new.len(), "diffing lines");
        self.diff::<Lines>(old, new)
    }

    /// Character level edit script of two strings. Meant for the two sides of a change block,
    /// not whole documents.
    pub fn diff_chars(&self, old: &str, new: &str) -> Result<Vec<DiffChar>, Error> {
        self.diff::<Chars>(old, new)
    }

    /// Regroups a line edit script into side-by-side rows, pairing each `Delete` with an
    /// immediately following `Insert` into a change block.
    pub fn project_rows(ops: Vec<DiffOp>) -> Vec<DiffRow> {
        rows::project(ops)
    }

    /// Character highlight of a change block row, `None` for any other row
    pub fn highlight(&self, row: &DiffRow) -> Result<Option<Highlight>, Error> {
        if !row.is_change_block() {
            return Ok(None);
        }

        let chars = self.diff_chars(row.left().content(), row.right().content())?;

        Ok(Some(Highlight::from_chars(&chars)))
    }

    /// Line diff, row projection and, if enabled, change block highlighting in one go.
    ///
    /// Only the line table is bound by the cell cap and deadline as a hard error. A change block
    /// whose character diff exceeds them is kept without a highlight.
    ///
    /// # Example
    /// ```
    /// # use lcs_diff_rs::{TextDiff, Error};
    /// # fn main() -> Result<(), Error> {
    /// let differ = TextDiff::new();
    /// let cmp = differ.compare("Hello World\nLine B", "Hello React\nLine B")?;
    ///
    /// assert_eq!(2, cmp.rows().len());
    /// assert!(cmp.rows()[0].is_change_block());
    /// assert_eq!(1, cmp.stats().modified);
    /// # Ok(())
    /// # }
    /// ```
    pub fn compare(&self, old: &str, new: &str) -> Result<Comparison, Error> {
        let rows = Self::project_rows(self.diff_lines(old, new)?);

        let highlights = if self.highlight_changes() {
            // A limit tripped by one long line drops that row's highlight, not the whole comparison
            rows.iter()
                .enumerate()
                .map(|(idx, row)| {
                    self.highlight(row).unwrap_or_else(|e| {
                        warn!(row = idx, error = %e, "skipping change block highlight");
                        None
                    })
                })
                .collect::<Vec<_>>()
        } else {
            vec![None; rows.len()]
        };

        Ok(Comparison { rows, highlights })
    }

    /// The left text's lines, rebuilt from the `Equal` and `Delete` ops
    pub fn diff_text_left(ops: &[DiffOp]) -> Vec<&str> {
        ops.iter()
            .filter(|op| op.op() != Ops::Insert)
            .map(DiffOp::content)
            .collect()
    }

    /// The right text's lines, rebuilt from the `Equal` and `Insert` ops
    pub fn diff_text_right(ops: &[DiffOp]) -> Vec<&str> {
        ops.iter()
            .filter(|op| op.op() != Ops::Delete)
            .map(DiffOp::content)
            .collect()
    }

    /// Given an edit script, measure its Levenshtein distance in number of inserted, deleted or substituted units.
    /// Works for both line ops and char ops, e.g. `ops.iter().map(DiffOp::op)`.
    pub fn diff_levenshtein<I: IntoIterator<Item = Ops>>(ops: I) -> usize {
        let mut levenshtein = 0;
        let mut insert = 0;
        let mut delete = 0;

        ops.into_iter().for_each(|op| match op {
            Ops::Insert => insert += 1,
            Ops::Delete => delete += 1,
            Ops::Equal => {
                // A deletion and an insertion is one substitution.
                levenshtein += insert.max(delete);
                insert = 0;
                delete = 0;
            }
        });

        levenshtein + insert.max(delete)
    }

    /// Renders a comparison as a side-by-side HTML `<table>`, one `<tr>` per row with a line
    /// number cell and a content cell for each side.
    ///
    /// # Example
    /// ```
    /// # use lcs_diff_rs::{TextDiff, Error, HtmlConfig};
    /// # fn main() -> Result<(), Error> {
    /// let differ = TextDiff::new();
    /// let cmp = differ.compare("a < b", "a > b")?;
    /// let html = differ.diff_pretty_html(&cmp, &HtmlConfig::new());
    ///
    /// assert!(html.contains("<del>&lt;</del>"));
    /// assert!(html.contains("<ins>&gt;</ins>"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// Check out [`HtmlConfig`] options for ways to control the generated html.
    pub fn diff_pretty_html(&self, cmp: &Comparison, html_cfg: &HtmlConfig) -> String {
        let body = cmp
            .iter()
            .map(|(row, hl)| html_row(row, hl, html_cfg))
            .collect::<Vec<_>>()
            .join("");

        format!(
            "<table{}><tbody>{body}</tbody></table>",
            attr("class", html_cfg.table_class())
        )
    }
}

fn html_row(row: &DiffRow, hl: Option<&Highlight>, cfg: &HtmlConfig) -> String {
    let class = if row.is_change_block() {
        cfg.change_class()
    } else {
        None
    };

    format!(
        "<tr{}>{}{}</tr>",
        attr("class", class),
        html_side(row.left(), hl.map(Highlight::left), cfg),
        html_side(row.right(), hl.map(Highlight::right), cfg),
    )
}

fn html_side(side: &Side, spans: Option<&[Span]>, cfg: &HtmlConfig) -> String {
    if side.is_blank() {
        return format!(
            "<td{}></td><td{}></td>",
            attr("class", cfg.line_number_class()),
            attr("class", cfg.blank_class())
        );
    }

    let (class, style) = match side.kind() {
        LineKind::Insert => (cfg.insert_class(), cfg.insert_style()),
        LineKind::Delete => (cfg.delete_class(), cfg.delete_style()),
        _ => (cfg.equality_class(), cfg.equality_style()),
    };

    let content = match spans {
        Some(spans) => spans
            .iter()
            .map(|span| {
                let txt = escape(span.text());
                match span.op() {
                    Ops::Insert => format!("<{0}>{txt}</{0}>", cfg.insert_tag()),
                    Ops::Delete => format!("<{0}>{txt}</{0}>", cfg.delete_tag()),
                    Ops::Equal => txt,
                }
            })
            .collect::<Vec<_>>()
            .join(""),
        None => escape(side.content()),
    };

    format!(
        "<td{}>{}</td><td{}{}>{content}</td>",
        attr("class", cfg.line_number_class()),
        side.line().map(|l| l.to_string()).unwrap_or_default(),
        attr("class", class),
        attr("style", style),
    )
}

fn attr(name: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!(" {name}=\"{v}\""))
        .unwrap_or_default()
}

fn escape(txt: &str) -> String {
    txt.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
