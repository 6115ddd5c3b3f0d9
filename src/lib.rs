//! Line and character level diffing over a longest common subsequence table, with a
//! side-by-side row model that pairs replaced lines into change blocks.
//!
//! ```
//! use lcs_diff_rs::{Error, TextDiff};
//!
//! # fn main() -> Result<(), Error> {
//! let differ = TextDiff::new();
//! let cmp = differ.compare("A\nB\nC", "A\nC")?;
//!
//! for (row, _) in cmp.iter() {
//!     println!("{:>3} {:<10} | {:>3} {}",
//!         row.left().line().map(|l| l.to_string()).unwrap_or_default(),
//!         row.left().content(),
//!         row.right().line().map(|l| l.to_string()).unwrap_or_default(),
//!         row.right().content(),
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod differ;
pub mod errors;
pub mod fuzz;
pub mod html;
mod lcs;
pub mod rows;
pub mod traits;

pub use diff::{DiffChar, DiffOp, Ops};
pub use differ::TextDiff;
pub use errors::Error;
pub use html::HtmlConfig;
pub use rows::{Comparison, DiffRow, DiffStats, Highlight, LineKind, Side, Span};
pub use traits::{Chars, Granularity, Lines};
