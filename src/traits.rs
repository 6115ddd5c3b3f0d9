use crate::{DiffChar, DiffOp, Ops};

/// The unit a diff is computed over.
///
/// Both granularities run through the same LCS routine, so they share the exact same
/// tie-break behaviour. [`Lines`] yields [`DiffOp`]s with 1-based line numbers, [`Chars`]
/// yields position-free [`DiffChar`]s.
pub trait Granularity {
    type Unit<'a>: PartialEq + Copy;
    type Output;

    /// Splits a text into comparable units
    fn split(text: &str) -> Vec<Self::Unit<'_>>;

    /// Builds one output item from an op and the 0-based `(position, unit)` on each side it references
    fn emit(
        op: Ops,
        old: Option<(usize, Self::Unit<'_>)>,
        new: Option<(usize, Self::Unit<'_>)>,
    ) -> Self::Output;
}

/// Line granularity. Texts are split on `\n` only, so a `\r` from `\r\n` input stays
/// part of the line content. An empty text has no lines at all.
pub struct Lines;

/// Character granularity, over unicode scalar values.
pub struct Chars;

impl Granularity for Lines {
    type Unit<'a> = &'a str;
    type Output = DiffOp;

    fn split(text: &str) -> Vec<&str> {
        if text.is_empty() {
            return Vec::new();
        }

        text.split('\n').collect()
    }

    fn emit(op: Ops, old: Option<(usize, &str)>, new: Option<(usize, &str)>) -> DiffOp {
        // Equal lines are identical on both sides, either one will do
        let content = old.or(new).map(|(_, line)| line).unwrap_or_default();

        DiffOp {
            op,
            content: content.to_string(),
            left_line: old.map(|(idx, _)| idx + 1),
            right_line: new.map(|(idx, _)| idx + 1),
        }
    }
}

impl Granularity for Chars {
    type Unit<'a> = char;
    type Output = DiffChar;

    fn split(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn emit(op: Ops, old: Option<(usize, char)>, new: Option<(usize, char)>) -> DiffChar {
        DiffChar {
            op,
            value: old.or(new).map(|(_, c)| c).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Chars, Granularity, Lines};
    use crate::{DiffChar, DiffOp, Ops};

    #[test]
    fn test_split_lines() {
        assert!(Lines::split("").is_empty());
        assert_eq!(vec!["", ""], Lines::split("\n"));
        assert_eq!(vec!["a", ""], Lines::split("a\n"));
        assert_eq!(vec!["a\r", "b"], Lines::split("a\r\nb"));
    }

    #[test]
    fn test_split_chars() {
        assert!(Chars::split("").is_empty());
        assert_eq!(vec!['h', 'é', '🤩'], Chars::split("hé🤩"));
    }

    #[test]
    fn test_emit() {
        assert_eq!(
            DiffOp::equal("x", 2, 4),
            Lines::emit(Ops::Equal, Some((1, "x")), Some((3, "x")))
        );
        assert_eq!(DiffOp::delete("x", 1), Lines::emit(Ops::Delete, Some((0, "x")), None));
        assert_eq!(DiffOp::insert("y", 7), Lines::emit(Ops::Insert, None, Some((6, "y"))));
        assert_eq!(
            DiffChar::new(Ops::Insert, 'z'),
            Chars::emit(Ops::Insert, None, Some((0, 'z')))
        );
    }
}
