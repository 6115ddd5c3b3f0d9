use lcs_diff_rs::{Granularity, Lines, Ops, TextDiff};
use proptest::prelude::*;

// Short lines over a tiny alphabet, so texts share plenty of lines
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("[ab]{0,2}", 0..10).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn diff_lines_reconstructs_both_sides(old in text(), new in text()) {
        let ops = TextDiff::new().diff_lines(&old, &new).unwrap();

        prop_assert_eq!(Lines::split(&old), TextDiff::diff_text_left(&ops));
        prop_assert_eq!(Lines::split(&new), TextDiff::diff_text_right(&ops));
    }

    #[test]
    fn diff_lines_numbers_are_sequential(old in text(), new in text()) {
        let ops = TextDiff::new().diff_lines(&old, &new).unwrap();

        let left = ops.iter().filter_map(|op| op.left_line()).collect::<Vec<_>>();
        let right = ops.iter().filter_map(|op| op.right_line()).collect::<Vec<_>>();

        prop_assert_eq!((1..=Lines::split(&old).len()).collect::<Vec<_>>(), left);
        prop_assert_eq!((1..=Lines::split(&new).len()).collect::<Vec<_>>(), right);
    }

    #[test]
    fn diff_lines_identity(txt in text()) {
        let ops = TextDiff::new().diff_lines(&txt, &txt).unwrap();

        prop_assert!(ops.iter().all(|op| op.op() == Ops::Equal));
        prop_assert!(ops.iter().all(|op| op.left_line() == op.right_line()));
    }

    #[test]
    fn rows_keep_every_op(old in text(), new in text()) {
        // Panics on a dropped line, a both-blank row or a bad char highlight
        lcs_diff_rs::fuzz::fuzz(&old, &new).unwrap();
    }

    #[test]
    fn diff_chars_reconstructs_both_sides(old in "\\PC{0,12}", new in "\\PC{0,12}") {
        let chars = TextDiff::new().diff_chars(&old, &new).unwrap();

        let left = chars.iter().filter(|c| c.op() != Ops::Insert).map(|c| c.value()).collect::<String>();
        let right = chars.iter().filter(|c| c.op() != Ops::Delete).map(|c| c.value()).collect::<String>();

        prop_assert_eq!(old, left);
        prop_assert_eq!(new, right);
    }

    #[test]
    fn diff_levenshtein_is_bounded(old in text(), new in text()) {
        let ops = TextDiff::new().diff_lines(&old, &new).unwrap();
        let distance = TextDiff::diff_levenshtein(ops.iter().map(|op| op.op()));

        let inserted = ops.iter().filter(|op| op.op() == Ops::Insert).count();
        let deleted = ops.iter().filter(|op| op.op() == Ops::Delete).count();

        prop_assert!(distance >= inserted.max(deleted));
        prop_assert!(distance <= inserted + deleted);
    }
}
