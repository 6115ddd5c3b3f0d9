use crate::{Error, Granularity, LineKind, Lines, Ops, TextDiff};

/// Checks the structural invariants of a line diff and its rows, panicking on any violation.
pub fn fuzz(old: &str, new: &str) -> Result<(), Error> {
    let mut differ = TextDiff::new();
    differ.set_max_cells(None);

    let ops = differ.diff_lines(old, new)?;

    assert_eq!(Lines::split(old), TextDiff::diff_text_left(&ops));
    assert_eq!(Lines::split(new), TextDiff::diff_text_right(&ops));

    let contents = ops.iter().map(|op| op.content().to_string()).collect::<Vec<_>>();
    let rows = TextDiff::project_rows(ops);

    // Every op lands on exactly one row side, in order
    let sides = rows
        .iter()
        .flat_map(|row| {
            let left = (!row.left().is_blank()).then(|| row.left().content().to_string());
            // Equal rows carry the same op on both sides
            let right = (!row.right().is_blank() && row.right().kind() != LineKind::Equal)
                .then(|| row.right().content().to_string());
            left.into_iter().chain(right)
        })
        .collect::<Vec<_>>();
    assert_eq!(contents, sides);
    assert!(rows.iter().all(|r| !(r.left().is_blank() && r.right().is_blank())));

    for row in rows.iter().filter(|r| r.is_change_block()) {
        let chars = differ.diff_chars(row.left().content(), row.right().content())?;
        let left = chars
            .iter()
            .filter(|c| c.op() != Ops::Insert)
            .map(|c| c.value())
            .collect::<String>();
        let right = chars
            .iter()
            .filter(|c| c.op() != Ops::Delete)
            .map(|c| c.value())
            .collect::<String>();

        assert_eq!(row.left().content(), left);
        assert_eq!(row.right().content(), right);
    }

    Ok(())
}
