use criterion::{criterion_group, criterion_main, Criterion};
use lcs_diff_rs::TextDiff;

// A few hundred lines with every seventh line edited and every eleventh dropped
fn create_data(lines: usize) -> (String, String) {
    let old = (0..lines)
        .map(|i| format!("line {i}: the quick brown fox jumps over the lazy dog"))
        .collect::<Vec<_>>();

    let new = old
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 11 != 5)
        .map(|(i, l)| {
            if i % 7 == 3 {
                l.replace("lazy", "sleepy")
            } else {
                l.clone()
            }
        })
        .collect::<Vec<_>>();

    (old.join("\n"), new.join("\n"))
}

fn diff_lines(c: &mut Criterion) {
    let differ = TextDiff::default();

    for n in [100, 500, 1000] {
        let (old, new) = create_data(n);
        c.bench_function(&format!("diff_lines {n}"), |bencher| {
            bencher.iter(|| differ.diff_lines(&old, &new).unwrap());
        });
        c.bench_function(&format!("compare {n}"), |bencher| {
            bencher.iter(|| differ.compare(&old, &new).unwrap());
        });
    }
}

criterion_group!(diff, diff_lines);
criterion_main!(diff);
