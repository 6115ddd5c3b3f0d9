use lcs_diff_rs::{Error, Ops, Side, Span, TextDiff};
use tracing_subscriber::EnvFilter;

// A terminal rendition of the side-by-side view
// Run with `RUST_LOG=lcs_diff_rs=debug` to see the table sizes being computed

const TXT_OLD: &str = "Hello World
This is a test file.
It has multiple lines.
Some lines will stay the same.
Some will change.
Delete this line.";

const TXT_NEW: &str = "Hello React
This is a test file.
It has many lines.
Some lines will stay the same.
Some will be modified completely.
Add this new line.";

const WIDTH: usize = 36;

// deleted chars shown as [-x-], inserted as {+x+}
fn render(side: &Side, spans: Option<&[Span]>) -> String {
    if side.is_blank() {
        return format!("{:>3} {}", "", ".".repeat(WIDTH));
    }

    let text = match spans {
        Some(spans) => spans
            .iter()
            .map(|s| match s.op() {
                Ops::Equal => s.text().to_string(),
                Ops::Delete => format!("[-{}-]", s.text()),
                Ops::Insert => format!("{{+{}+}}", s.text()),
            })
            .collect::<String>(),
        None => side.content().to_string(),
    };

    let line = side.line().map(|l| l.to_string()).unwrap_or_default();
    format!("{line:>3} {text:<WIDTH$}")
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let differ = TextDiff::new();
    let cmp = differ.compare(TXT_OLD, TXT_NEW)?;

    if cmp.is_identical() {
        println!("Texts are identical.");
        return Ok(());
    }

    for (row, hl) in cmp.iter() {
        let marker = if row.is_change_block() { '~' } else { ' ' };
        println!(
            "{} {marker} {}",
            render(row.left(), hl.map(|h| h.left())),
            render(row.right(), hl.map(|h| h.right())),
        );
    }

    let stats = cmp.stats();
    println!(
        "\n{} equal, {} modified, {} added, {} removed",
        stats.equal, stats.modified, stats.inserted, stats.deleted
    );

    Ok(())
}
