use anyhow::Result;
use word_diff::{DiffConfig, DiffKind, WordDiff};

fn main() -> Result<()> {
    env_logger::init();

    // A sentence and its grammar-corrected version
    let original = "Me and my friend was going to the market yesterday , and we buyed apples.";
    let corrected = "My friend and I were going to the market yesterday, and we bought apples.";

    let diff = WordDiff::new(original, corrected);

    println!("=== Per-token segments ===");
    for segment in diff.segments() {
        let label = match segment.kind {
            DiffKind::Equal => "  ",
            DiffKind::Insert => "+ ",
            DiffKind::Delete => "- ",
        };
        println!("{}{:?}", label, segment.text);
    }

    println!("\n=== Inline markup ===");
    println!("{}", diff.coalesced().inline_markup());

    println!("\n=== Terminal highlight ===");
    println!("{}", diff.coalesced().ansi());

    println!("\nDiff statistics:");
    println!("  Segments: {}", diff.segment_count());
    println!("  Inserted tokens: {}", diff.inserted_tokens());
    println!("  Deleted tokens: {}", diff.deleted_tokens());
    println!("  Unchanged tokens: {}", diff.unchanged_tokens());

    // A size-guarded diff, as a UI would use for pasted text
    let config = DiffConfig::new().max_table_cells(10_000).coalesce(true);
    let guarded = config.diff(original, corrected)?;
    println!("\nGuarded diff has {} runs", guarded.segment_count());

    let long_text = "word ".repeat(5_000);
    if let Err(err) = config.diff(&long_text, "word") {
        println!("Rejected oversized input: {}", err);
    }

    Ok(())
}
