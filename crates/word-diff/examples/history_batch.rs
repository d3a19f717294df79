use anyhow::Result;
use word_diff::{diff_batch, DiffConfig};

fn main() -> Result<()> {
    env_logger::init();

    // Past corrections, as kept by the review history panel
    let history = vec![
        ("She dont like apples.", "She doesn't like apples."),
        ("Their going too the park.", "They're going to the park."),
        ("I has finished my homework", "I have finished my homework."),
        ("This sentence is fine.", "This sentence is fine."),
    ];

    println!("=== History highlights ===");
    for (i, diff) in diff_batch(&history).iter().enumerate() {
        let marker = if diff.has_changes() { "*" } else { " " };
        println!("{} {}: {}", marker, i + 1, diff.coalesced().inline_markup());
    }

    println!("\n=== Guarded batch ===");
    let diffs = DiffConfig::new()
        .max_table_cells(1_000)
        .coalesce(true)
        .diff_batch(&history)?;
    for diff in &diffs {
        println!(
            "+{} -{} ={}",
            diff.inserted_tokens(),
            diff.deleted_tokens(),
            diff.unchanged_tokens()
        );
    }

    Ok(())
}
