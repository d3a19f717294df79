use pretty_assertions::assert_eq;
use word_diff::{diff_batch, DiffConfig, DiffSegment, WordDiff};

#[test]
fn test_default_config_matches_plain_diff() {
    let config = DiffConfig::default();
    assert_eq!(config.max_table_cells, None);
    assert!(!config.coalesce);

    let diff = config.diff("a b", "b a").unwrap();
    assert_eq!(diff, WordDiff::new("a b", "b a"));
}

#[test]
fn test_table_limit() {
    // 3 tokens each: a 4x4 table
    let exact = DiffConfig::new().max_table_cells(16);
    assert!(exact.diff("a b", "b a").is_ok());

    let tight = DiffConfig::new().max_table_cells(15);
    let err = tight.diff("a b", "b a").unwrap_err();
    assert!(err.to_string().contains("exceeds limit of 15 cells"));
}

#[test]
fn test_unlimited_clears_limit() {
    let config = DiffConfig::new().max_table_cells(1).unlimited();
    assert!(config.diff("some text", "other text").is_ok());
}

#[test]
fn test_coalesce_option() {
    let diff = DiffConfig::new()
        .coalesce(true)
        .diff("a b", "b a")
        .unwrap();

    assert_eq!(
        diff.segments(),
        &[
            DiffSegment::delete("a "),
            DiffSegment::equal("b"),
            DiffSegment::insert(" a"),
        ]
    );
}

#[test]
fn test_batch_preserves_order() {
    let pairs = vec![
        ("I has a cat", "I have a cat"),
        ("", "new"),
        ("same", "same"),
    ];

    let diffs = diff_batch(&pairs);

    assert_eq!(diffs.len(), 3);
    for (diff, (old, new)) in diffs.iter().zip(&pairs) {
        assert_eq!(diff, &WordDiff::new(old, new));
    }
    assert!(!diffs[2].has_changes());
}

#[test]
fn test_batch_with_owned_strings() {
    let pairs = vec![(String::from("teh end"), String::from("the end"))];
    let diffs = diff_batch(&pairs);
    assert_eq!(diffs[0].new_text(), "the end");
}

#[test]
fn test_configured_batch_reports_failing_pair() {
    let pairs = vec![("a", "b"), ("a b c d", "d c b a")];

    let err = DiffConfig::new()
        .max_table_cells(10)
        .diff_batch(&pairs)
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("failed to diff pair 1"));
    assert!(message.contains("exceeds limit"));
}

#[test]
fn test_configured_batch_coalesces() {
    let pairs = vec![("a b", "b a")];
    let diffs = DiffConfig::new().coalesce(true).diff_batch(&pairs).unwrap();
    assert_eq!(diffs[0].segment_count(), 3);
}

#[test]
fn test_free_batch_matches_default_config_batch() {
    let pairs = vec![
        ("Me and my friend was going", "My friend and I were going"),
        ("a b", "b a"),
        ("", ""),
    ];

    let configured = DiffConfig::default().diff_batch(&pairs).unwrap();
    assert_eq!(diff_batch(&pairs), configured);
}

#[test]
fn test_configured_batch_reports_earliest_failing_pair() {
    let pairs = vec![("ok", "ok"), ("a b c", "c b a"), ("d e f g", "g f e d")];

    let err = DiffConfig::new()
        .max_table_cells(9)
        .diff_batch(&pairs)
        .unwrap_err();

    assert!(format!("{:#}", err).contains("failed to diff pair 1"));
}
