use pretty_assertions::assert_eq;
use word_diff::{DiffSegment, WordDiff};

#[test]
fn test_both_empty() {
    let diff = WordDiff::new("", "");

    assert_eq!(diff.segment_count(), 0);
    assert!(!diff.has_changes());
    assert_eq!(diff.old_text(), "");
    assert_eq!(diff.new_text(), "");
}

#[test]
fn test_whitespace_only_change() {
    let diff = WordDiff::new("two words", "two  words");

    assert_eq!(
        diff.segments(),
        &[
            DiffSegment::equal("two"),
            DiffSegment::delete(" "),
            DiffSegment::insert("  "),
            DiffSegment::equal("words"),
        ]
    );
}

#[test]
fn test_case_change_is_a_replacement() {
    let diff = WordDiff::new("me", "Me");
    assert_eq!(
        diff.segments(),
        &[DiffSegment::delete("me"), DiffSegment::insert("Me")]
    );
}

#[test]
fn test_multiline_text() {
    let old = "First line.\nSecond line has a eror.\n";
    let new = "First line.\nSecond line has an error.\n";

    let diff = WordDiff::new(old, new);

    assert_eq!(diff.old_text(), old);
    assert_eq!(diff.new_text(), new);
    assert_eq!(diff.deleted_tokens(), 2);
    assert_eq!(diff.inserted_tokens(), 2);
}

#[test]
fn test_unicode_text() {
    let old = "Line 2 🚀 done";
    let new = "Line 2 🎉 done";

    let diff = WordDiff::new(old, new);

    assert_eq!(diff.old_text(), old);
    assert_eq!(diff.new_text(), new);
    assert!(diff.segments().contains(&DiffSegment::delete("🚀")));
    assert!(diff.segments().contains(&DiffSegment::insert("🎉")));
}

#[test]
fn test_moderately_long_paragraph() {
    let mut old = String::new();
    let mut new = String::new();

    for i in 0..200 {
        old.push_str(&format!("word{} ", i));
        if i % 10 == 0 {
            new.push_str(&format!("changed{} ", i));
        } else {
            new.push_str(&format!("word{} ", i));
        }
    }

    let diff = WordDiff::new(&old, &new);

    assert_eq!(diff.old_text(), old);
    assert_eq!(diff.new_text(), new);
    assert_eq!(diff.deleted_tokens(), 20);
    assert_eq!(diff.inserted_tokens(), 20);
}
