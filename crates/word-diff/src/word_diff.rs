use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit_script::{self, build_edit_script, DiffKind, DiffSegment};
use crate::lcs_table::LcsTable;
use crate::render;
use crate::tokenizer::tokenize;

/// Compute the word-level edit script between an original and a revised text.
///
/// Every token becomes its own segment. Concatenating the `equal` and `delete`
/// segments gives back `original`; concatenating `equal` and `insert` gives back
/// `revised`. Works on any input, including empty strings.
pub fn compute_word_diff(original: &str, revised: &str) -> Vec<DiffSegment> {
    diff_tokens(&tokenize(original), &tokenize(revised))
}

/// Align two already tokenized texts and emit their edit script
pub(crate) fn diff_tokens(old_tokens: &[&str], new_tokens: &[&str]) -> Vec<DiffSegment> {
    debug!(
        "word diff: {} old tokens, {} new tokens",
        old_tokens.len(),
        new_tokens.len()
    );

    let table = LcsTable::build(old_tokens, new_tokens);
    build_edit_script(old_tokens, new_tokens, &table)
}

/// Represents a word-level diff between an original and a revised text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WordDiff {
    /// The segments of this diff, in reading order
    segments: Vec<DiffSegment>,
}

impl WordDiff {
    /// Create a new word diff between two texts
    pub fn new(original: &str, revised: &str) -> Self {
        Self::from_segments(compute_word_diff(original, revised))
    }

    /// Wrap an existing edit script
    pub fn from_segments(segments: Vec<DiffSegment>) -> Self {
        Self { segments }
    }

    /// Get the segments
    pub fn segments(&self) -> &[DiffSegment] {
        &self.segments
    }

    /// Take ownership of the segments
    pub fn into_segments(self) -> Vec<DiffSegment> {
        self.segments
    }

    /// Get the number of segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Check if the diff has any insertions or deletions
    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|s| !s.is_equal())
    }

    /// Rebuild the original text from equal and deleted segments
    pub fn old_text(&self) -> String {
        self.collect_text(DiffSegment::in_original)
    }

    /// Rebuild the revised text from equal and inserted segments
    pub fn new_text(&self) -> String {
        self.collect_text(DiffSegment::in_revised)
    }

    /// Get the number of inserted segments
    pub fn inserted_tokens(&self) -> usize {
        self.count_kind(DiffKind::Insert)
    }

    /// Get the number of deleted segments
    pub fn deleted_tokens(&self) -> usize {
        self.count_kind(DiffKind::Delete)
    }

    /// Get the number of unchanged segments
    pub fn unchanged_tokens(&self) -> usize {
        self.count_kind(DiffKind::Equal)
    }

    /// Merge adjacent segments of the same kind into longer runs.
    ///
    /// Only the grouping changes; both texts still reconstruct exactly.
    /// Token counts on the result count runs rather than tokens.
    pub fn coalesced(&self) -> Self {
        Self::from_segments(edit_script::coalesce(&self.segments))
    }

    /// Render with `[-deleted-]` and `{+inserted+}` markers
    pub fn inline_markup(&self) -> String {
        render::inline_markup(&self.segments)
    }

    /// Render with terminal colors
    pub fn ansi(&self) -> String {
        render::ansi(&self.segments)
    }

    fn collect_text(&self, keep: fn(&DiffSegment) -> bool) -> String {
        self.segments
            .iter()
            .filter(|s| keep(s))
            .map(|s| s.text.as_str())
            .collect()
    }

    fn count_kind(&self, kind: DiffKind) -> usize {
        self.segments.iter().filter(|s| s.kind == kind).count()
    }
}

impl From<WordDiff> for Vec<DiffSegment> {
    fn from(diff: WordDiff) -> Self {
        diff.segments
    }
}
