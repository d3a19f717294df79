use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lcs_table::LcsTable;

/// Represents how a segment relates the original text to the revised text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffKind {
    /// Text present in both versions
    #[display(fmt = "equal")]
    Equal,

    /// Text only present in the revised version
    #[display(fmt = "insert")]
    Insert,

    /// Text only present in the original version
    #[display(fmt = "delete")]
    Delete,
}

/// A tagged piece of text in an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffSegment {
    /// How this text relates the two versions
    pub kind: DiffKind,

    /// The text covered by this segment
    pub text: String,
}

impl DiffSegment {
    /// Create a new segment
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Equal, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Insert, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Delete, text)
    }

    pub fn is_equal(&self) -> bool {
        self.kind == DiffKind::Equal
    }

    pub fn is_insert(&self) -> bool {
        self.kind == DiffKind::Insert
    }

    pub fn is_delete(&self) -> bool {
        self.kind == DiffKind::Delete
    }

    /// Check if this segment's text belongs to the original version
    pub fn in_original(&self) -> bool {
        self.kind != DiffKind::Insert
    }

    /// Check if this segment's text belongs to the revised version
    pub fn in_revised(&self) -> bool {
        self.kind != DiffKind::Delete
    }
}

/// Walk the LCS table from `(N, M)` back to `(0, 0)` and emit one segment per token.
///
/// When both moves keep the same LCS length, the insertion is taken first while
/// walking backwards. This tie-break decides the exact output for inputs with
/// several minimal scripts and must not change.
///
/// Segments are returned in left-to-right order.
pub fn build_edit_script(a: &[&str], b: &[&str], table: &LcsTable) -> Vec<DiffSegment> {
    debug_assert_eq!(table.rows(), a.len() + 1);
    debug_assert_eq!(table.cols(), b.len() + 1);

    let mut i = a.len();
    let mut j = b.len();
    let mut segments = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            segments.push(DiffSegment::equal(a[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            segments.push(DiffSegment::insert(b[j - 1]));
            j -= 1;
        } else {
            segments.push(DiffSegment::delete(a[i - 1]));
            i -= 1;
        }
    }

    segments.reverse();
    segments
}

/// Merge runs of adjacent segments that share a kind
pub(crate) fn coalesce(segments: &[DiffSegment]) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.kind == segment.kind => last.text.push_str(&segment.text),
            _ => merged.push(segment.clone()),
        }
    }

    merged
}
