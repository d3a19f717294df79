//! Plain-text renderings of an edit script.
//!
//! Deleted text is shown struck out and inserted text highlighted, the same
//! treatment the review panel gives each segment kind.

use crate::edit_script::{DiffKind, DiffSegment};

const ANSI_DELETE: &str = "\x1b[9;31m";
const ANSI_INSERT: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Render segments git word-diff style: `[-deleted-]` and `{+inserted+}`.
///
/// Each segment gets its own markers, so coalesce first for compact output.
pub fn inline_markup(segments: &[DiffSegment]) -> String {
    let mut result = String::new();

    for segment in segments {
        match segment.kind {
            DiffKind::Equal => result.push_str(&segment.text),
            DiffKind::Delete => {
                result.push_str("[-");
                result.push_str(&segment.text);
                result.push_str("-]");
            }
            DiffKind::Insert => {
                result.push_str("{+");
                result.push_str(&segment.text);
                result.push_str("+}");
            }
        }
    }

    result
}

/// Render segments with ANSI colors: red strikethrough for deletions, green for insertions.
pub fn ansi(segments: &[DiffSegment]) -> String {
    let mut result = String::new();

    for segment in segments {
        let color = match segment.kind {
            DiffKind::Equal => {
                result.push_str(&segment.text);
                continue;
            }
            DiffKind::Delete => ANSI_DELETE,
            DiffKind::Insert => ANSI_INSERT,
        };
        result.push_str(color);
        result.push_str(&segment.text);
        result.push_str(ANSI_RESET);
    }

    result
}
