use anyhow::{bail, Context, Result};
use log::warn;

use crate::batch::map_pairs;
use crate::lcs_table::LcsTable;
use crate::tokenizer::tokenize;
use crate::word_diff::{diff_tokens, WordDiff};

/// Configuration for word diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffConfig {
    /// Largest LCS table (in cells) a diff may allocate, unlimited when `None`
    pub max_table_cells: Option<usize>,

    /// Whether to merge adjacent segments of the same kind
    pub coalesce: bool,
}

impl DiffConfig {
    /// Create a new config with no size limit and per-token segments
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs whose LCS table would hold more than `cells` cells
    pub fn max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = Some(cells);
        self
    }

    /// Remove any table size limit
    pub fn unlimited(mut self) -> Self {
        self.max_table_cells = None;
        self
    }

    /// Set whether adjacent same-kind segments are merged
    pub fn coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Create a diff between two texts using this configuration
    pub fn diff(&self, original: &str, revised: &str) -> Result<WordDiff> {
        let old_tokens = tokenize(original);
        let new_tokens = tokenize(revised);

        self.check_table_size(old_tokens.len(), new_tokens.len())?;

        let diff = WordDiff::from_segments(diff_tokens(&old_tokens, &new_tokens));

        Ok(if self.coalesce { diff.coalesced() } else { diff })
    }

    /// Diff many text pairs in parallel.
    ///
    /// Results keep the order of `pairs`. If any pair exceeds the size limit,
    /// the error for the earliest such pair is returned.
    pub fn diff_batch<S>(&self, pairs: &[(S, S)]) -> Result<Vec<WordDiff>>
    where
        S: AsRef<str> + Sync,
    {
        map_pairs(pairs, |index, original, revised| {
            self.diff(original, revised)
                .with_context(|| format!("failed to diff pair {index}"))
        })
        .into_iter()
        .collect()
    }

    fn check_table_size(&self, old_len: usize, new_len: usize) -> Result<()> {
        let Some(limit) = self.max_table_cells else {
            return Ok(());
        };

        let cells = match LcsTable::cell_count(old_len, new_len) {
            Some(cells) => cells,
            None => {
                warn!("word diff table size overflows for {old_len}x{new_len} tokens");
                bail!("diff table for {old_len}x{new_len} tokens is too large");
            }
        };

        if cells > limit {
            warn!("word diff rejected: {cells} cells exceeds limit of {limit}");
            bail!("diff table of {cells} cells exceeds limit of {limit} cells");
        }

        Ok(())
    }
}
