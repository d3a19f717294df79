// Word-level diff library for the grammar review front-end
// This crate provides token-level diff calculation for highlighting corrections

mod batch;
mod config;
mod edit_script;
mod lcs_table;
pub mod render;
mod tokenizer;
mod word_diff;

pub use batch::diff_batch;
pub use config::DiffConfig;
pub use edit_script::{build_edit_script, DiffKind, DiffSegment};
pub use lcs_table::LcsTable;
pub use tokenizer::tokenize;
pub use word_diff::{compute_word_diff, WordDiff};
