//! Sortdiff Core - streaming set difference of sorted text files
//!
//! This library walks two lexicographically sorted line sources in
//! lock-step, validating their order as it goes, and collects the lines
//! that appear in only one of them.

pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod source;

pub use engine::{ComparisonResult, ComparisonStats, MergeDiffEngine, Side};
pub use error::{DiffError, Result};
pub use input::{compare_files, ensure_distinct, normalize_input, resolve_path};
pub use output::{write_result, OutputPaths, OutputSpec};
pub use source::LineSource;
