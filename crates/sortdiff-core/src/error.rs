//! Error types for sorted-file comparison

use std::convert::Infallible;
use std::path::PathBuf;
use thiserror::Error;

use crate::engine::Side;

#[derive(Error, Debug)]
pub enum DiffError {
    /// Both inputs resolve to the same file
    #[error("The two input paths point to the same file ({}). Please provide two distinct files.", path.display())]
    IdenticalSource { path: PathBuf },

    /// A source produced a line that sorts before the one preceding it
    #[error("{} is not lexicographically sorted: line {line_number} {offending:?} comes after {previous:?}", source_name(*side, label.as_deref()))]
    UnsortedInput {
        side: Side,
        label: Option<String>,
        line_number: usize,
        offending: String,
        previous: String,
    },

    #[error("File '{input}' not found. Resolved Absolute Path: '{}'", resolved.display())]
    PathNotFound { input: String, resolved: PathBuf },

    /// Both result lists would be written to the same file
    #[error("Output file names must differ, both are '{name}'")]
    OutputCollision { name: String },

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

impl From<Infallible> for DiffError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

fn source_name(side: Side, label: Option<&str>) -> String {
    match label {
        Some(label) => label.to_string(),
        None => format!("The {side} input"),
    }
}

/// Convenience alias for comparison results
pub type Result<T> = std::result::Result<T, DiffError>;
