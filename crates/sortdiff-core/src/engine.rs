//! Merge-diff engine over two sorted line sequences

use crate::error::{DiffError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Which of the two inputs a line or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Line counts gathered during one comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonStats {
    /// Lines consumed from the first input
    pub lines_first: usize,
    /// Lines consumed from the second input
    pub lines_second: usize,
    /// Number of matched pairs discarded from both sides
    pub common: usize,
}

/// Lines found in exactly one of the two inputs, in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    unique_to_first: Vec<String>,
    unique_to_second: Vec<String>,
    stats: ComparisonStats,
}

impl ComparisonResult {
    pub fn unique_to_first(&self) -> &[String] {
        &self.unique_to_first
    }

    pub fn unique_to_second(&self) -> &[String] {
        &self.unique_to_second
    }

    pub fn stats(&self) -> ComparisonStats {
        self.stats
    }

    /// True when neither input has a line the other lacks
    pub fn is_identical(&self) -> bool {
        self.unique_to_first.is_empty() && self.unique_to_second.is_empty()
    }

    /// The same result with the roles of the two inputs exchanged
    pub fn swapped(self) -> Self {
        Self {
            unique_to_first: self.unique_to_second,
            unique_to_second: self.unique_to_first,
            stats: ComparisonStats {
                lines_first: self.stats.lines_second,
                lines_second: self.stats.lines_first,
                common: self.stats.common,
            },
        }
    }
}

/// Pull cursor over one source: the pending line plus the last consumed one
struct Cursor<I> {
    lines: I,
    side: Side,
    current: Option<String>,
    previous: Option<String>,
    pulled: usize,
}

impl<I, E> Cursor<I>
where
    I: Iterator<Item = std::result::Result<String, E>>,
    E: Into<DiffError>,
{
    fn start(lines: I, side: Side) -> Result<Self> {
        let mut cursor = Self {
            lines,
            side,
            current: None,
            previous: None,
            pulled: 0,
        };
        cursor.pull()?;
        Ok(cursor)
    }

    fn pull(&mut self) -> Result<()> {
        self.current = self.lines.next().transpose().map_err(Into::into)?;
        if self.current.is_some() {
            self.pulled += 1;
        }
        Ok(())
    }

    /// Consume the pending line and fetch the next one
    fn advance(&mut self) -> Result<Option<String>> {
        let line = self.current.take();
        self.previous.clone_from(&line);
        self.pull()?;
        Ok(line)
    }

    fn check_order(&self, label: Option<&str>) -> Result<()> {
        if let (Some(previous), Some(current)) = (&self.previous, &self.current) {
            if current < previous {
                return Err(DiffError::UnsortedInput {
                    side: self.side,
                    label: label.map(str::to_string),
                    line_number: self.pulled,
                    offending: current.clone(),
                    previous: previous.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Computes the lines unique to each of two sorted inputs in one streaming pass
#[derive(Debug, Clone, Default)]
pub struct MergeDiffEngine {
    first_label: Option<String>,
    second_label: Option<String>,
}

impl MergeDiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names used for each input in error messages, usually the file paths
    pub fn with_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_label = Some(first.into());
        self.second_label = Some(second.into());
        self
    }

    /// Walk both sources in lock-step, collecting lines that have no partner
    /// on the other side.
    ///
    /// Each source must be non-decreasing; the first descent aborts the
    /// comparison with [`DiffError::UnsortedInput`]. Equal lines are consumed
    /// pairwise, so an unmatched duplicate is reported as unique.
    pub fn compare<A, B, EA, EB>(&self, first: A, second: B) -> Result<ComparisonResult>
    where
        A: IntoIterator<Item = std::result::Result<String, EA>>,
        B: IntoIterator<Item = std::result::Result<String, EB>>,
        EA: Into<DiffError>,
        EB: Into<DiffError>,
    {
        debug!(
            first = self.first_label.as_deref().unwrap_or("<first>"),
            second = self.second_label.as_deref().unwrap_or("<second>"),
            "starting merge diff"
        );

        let mut first = Cursor::start(first.into_iter(), Side::First)?;
        let mut second = Cursor::start(second.into_iter(), Side::Second)?;

        let mut unique_to_first = Vec::new();
        let mut unique_to_second = Vec::new();
        let mut common = 0;

        loop {
            first.check_order(self.first_label.as_deref())?;
            second.check_order(self.second_label.as_deref())?;

            // An exhausted side sorts after every real line
            let ordering = match (&first.current, &second.current) {
                (None, None) => break,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            };

            match ordering {
                Ordering::Less => unique_to_first.extend(first.advance()?),
                Ordering::Greater => unique_to_second.extend(second.advance()?),
                Ordering::Equal => {
                    first.advance()?;
                    second.advance()?;
                    common += 1;
                }
            }
        }

        let stats = ComparisonStats {
            lines_first: first.pulled,
            lines_second: second.pulled,
            common,
        };
        debug!(
            unique_first = unique_to_first.len(),
            unique_second = unique_to_second.len(),
            common,
            "merge diff finished"
        );

        Ok(ComparisonResult {
            unique_to_first,
            unique_to_second,
            stats,
        })
    }

    /// Compare two in-memory sequences
    pub fn compare_lines<A, B, S, T>(&self, first: A, second: B) -> Result<ComparisonResult>
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.compare(
            first
                .into_iter()
                .map(|line| Ok::<_, std::convert::Infallible>(line.into())),
            second
                .into_iter()
                .map(|line| Ok::<_, std::convert::Infallible>(line.into())),
        )
    }
}
