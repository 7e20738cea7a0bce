//! Writing comparison results to the output directory

use crate::engine::ComparisonResult;
use crate::error::{DiffError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Where the two result lists are written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSpec {
    /// Directory holding both files, created if missing
    pub dir: PathBuf,
    /// File name for lines unique to the first input
    pub first_name: String,
    /// File name for lines unique to the second input
    pub second_name: String,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("Output"),
            first_name: "output1.txt".to_string(),
            second_name: "output2.txt".to_string(),
        }
    }
}

impl OutputSpec {
    pub fn first_path(&self) -> PathBuf {
        self.dir.join(&self.first_name)
    }

    pub fn second_path(&self) -> PathBuf {
        self.dir.join(&self.second_name)
    }
}

/// Paths of the files produced by [`write_result`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub first: PathBuf,
    pub second: PathBuf,
}

/// Write both unique-line lists, one line per entry with no trailing newline
///
/// The files are staged next to their destinations and only moved into
/// place once both have been written.
pub fn write_result(result: &ComparisonResult, spec: &OutputSpec) -> Result<OutputPaths> {
    if spec.first_name == spec.second_name {
        return Err(DiffError::OutputCollision {
            name: spec.first_name.clone(),
        });
    }

    fs::create_dir_all(&spec.dir)?;

    let first_staged = stage(&spec.dir, result.unique_to_first())?;
    let second_staged = stage(&spec.dir, result.unique_to_second())?;

    let paths = OutputPaths {
        first: spec.first_path(),
        second: spec.second_path(),
    };
    persist(first_staged, &paths.first)?;
    persist(second_staged, &paths.second)?;

    info!(
        first = %paths.first.display(),
        second = %paths.second.display(),
        "wrote comparison results"
    );
    Ok(paths)
}

fn stage(dir: &Path, lines: &[String]) -> Result<NamedTempFile> {
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(lines.join("\n").as_bytes())?;
    staged.flush()?;
    Ok(staged)
}

fn persist(staged: NamedTempFile, path: &Path) -> Result<()> {
    staged.persist(path).map_err(|e| DiffError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MergeDiffEngine;

    fn spec_in(dir: &Path) -> OutputSpec {
        OutputSpec {
            dir: dir.join("Output"),
            ..OutputSpec::default()
        }
    }

    #[test]
    fn test_default_spec() {
        let spec = OutputSpec::default();
        assert_eq!(spec.first_path(), Path::new("Output/output1.txt"));
        assert_eq!(spec.second_path(), Path::new("Output/output2.txt"));
    }

    #[test]
    fn test_write_creates_dir_and_joins_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        let result = MergeDiffEngine::new()
            .compare_lines(["apple", "banana", "cherry"], ["banana", "date"])
            .unwrap();

        let paths = write_result(&result, &spec).unwrap();

        assert_eq!(fs::read_to_string(&paths.first).unwrap(), "apple\ncherry");
        assert_eq!(fs::read_to_string(&paths.second).unwrap(), "date");
    }

    #[test]
    fn test_empty_list_writes_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        let result = MergeDiffEngine::new()
            .compare_lines(["same"], ["same"])
            .unwrap();

        let paths = write_result(&result, &spec).unwrap();

        assert_eq!(fs::read_to_string(&paths.first).unwrap(), "");
        assert_eq!(fs::read_to_string(&paths.second).unwrap(), "");
    }

    #[test]
    fn test_overwrites_previous_output() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        fs::create_dir_all(&spec.dir).unwrap();
        fs::write(spec.first_path(), "stale\ncontent\n").unwrap();

        let result = MergeDiffEngine::new().compare_lines(["x"], ["y"]).unwrap();
        write_result(&result, &spec).unwrap();

        assert_eq!(fs::read_to_string(spec.first_path()).unwrap(), "x");
    }

    #[test]
    fn test_no_staging_files_left_behind() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        let result = MergeDiffEngine::new().compare_lines(["x"], ["y"]).unwrap();

        write_result(&result, &spec).unwrap();

        let mut names: Vec<String> = fs::read_dir(&spec.dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["output1.txt", "output2.txt"]);
    }

    #[test]
    fn test_colliding_names_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = OutputSpec {
            second_name: "output1.txt".to_string(),
            ..spec_in(tmp.path())
        };
        let result = ComparisonResult::default();

        let err = write_result(&result, &spec).unwrap_err();

        assert!(matches!(err, DiffError::OutputCollision { .. }));
        assert!(!spec.dir.exists());
    }
}
