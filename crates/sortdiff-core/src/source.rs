//! Lazy line sources backed by files or readers

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// A one-shot, forward-only stream of trimmed lines
///
/// The underlying reader (and file handle, for [`LineSource::open`]) is
/// released as soon as the source is dropped. After the end of input or the
/// first read error the source yields nothing further.
pub struct LineSource<R> {
    lines: Option<Lines<R>>,
}

impl LineSource<BufReader<File>> {
    /// Open a file for line-by-line reading
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: Some(reader.lines()),
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;
        match lines.next() {
            Some(Ok(line)) => Some(Ok(trim_owned(line))),
            Some(Err(e)) => {
                self.lines = None;
                Some(Err(e))
            }
            None => {
                self.lines = None;
                None
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineSource<R> {}

/// Strip surrounding whitespace, reusing the allocation when possible
fn trim_owned(line: String) -> String {
    let trimmed = line.trim();
    if trimmed.len() == line.len() {
        line
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn collect(input: &[u8]) -> Vec<String> {
        LineSource::from_reader(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_lines_are_trimmed() {
        assert_eq!(collect(b"  alpha \n\tbeta\r\ngamma"), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(collect(b"a\n\n  \nb\n"), ["a", "", "", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_invalid_utf8_stops_source() {
        let bytes = b"ok\n\xff\xfe\nlater\n".to_vec();
        let mut source = LineSource::from_reader(Cursor::new(bytes));

        assert_eq!(source.next().unwrap().unwrap(), "ok");
        let err = source.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(source.next().is_none());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\n").unwrap();
        file.flush().unwrap();

        let lines: Vec<String> = LineSource::open(file.path())
            .unwrap()
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineSource::open(Path::new("/definitely/not/here.txt")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
