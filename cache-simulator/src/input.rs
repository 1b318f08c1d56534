//! Input data handling for cache simulation
//!
//! Reads recorded block-address traces so a run can replay a stream that was
//! not produced by one of the built-in patterns.
//!
//! # Format
//!
//! ```text
//! # comment to end of line
//! address            <- optional header, before the first address
//! 0
//! 1, 2, 3
//! 4 5 6
//! -1                 <- accepted; the engine traces it as invalid
//! ```

use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error types for trace parsing
#[derive(Debug)]
pub enum TraceParseError {
    IoError(io::Error),
    ParseError { line: usize, token: String },
}

impl fmt::Display for TraceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceParseError::IoError(err) => write!(f, "failed to read trace: {err}"),
            TraceParseError::ParseError { line, token } => {
                write!(f, "invalid address '{token}' on line {line}")
            }
        }
    }
}

impl std::error::Error for TraceParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraceParseError::IoError(err) => Some(err),
            TraceParseError::ParseError { .. } => None,
        }
    }
}

impl From<io::Error> for TraceParseError {
    fn from(err: io::Error) -> Self {
        TraceParseError::IoError(err)
    }
}

/// Reader for block-address trace files
#[derive(Debug)]
pub struct AddressReader {
    path: PathBuf,
}

impl AddressReader {
    /// Create a new reader for the given trace file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse one line, appending its addresses to `out`.
    ///
    /// `line_num` is zero-based; errors report it one-based.
    fn parse_line(line: &str, line_num: usize, out: &mut Vec<i64>) -> Result<(), TraceParseError> {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let content = content.trim();
        if content.is_empty() {
            return Ok(());
        }

        if out.is_empty() && content.eq_ignore_ascii_case("address") {
            return Ok(());
        }

        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let address = token
                .parse::<i64>()
                .map_err(|_| TraceParseError::ParseError {
                    line: line_num + 1,
                    token: token.to_string(),
                })?;
            out.push(address);
        }

        Ok(())
    }

    /// Parse addresses from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Vec<i64>, TraceParseError> {
        let mut addresses = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            Self::parse_line(&line, line_num, &mut addresses)?;
        }
        Ok(addresses)
    }

    /// Read every address in the file, in order
    pub fn read_addresses(&self) -> Result<Vec<i64>, TraceParseError> {
        let file = File::open(&self.path)?;
        let addresses = Self::parse(BufReader::new(file))?;
        debug!(
            "read {} addresses from {}",
            addresses.len(),
            self.path.display()
        );
        Ok(addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn parse_str(text: &str) -> Result<Vec<i64>, TraceParseError> {
        AddressReader::parse(Cursor::new(text))
    }

    #[test]
    fn test_parse_mixed_separators() {
        let addresses = parse_str("0\n1, 2,3\n4 5\t6\n").unwrap();
        assert_eq!(addresses, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_comments_and_header() {
        let text = "# pattern: Sequential\naddress\n7 # seven\n\n# done\n-2\n";
        assert_eq!(parse_str(text).unwrap(), vec![7, -2]);
    }

    #[test]
    fn test_header_only_before_first_address() {
        let err = parse_str("1\naddress\n").unwrap_err();
        match err {
            TraceParseError::ParseError { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "address");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_str("1\n2\nx3\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid address 'x3' on line 3");
    }

    #[test]
    fn test_read_missing_file() {
        let reader = AddressReader::new("/nonexistent/address/trace.txt");
        assert!(matches!(
            reader.read_addresses(),
            Err(TraceParseError::IoError(_))
        ));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join("address_reader_test_read_file.txt");
        fs::write(&path, "address\n10\n20,30\n").expect("Failed to write trace");

        let addresses = AddressReader::new(&path).read_addresses().unwrap();
        assert_eq!(addresses, vec![10, 20, 30]);

        let _ = fs::remove_file(&path);
    }
}
