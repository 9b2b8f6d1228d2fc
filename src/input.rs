use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::InputError;

/// Read samples from a file, or from stdin when `path` is `-`
pub fn read_samples(path: &Path) -> Result<Vec<f64>, InputError> {
    if path == Path::new("-") {
        tracing::debug!("Reading samples from stdin");
        let stdin = io::stdin();
        return parse_samples(stdin.lock());
    }

    tracing::debug!("Reading samples from {:?}", path);
    let file = File::open(path)?;
    parse_samples(BufReader::new(file))
}

/// Parse samples from line-oriented text
///
/// Tokens are separated by commas or whitespace, so both one-value-per-line
/// and CSV rows work. Blank lines and lines starting with `#` are skipped.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<f64>, InputError> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            tracing::trace!("Skipping line {}", index + 1);
            continue;
        }

        for token in trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|_| InputError::Parse {
                line: index + 1,
                token: token.to_string(),
            })?;
            samples.push(value);
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_one_per_line() {
        let text = "1.0\n2.5\n-3\n";
        let samples = parse_samples(Cursor::new(text)).unwrap();
        assert_eq!(samples, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "# sensor dump\n\n1.0\n   \n  # trailing note\n2.0\n";
        let samples = parse_samples(Cursor::new(text)).unwrap();
        assert_eq!(samples, vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_mixed_separators() {
        let text = "1.0, 2.0,3.0\n4.0 5.0\t6.0\n";
        let samples = parse_samples(Cursor::new(text)).unwrap();
        assert_eq!(samples, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let text = "1.0\n\n2.0, abc\n";
        let err = parse_samples(Cursor::new(text)).unwrap_err();

        match err {
            InputError::Parse { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        let samples = parse_samples(Cursor::new("")).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_read_samples_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "10.0").unwrap();
        writeln!(file, "11.0").unwrap();
        writeln!(file, "250.0").unwrap();
        file.flush().unwrap();

        let samples = read_samples(file.path()).unwrap();
        assert_eq!(samples, vec![10.0, 11.0, 250.0]);
    }

    #[test]
    fn test_read_samples_missing_file() {
        let result = read_samples(Path::new("/nonexistent/samples.txt"));
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
