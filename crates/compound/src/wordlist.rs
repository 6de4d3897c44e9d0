//! Word-list input: one candidate word per line.
//!
//! Lines are separated by `'\n'` only. A trailing terminator produces a
//! trailing empty line; it is kept here (the scanner never selects it and
//! `Dictionary::from_lines` drops it).

use std::fs;
use std::path::Path;

use crate::error::WordListError;

/// Split `text` into lines on `'\n'`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Read `path` and split it into lines.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| WordListError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;
    Ok(split_lines(&text).into_iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        assert_eq!(split_lines("cat\ndog\n"), vec!["cat", "dog", ""]);
        assert_eq!(split_lines("cat\ndog"), vec!["cat", "dog"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn carriage_returns_are_kept() {
        assert_eq!(split_lines("cat\r\ndog"), vec!["cat\r", "dog"]);
    }

    #[test]
    fn read_word_list_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat\ndog\ncatdog\n").unwrap();
        let words = read_word_list(&path).unwrap();
        assert_eq!(words, vec!["cat", "dog", "catdog", ""]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_word_list(&path).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"ok\n\xff\xfe\n").unwrap();
        let err = read_word_list(&path).unwrap_err();
        assert!(matches!(
            err,
            WordListError::InvalidUtf8 { valid_up_to: 3, .. }
        ));
    }
}
