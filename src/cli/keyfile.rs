use super::textfile::write_text;
use crate::error::{ColumnaError, Result};
use crate::key::Key;
use std::path::Path;

/// Default key file name, written next to the encrypted document.
pub const DEFAULT_KEY_FILE: &str = "encryption_key.txt";

/// Write `key` to `path`: the key size on the first line, the wire-format
/// list on the second.
pub fn save_key_file(path: &Path, key: &Key) -> Result<()> {
    write_text(path, &format!("{}\n{}\n", key.columns(), key))
}

/// Load a key from a key file.
///
/// Accepts the two-line form written by [`save_key_file`] and a bare
/// one-line wire-format list. A size line that contradicts the list length
/// is an error rather than being ignored.
pub fn load_key_file(path: &Path) -> Result<Key> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [] => Err(ColumnaError::KeyFile("file is empty".into())),
        [list] => list.parse(),
        [size, list, ..] => {
            let declared: usize = size.parse().map_err(|_| {
                ColumnaError::KeyFile(format!("size line is not an integer: '{}'", size))
            })?;
            let key: Key = list.parse()?;
            if key.columns() != declared {
                return Err(ColumnaError::KeyFile(format!(
                    "size line says {} columns but key has {}",
                    declared,
                    key.columns()
                )));
            }
            Ok(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.txt");
        let key = Key::from_values(vec![2, 0, 1]).unwrap();

        save_key_file(&path, &key).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "3\n[2, 0, 1]\n"
        );
        assert_eq!(load_key_file(&path).unwrap(), key);
    }

    #[test]
    fn loads_bare_single_line_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.txt");
        std::fs::write(&path, "[1, 2, 0]").unwrap();

        let key = load_key_file(&path).unwrap();
        assert_eq!(key.as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn rejects_size_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.txt");
        std::fs::write(&path, "4\n[2, 0, 1]\n").unwrap();

        assert!(matches!(
            load_key_file(&path),
            Err(ColumnaError::KeyFile(_))
        ));
    }

    #[test]
    fn rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.txt");
        std::fs::write(&path, "\n  \n").unwrap();

        assert!(matches!(
            load_key_file(&path),
            Err(ColumnaError::KeyFile(_))
        ));
    }

    #[test]
    fn malformed_list_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.txt");
        std::fs::write(&path, "3\n[2, x, 1]\n").unwrap();

        assert!(matches!(
            load_key_file(&path),
            Err(ColumnaError::KeyParse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(matches!(load_key_file(&path), Err(ColumnaError::Io(_))));
    }
}
