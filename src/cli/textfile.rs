use crate::error::Result;
use std::path::{Path, PathBuf};

/// Read a whole document and trim surrounding whitespace, the way the
/// interactive front end loads plaintext.
pub fn read_trimmed(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    Ok(raw.trim().to_string())
}

/// Read a document verbatim. Ciphertext is loaded this way: leading and
/// trailing spaces carry positional information and must survive.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Write text to `path`, creating missing parent directories first.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text)?;
    Ok(())
}

/// Derive a sibling path with a prefixed file name:
/// `dir/notes.txt` -> `dir/<prefix>notes.txt`.
pub fn prefixed_sibling(path: &Path, prefix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}", prefix, name))
}
