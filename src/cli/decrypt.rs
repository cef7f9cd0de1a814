use super::keyfile::{load_key_file, DEFAULT_KEY_FILE};
use super::textfile::{prefixed_sibling, read_text, write_text};
use crate::cipher;
use crate::error::Result;
use crate::key::Key;
use log::debug;
use std::path::{Path, PathBuf};

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    /// Inline wire-format key, e.g. `[2, 0, 1]`
    pub key: Option<String>,
    /// Load the key from a key file; defaults to `encryption_key.txt`
    /// next to the input
    pub key_file: Option<PathBuf>,
}

/// Decrypt a document file. Returns the output path, which defaults to
/// `decrypted_<name>` next to the input.
pub fn decrypt_file(
    input: &Path,
    output: Option<&Path>,
    options: &DecryptOptions,
) -> Result<PathBuf> {
    // Ciphertext is read verbatim: its leading and trailing spaces are
    // matrix cells, not cosmetic whitespace.
    let text = read_text(input)?;
    debug!("read {} chars from {}", text.chars().count(), input.display());

    let key = match (&options.key, &options.key_file) {
        (Some(inline), _) => inline.parse::<Key>()?,
        (None, Some(path)) => load_key_file(path)?,
        (None, None) => load_key_file(&input.with_file_name(DEFAULT_KEY_FILE))?,
    };

    let plaintext = cipher::decrypt(&text, &key)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| prefixed_sibling(input, "decrypted_"));
    write_text(&output, &plaintext)?;

    Ok(output)
}
