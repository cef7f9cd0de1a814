use super::keyfile::{load_key_file, save_key_file, DEFAULT_KEY_FILE};
use super::textfile::{prefixed_sibling, read_trimmed, write_text};
use crate::cipher;
use crate::error::Result;
use crate::key::Key;
use log::debug;
use std::path::{Path, PathBuf};

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    /// Column count for a freshly generated key when none is supplied
    pub columns: usize,
    /// Inline wire-format key, e.g. `[2, 0, 1]`
    pub key: Option<String>,
    /// Load the key from a key file instead of generating one
    pub key_file: Option<PathBuf>,
    /// Where to save a freshly generated key
    pub key_out: Option<PathBuf>,
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            key: None,
            key_file: None,
            key_out: None,
        }
    }
}

/// What an encrypt-file operation produced
#[derive(Debug)]
pub struct EncryptReport {
    pub output: PathBuf,
    /// Where the generated key was saved; `None` when the caller supplied
    /// the key itself
    pub key_path: Option<PathBuf>,
    pub columns: usize,
}

/// Encrypt a document file.
///
/// With no key option set, a fresh key of `options.columns` columns is
/// generated and saved next to the input as `encryption_key.txt` (or to
/// `options.key_out`). The output path defaults to `encrypted_<name>`
/// next to the input.
pub fn encrypt_file(
    input: &Path,
    output: Option<&Path>,
    options: &EncryptOptions,
) -> Result<EncryptReport> {
    let text = read_trimmed(input)?;
    debug!("read {} chars from {}", text.chars().count(), input.display());

    let (key, generated) = match (&options.key, &options.key_file) {
        (Some(inline), _) => (inline.parse::<Key>()?, false),
        (None, Some(path)) => (load_key_file(path)?, false),
        (None, None) => (Key::generate(options.columns)?, true),
    };
    debug!(
        "using {} {}-column key",
        if generated { "generated" } else { "supplied" },
        key.columns()
    );

    let ciphertext = cipher::encrypt(&text, &key)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| prefixed_sibling(input, "encrypted_"));
    write_text(&output, &ciphertext)?;

    let key_path = if generated {
        let path = options
            .key_out
            .clone()
            .unwrap_or_else(|| input.with_file_name(DEFAULT_KEY_FILE));
        save_key_file(&path, &key)?;
        Some(path)
    } else {
        None
    };

    Ok(EncryptReport {
        output,
        key_path,
        columns: key.columns(),
    })
}
