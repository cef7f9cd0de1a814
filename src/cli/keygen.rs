use super::keyfile::save_key_file;
use crate::error::Result;
use crate::key::Key;
use log::debug;
use std::path::Path;

/// Generate a fresh key of `columns` columns, optionally persisting it to a
/// key file. Returns the key for display.
pub fn generate_key(columns: usize, output: Option<&Path>) -> Result<Key> {
    let key = Key::generate(columns)?;
    debug!("generated {}-column key", key.columns());
    if let Some(path) = output {
        save_key_file(path, &key)?;
    }
    Ok(key)
}
