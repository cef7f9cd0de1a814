//! The transposition transform: encrypt/decrypt driven by a column key.
//!
//! The text (minus newlines) is laid out row-major in a grid of
//! `key.columns()` columns, padded with trailing spaces to fill the last
//! row. Encryption reads each row's columns in key order; decryption reads
//! them back through the inverse permutation. Both are pure, synchronous,
//! and linear in the input length.

use crate::error::{ColumnaError, Result};
use crate::key::Key;
use crate::text::{extract_newlines, reinsert_newlines};

/// Padding character appended to fill the final matrix row.
const PAD: char = ' ';

/// Encrypt `text` with `key`.
///
/// Newline positions are preserved across the transform; the ciphertext is
/// not trimmed, so padding spaces survive into the output (decryption
/// removes them).
pub fn encrypt(text: &str, key: &Key) -> Result<String> {
    if text.is_empty() {
        return Err(ColumnaError::EmptyInput);
    }

    let (mut flat, newlines) = extract_newlines(text);
    let columns = key.columns();
    let rows = (flat.len() + columns - 1) / columns;
    flat.resize(rows * columns, PAD);

    let mut out = Vec::with_capacity(flat.len());
    for row in flat.chunks(columns) {
        for &col in key.as_slice() {
            out.push(row[col]);
        }
    }

    Ok(reinsert_newlines(out, &newlines).into_iter().collect())
}

/// Decrypt `text` with `key`. Exact algebraic inverse of [`encrypt`] for
/// the same key.
///
/// Trailing whitespace is stripped from the result to remove encryption
/// padding. This is lossy when the original plaintext itself ended in
/// whitespace — such a tail is indistinguishable from padding. Accepted
/// limitation of the format.
pub fn decrypt(text: &str, key: &Key) -> Result<String> {
    if text.is_empty() {
        return Err(ColumnaError::EmptyInput);
    }

    let (mut flat, newlines) = extract_newlines(text);
    let columns = key.columns();
    let remainder = flat.len() % columns;
    if remainder != 0 {
        flat.resize(flat.len() + columns - remainder, PAD);
    }

    // Ciphertext column inverse[j] holds plaintext column j of each row.
    let inverse = key.inverse();
    let mut out = Vec::with_capacity(flat.len());
    for row in flat.chunks(columns) {
        for &col in &inverse {
            out.push(row[col]);
        }
    }

    let restored: String = reinsert_newlines(out, &newlines).into_iter().collect();
    Ok(restored.trim_end().to_string())
}
