use crate::error::{ColumnaError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A column-reordering key: a permutation of `0..n`.
///
/// Position `i` of the key names the original column that is read `i`-th
/// when building ciphertext. Every constructor validates, so a `Key` value
/// in circulation is always a valid permutation. The key is never mutated
/// by the transform; decryption derives its own inverse mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(Vec<usize>);

impl Key {
    /// Generate a uniformly random key of `num_columns` columns using the
    /// process RNG.
    pub fn generate(num_columns: usize) -> Result<Self> {
        Self::generate_with(num_columns, &mut rand::thread_rng())
    }

    /// Generate a key from a caller-supplied randomness source.
    /// Tests pass a seeded `StdRng` for deterministic keys.
    pub fn generate_with<R: Rng + ?Sized>(num_columns: usize, rng: &mut R) -> Result<Self> {
        if num_columns == 0 {
            return Err(ColumnaError::InvalidColumnCount(num_columns));
        }
        let mut values: Vec<usize> = (0..num_columns).collect();
        values.shuffle(rng);
        Ok(Key(values))
    }

    /// Build a key from explicit values, rejecting anything that is not a
    /// permutation of `0..values.len()`.
    pub fn from_values(values: Vec<usize>) -> Result<Self> {
        validate_key(&values)?;
        Ok(Key(values))
    }

    /// Number of columns this key spans.
    pub fn columns(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Inverse permutation: `inverse[self[i]] = i`. Reading ciphertext
    /// column `inverse[j]` recovers plaintext column `j`.
    pub fn inverse(&self) -> Vec<usize> {
        let mut inverse = vec![0usize; self.0.len()];
        for (i, &col) in self.0.iter().enumerate() {
            inverse[col] = i;
        }
        inverse
    }
}

/// Check that `values` is a permutation of `0..values.len()`.
///
/// The first offending value is reported: out-of-range before duplicate
/// when both occur, matching scan order. Never mutates the key.
pub fn validate_key(values: &[usize]) -> Result<()> {
    if values.is_empty() {
        return Err(ColumnaError::EmptyKey);
    }
    let mut seen = HashSet::new();
    for &v in values {
        if v >= values.len() {
            return Err(ColumnaError::KeyValueOutOfRange {
                value: v,
                max: values.len() - 1,
            });
        }
        if !seen.insert(v) {
            return Err(ColumnaError::DuplicateKeyValue(v));
        }
    }
    Ok(())
}

/// Wire format: `[2, 0, 1]` — bracketed, comma+space separated. This is the
/// literal form persisted to key files and must round-trip through `parse`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl FromStr for Key {
    type Err = ColumnaError;

    /// Parse the bracketed wire format, tolerating surrounding whitespace
    /// per element. A non-integer token is a `KeyParse` error; the parsed
    /// sequence is then validated as a permutation.
    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| *c != '[' && *c != ']').collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Err(ColumnaError::EmptyKey);
        }
        let values = cleaned
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<usize>()
                    .map_err(|_| ColumnaError::KeyParse(format!("not an integer: '{}'", token)))
            })
            .collect::<Result<Vec<usize>>>()?;
        Key::from_values(values)
    }
}
