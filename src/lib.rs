//! Columna - Columnar Transposition Cipher
//!
//! Text is encrypted and decrypted by rearranging characters according to a
//! permutation key. The text (minus newlines) is laid out row-major in a
//! grid whose width is the key length; each row is read back in key order.
//! Newline positions are preserved across the transform, and the final row
//! is padded with spaces.
//!
//! This is a reversible encoding, not secure encryption: the key space is
//! tiny and the transform leaks letter frequencies. No confidentiality is
//! claimed.
//!
//! ## Transform
//!
//! ```text
//! Input → Record newlines → Strip → Pad → Reorder columns → Reinsert newlines
//! ```
//!
//! Decryption runs the same steps with the inverse column order, then trims
//! the trailing padding.
//!
//! ## Example
//!
//! ```
//! use columna::cipher::{decrypt, encrypt};
//! use columna::key::Key;
//!
//! let key = Key::from_values(vec![2, 0, 1]).unwrap();
//! let ciphertext = encrypt("Hello World", &key).unwrap();
//! assert_eq!(decrypt(&ciphertext, &key).unwrap(), "Hello World");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod key;
mod text;

pub use cipher::{decrypt, encrypt};
pub use error::{ColumnaError, Result};
pub use key::{validate_key, Key};
