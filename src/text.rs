//! Newline bookkeeping for the transposition transform.
//!
//! The matrix only ever holds non-newline characters. Newlines are position
//! markers: recorded against the original text, stripped before the
//! transform, and reinserted afterward at the recorded offsets.

/// Split `text` into its non-newline characters and the char offsets (in the
/// original text) where newline sequences started.
///
/// Any newline sequence counts — `\r\n`, `\n`, or a lone `\r` — and each is
/// recorded once at its starting offset. Reinsertion always emits `\n`, so
/// CRLF input is normalized to LF across a transform.
pub(crate) fn extract_newlines(text: &str) -> (Vec<char>, Vec<usize>) {
    let chars: Vec<char> = text.chars().collect();
    let mut flat = Vec::with_capacity(chars.len());
    let mut offsets = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\r' => {
                offsets.push(i);
                i += if chars.get(i + 1) == Some(&'\n') { 2 } else { 1 };
            }
            '\n' => {
                offsets.push(i);
                i += 1;
            }
            c => {
                flat.push(c);
                i += 1;
            }
        }
    }
    (flat, offsets)
}

/// Reinsert newlines into `flat` at the recorded offsets, ascending.
///
/// Insertion happens into the live buffer, so each insertion shifts the
/// effective index of later ones exactly as the offsets expect. An offset
/// at or beyond the current buffer length is silently dropped, which
/// happens when a trailing newline fell inside padding that was never
/// emitted.
pub(crate) fn reinsert_newlines(mut flat: Vec<char>, offsets: &[usize]) -> Vec<char> {
    for &pos in offsets {
        if pos < flat.len() {
            flat.insert(pos, '\n');
        }
    }
    flat
}
