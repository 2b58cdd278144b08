//! Square and coordinate conversions for algebraic notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices. The classifier composes these; they return `Option` and
//! leave error reporting (which quotes the whole movetext token) to the
//! caller.

use crate::board::piece_types::{file_of, rank_of, Square};

/// Zero-based file index of a file letter, `'a'..='h'`.
#[inline]
pub fn file_index(letter: char) -> Option<u8> {
    match letter {
        'a'..='h' => Some(letter as u8 - b'a'),
        _ => None,
    }
}

/// Zero-based rank index of a rank digit, `'1'..='8'`.
#[inline]
pub fn rank_index(digit: char) -> Option<u8> {
    match digit {
        '1'..='8' => Some(digit as u8 - b'1'),
        _ => None,
    }
}

/// Parse a two-character square like `e4` into a square index.
#[inline]
pub fn square_from_text(text: &str) -> Option<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = file_index(bytes[0] as char)?;
    let rank = rank_index(bytes[1] as char)?;
    Some(rank * 8 + file)
}

/// Convert a square index (`0..=63`) to its two-character coordinates.
#[inline]
pub fn square_to_text(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}
