//! Letter/index conversion and modular arithmetic over the 26-letter alphabet.
//!
//! Every substitution in the machine works on indices `0..26` rather than
//! on `char`s. These helpers are the only place where the two
//! representations meet.

/// Number of letters on every rotor and on the reflector.
pub(crate) const ALPHABET_LEN: u8 = 26;

/// Converts a letter to its alphabet index (`A` → 0 … `Z` → 25).
///
/// Case-insensitive. Only ASCII letters are accepted.
///
/// # Parameters
/// - `letter`: The character to convert.
///
/// # Returns
/// `Some(index)` for `A`–`Z`/`a`–`z`, `None` for anything else.
pub(crate) fn letter_index(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Converts an alphabet index back to an uppercase letter.
///
/// Indices are reduced modulo 26, so the result is always `A`–`Z`.
pub(crate) fn index_letter(index: u8) -> char {
    (b'A' + index % ALPHABET_LEN) as char
}

/// Adds `offset` to `index`, wrapping around the alphabet.
pub(crate) fn shift(index: u8, offset: u8) -> u8 {
    (index % ALPHABET_LEN + offset % ALPHABET_LEN) % ALPHABET_LEN
}

/// Subtracts `offset` from `index`, wrapping around the alphabet.
pub(crate) fn unshift(index: u8, offset: u8) -> u8 {
    (index % ALPHABET_LEN + ALPHABET_LEN - offset % ALPHABET_LEN) % ALPHABET_LEN
}
