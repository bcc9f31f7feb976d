//! Alphabet index type used throughout the signal path.
//!
//! Every wiring table, rotor offset and plugboard swap operates on letter
//! indices 0..=25. [`Letter`] is the newtype that keeps that range closed:
//! it can only be built from an ASCII-alphabetic `char` (case-insensitive)
//! or from a table index, and all arithmetic on it wraps modulo 26.

use crate::error::EncodeError;

/// Number of letters in the machine alphabet.
pub(crate) const ALPHABET_LEN: u8 = 26;

/// A single letter of the machine alphabet, stored as an index in 0..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Letter(u8);

impl Letter {
    /// Converts an input character to a letter index.
    ///
    /// Accepts `a..=z` and `A..=Z`; case is discarded. Anything else is the
    /// one runtime failure of the machine.
    ///
    /// # Errors
    /// Returns [`EncodeError`] carrying the offending character.
    pub(crate) fn from_char(c: char) -> Result<Self, EncodeError> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(EncodeError(c))
        }
    }

    /// Wraps a raw table index into a letter. Values are reduced modulo 26,
    /// so wiring-table outputs (already 0..=25) pass through unchanged.
    pub(crate) fn from_index(index: u8) -> Self {
        Letter(index % ALPHABET_LEN)
    }

    /// Renders the letter as an uppercase character.
    pub(crate) fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Index of the letter in 0..=25.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Adds a signed offset to the letter, wrapping modulo 26.
    ///
    /// Offsets stay within ±25 in practice (a rotor's net displacement),
    /// well inside the `i16` arithmetic used here.
    pub(crate) fn offset_by(self, offset: i8) -> Self {
        let shifted = (self.0 as i16 + offset as i16).rem_euclid(ALPHABET_LEN as i16);
        Letter(shifted as u8)
    }
}
