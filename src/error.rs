//! Error types for the Enigma machine library.
//!
//! [`ValidationError`] covers every machine-configuration failure; all of
//! them surface while an [`EnigmaSetting`](crate::EnigmaSetting) or one of
//! its parts is constructed, before any machine exists. [`EncodeError`] is
//! the only runtime error: a non-alphabetic character reaching the encoder.

use thiserror::Error;

/// Errors raised while validating a machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Rotor list length is not 3 or 4.
    #[error("Rotor count must be 3 or 4, got {0}")]
    InvalidRotorCount(usize),
    /// Ring setting is not a single alphabetic character.
    #[error("Ring setting {0:?} must be a single alphabetic character")]
    InvalidRingSetting(String),
    /// Initial rotor position is not a single alphabetic character.
    #[error("Initial position {0:?} must be a single alphabetic character")]
    InvalidInitialPosition(String),
    /// More than 10 plugboard pairs were supplied.
    #[error("Plugboard supports at most 10 cables, got {0}")]
    PlugboardTooLarge(usize),
    /// A plugboard entry is not an alphabetic character.
    #[error("Plugboard entry '{0}' is not an alphabetic character")]
    PlugboardNonAlphabetic(char),
    /// A letter appears in more than one plugboard pair.
    #[error("Letter '{0}' is used by more than one plugboard pair")]
    PlugboardDuplicateLetter(char),
}

/// A non-alphabetic character was passed to the encoder.
///
/// The machine only handles A-Z; spaces, digits and punctuation must be
/// stripped (or otherwise handled) by the caller. The offending character
/// is carried in the error. The machine state is untouched: the rotors do
/// not step for a rejected character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot encode non-alphabetic character '{0}'")]
pub struct EncodeError(pub char);
