//! Plugboard (Steckerbrett): pairwise letter swaps at both ends of the
//! signal path.
//!
//! Each patch cable connects two letters and swaps them in both directions,
//! so the board is its own inverse. Unpatched letters pass through
//! unchanged. The Wehrmacht issued ten cables per machine, which bounds the
//! pair count.

use crate::error::ValidationError;
use crate::letter::Letter;

/// Number of patch cables issued with the machine.
pub(crate) const MAX_PAIRS: usize = 10;

/// The plugboard substitution, materialized as a full 26-entry table.
#[derive(Debug)]
pub(crate) struct Plugboard {
    mapping: [u8; 26],
}

impl Plugboard {
    /// Validates the pair list and builds the board.
    ///
    /// # Parameters
    /// - `pairs`: Patched letter pairs, case-insensitive.
    ///
    /// # Errors
    /// - [`ValidationError::PlugboardTooLarge`] for more than 10 pairs.
    /// - [`ValidationError::PlugboardNonAlphabetic`] for a non-letter entry.
    /// - [`ValidationError::PlugboardDuplicateLetter`] when a letter is
    ///   already patched by an earlier pair.
    #[allow(dead_code)]
    pub(crate) fn new(pairs: &[(char, char)]) -> Result<Self, ValidationError> {
        let letter_pairs = Self::validate(pairs)?;
        Ok(Self::from_letter_pairs(&letter_pairs))
    }

    /// Checks the plugboard rules and converts the pairs to letters.
    ///
    /// Check order mirrors the physical constraints: cable count first,
    /// then socket legality, then double-plugging against the letters seen
    /// so far.
    pub(crate) fn validate(
        pairs: &[(char, char)],
    ) -> Result<Vec<(Letter, Letter)>, ValidationError> {
        if pairs.len() > MAX_PAIRS {
            return Err(ValidationError::PlugboardTooLarge(pairs.len()));
        }
        let mut used = [false; 26];
        let mut letter_pairs = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            let first = Self::socket(a)?;
            let second = Self::socket(b)?;
            if used[first.index()] {
                return Err(ValidationError::PlugboardDuplicateLetter(first.to_char()));
            }
            if used[second.index()] {
                return Err(ValidationError::PlugboardDuplicateLetter(second.to_char()));
            }
            used[first.index()] = true;
            used[second.index()] = true;
            letter_pairs.push((first, second));
        }
        Ok(letter_pairs)
    }

    /// Builds the board from pairs that already passed
    /// [`validate`](Self::validate). Disjointness is assumed, so each pair
    /// writes its two table entries without further checks.
    pub(crate) fn from_letter_pairs(pairs: &[(Letter, Letter)]) -> Self {
        let mut mapping = [0u8; 26];
        for (i, slot) in mapping.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for &(a, b) in pairs {
            mapping[a.index()] = b.index() as u8;
            mapping[b.index()] = a.index() as u8;
        }
        Plugboard { mapping }
    }

    /// Sends a letter through the board.
    pub(crate) fn swap(&self, letter: Letter) -> Letter {
        Letter::from_index(self.mapping[letter.index()])
    }

    fn socket(c: char) -> Result<Letter, ValidationError> {
        Letter::from_char(c).map_err(|_| ValidationError::PlugboardNonAlphabetic(c))
    }
}
