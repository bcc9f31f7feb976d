//! Validated machine configuration (the daily key).
//!
//! An [`EnigmaSetting`] captures everything an operator dials in before
//! transmitting: reflector choice, rotor selection with ring and starting
//! positions, and the plugboard pairs. Every rule is checked while the
//! setting is constructed, so a setting that exists is always safe to
//! build machines from — any number of them, which is how the receiving
//! side of a net gets an identical machine.

use crate::error::ValidationError;
use crate::letter::Letter;
use crate::plugboard::Plugboard;
use crate::wiring::{ReflectorType, RotorType};

/// One rotor slot of the daily key: which wheel goes in, its ring setting
/// and its starting window letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorConfig {
    rotor_type: RotorType,
    ring: Letter,
    initial: Letter,
}

impl RotorConfig {
    /// Validates one rotor slot.
    ///
    /// Ring and starting position arrive as strings the way key sheets
    /// write them; each must hold exactly one alphabetic character, either
    /// case.
    ///
    /// # Parameters
    /// - `rotor_type`: The catalog wheel mounted in this slot.
    /// - `ring`: Ring setting (Ringstellung), e.g. `"A"`.
    /// - `initial`: Starting window letter (Grundstellung), e.g. `"Q"`.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidRingSetting`] or
    /// [`ValidationError::InvalidInitialPosition`] when a string is not a
    /// single alphabetic character.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{RotorConfig, RotorType};
    ///
    /// let slot = RotorConfig::new(RotorType::IV, "b", "Q").unwrap();
    /// assert_eq!(slot.ring(), 'B');
    /// assert_eq!(slot.initial(), 'Q');
    /// ```
    ///
    /// ```
    /// use enigma_machine::{RotorConfig, RotorType};
    ///
    /// assert!(RotorConfig::new(RotorType::I, "AB", "A").is_err());
    /// assert!(RotorConfig::new(RotorType::I, "A", "9").is_err());
    /// ```
    pub fn new(rotor_type: RotorType, ring: &str, initial: &str) -> Result<Self, ValidationError> {
        let ring = parse_setting_char(ring)
            .ok_or_else(|| ValidationError::InvalidRingSetting(ring.to_string()))?;
        let initial = parse_setting_char(initial)
            .ok_or_else(|| ValidationError::InvalidInitialPosition(initial.to_string()))?;
        Ok(RotorConfig {
            rotor_type,
            ring,
            initial,
        })
    }

    /// The catalog wheel mounted in this slot.
    pub fn rotor_type(&self) -> RotorType {
        self.rotor_type
    }

    /// The ring setting as an uppercase character.
    pub fn ring(&self) -> char {
        self.ring.to_char()
    }

    /// The starting window letter as an uppercase character.
    pub fn initial(&self) -> char {
        self.initial.to_char()
    }

    pub(crate) fn ring_letter(&self) -> Letter {
        self.ring
    }

    pub(crate) fn initial_letter(&self) -> Letter {
        self.initial
    }
}

/// Parses a one-character alphabetic setting string.
fn parse_setting_char(s: &str) -> Option<Letter> {
    let mut chars = s.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Letter::from_char(first).ok()
}

/// A complete validated machine configuration.
///
/// Immutable once constructed; cloneable and comparable so a daily key can
/// be shared, stored and checked for equality in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaSetting {
    reflector: ReflectorType,
    rotors: Vec<RotorConfig>,
    plugboard: Vec<(Letter, Letter)>,
}

impl EnigmaSetting {
    /// Validates a complete machine configuration.
    ///
    /// # Parameters
    /// - `reflector`: Which reflector is installed.
    /// - `rotors`: 3 or 4 slots in window order, leftmost (reflector side)
    ///   first. The last slot is the fast wheel next to the entry disc.
    /// - `plugboard`: Up to 10 patched pairs, case-insensitive, no letter
    ///   in more than one pair.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidRotorCount`] for a rotor list
    /// that is not 3 or 4 long, or any plugboard error from
    /// [the plugboard rules](ValidationError).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaSetting, ReflectorType, RotorConfig, RotorType};
    ///
    /// let setting = EnigmaSetting::new(
    ///     ReflectorType::UkwB,
    ///     vec![
    ///         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
    ///     ],
    ///     &[('A', 'B')],
    /// )
    /// .unwrap();
    /// assert_eq!(setting.rotors().len(), 3);
    /// ```
    ///
    /// ```
    /// use enigma_machine::{EnigmaSetting, ReflectorType, RotorConfig, RotorType};
    ///
    /// let too_few = EnigmaSetting::new(
    ///     ReflectorType::UkwB,
    ///     vec![
    ///         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
    ///     ],
    ///     &[],
    /// );
    /// assert!(too_few.is_err());
    /// ```
    pub fn new(
        reflector: ReflectorType,
        rotors: Vec<RotorConfig>,
        plugboard: &[(char, char)],
    ) -> Result<Self, ValidationError> {
        if !(3..=4).contains(&rotors.len()) {
            return Err(ValidationError::InvalidRotorCount(rotors.len()));
        }
        let plugboard = Plugboard::validate(plugboard)?;
        Ok(EnigmaSetting {
            reflector,
            rotors,
            plugboard,
        })
    }

    /// The installed reflector.
    pub fn reflector(&self) -> ReflectorType {
        self.reflector
    }

    /// The rotor slots in window order, leftmost first.
    pub fn rotors(&self) -> &[RotorConfig] {
        &self.rotors
    }

    /// The validated plugboard pairs as uppercase characters.
    pub fn plugboard(&self) -> Vec<(char, char)> {
        self.plugboard
            .iter()
            .map(|&(a, b)| (a.to_char(), b.to_char()))
            .collect()
    }

    pub(crate) fn plugboard_letter_pairs(&self) -> &[(Letter, Letter)] {
        &self.plugboard
    }
}
