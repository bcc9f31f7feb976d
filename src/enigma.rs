//! The assembled machine and its keypress cycle.
//!
//! Orchestrates the plugboard, the rotor bank and the reflector. One
//! keypress is: step the rotors, then trace the signal through the
//! plugboard, right-to-left through the rotors, the reflector,
//! left-to-right back through the rotors, and the plugboard again.

use crate::error::EncodeError;
use crate::letter::Letter;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::rotor_assembly::RotorAssembly;
use crate::setting::EnigmaSetting;

/// A configured Enigma machine with live rotor state.
///
/// # Architecture
///
/// ```text
/// keyboard → Plugboard → RotorAssembly (right → left) → Reflector
///                                                           │
/// lampboard ← Plugboard ← RotorAssembly (left → right) ←────┘
/// ```
///
/// The rotors step **before** the signal passes, so the first keypress is
/// already encoded at the stepped position. Because the reflector folds
/// the path back through the same wiring, encoding is reciprocal: a second
/// machine on the same [`EnigmaSetting`] turns ciphertext back into
/// plaintext, and no letter ever encodes to itself.
pub struct EnigmaMachine {
    plugboard: Plugboard,
    rotors: RotorAssembly,
    reflector: Reflector,
}

impl EnigmaMachine {
    /// Builds a machine from a validated setting.
    ///
    /// Infallible: every configuration rule was enforced when the setting
    /// was constructed, and the same setting can build any number of
    /// identical machines.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaMachine, EnigmaSetting, ReflectorType, RotorConfig, RotorType};
    ///
    /// let setting = EnigmaSetting::new(
    ///     ReflectorType::UkwB,
    ///     vec![
    ///         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
    ///     ],
    ///     &[],
    /// )
    /// .unwrap();
    ///
    /// let mut machine = EnigmaMachine::new(&setting);
    /// assert_eq!(machine.encode_message("AAAAA").unwrap(), "BDZGO");
    /// ```
    pub fn new(setting: &EnigmaSetting) -> Self {
        let rotors: Vec<Rotor> = setting
            .rotors()
            .iter()
            .map(|slot| Rotor::new(slot.rotor_type(), slot.ring_letter(), slot.initial_letter()))
            .collect();
        let rotors =
            RotorAssembly::new(rotors).expect("rotor count was validated by EnigmaSetting");
        EnigmaMachine {
            plugboard: Plugboard::from_letter_pairs(setting.plugboard_letter_pairs()),
            rotors,
            reflector: Reflector::new(setting.reflector()),
        }
    }

    /// Encodes one character through the full signal path.
    ///
    /// The rotor bank steps first, exactly as the mechanical keypress
    /// moved the wheels before closing the circuit. Input is
    /// case-insensitive; output is always uppercase.
    ///
    /// # Errors
    /// Returns [`EncodeError`] for a non-alphabetic character. The rotors
    /// do not step for a rejected character, so encoder and decoder stay
    /// in lockstep over the accepted portion of a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaMachine, EnigmaSetting, ReflectorType, RotorConfig, RotorType};
    ///
    /// let setting = EnigmaSetting::new(
    ///     ReflectorType::UkwB,
    ///     vec![
    ///         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
    ///     ],
    ///     &[],
    /// )
    /// .unwrap();
    ///
    /// let mut machine = EnigmaMachine::new(&setting);
    /// assert_eq!(machine.encode_char('A').unwrap(), 'B');
    /// assert!(machine.encode_char(' ').is_err());
    /// ```
    pub fn encode_char(&mut self, input: char) -> Result<char, EncodeError> {
        let letter = Letter::from_char(input)?;
        self.rotors.step_all();
        let swapped = self.plugboard.swap(letter);
        let through = self.rotors.encode_forward(swapped);
        let reflected = self.reflector.reflect(through);
        let back = self.rotors.encode_backward(reflected);
        Ok(self.plugboard.swap(back).to_char())
    }

    /// Encodes a message character by character.
    ///
    /// Output length equals input length on success. Decoding is the same
    /// call on a machine built from the same setting.
    ///
    /// # Errors
    /// Fails fast on the first non-alphabetic character; everything before
    /// it has already stepped the machine.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaMachine, EnigmaSetting, ReflectorType, RotorConfig, RotorType};
    ///
    /// let setting = EnigmaSetting::new(
    ///     ReflectorType::UkwB,
    ///     vec![
    ///         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
    ///     ],
    ///     &[],
    /// )
    /// .unwrap();
    ///
    /// let mut sender = EnigmaMachine::new(&setting);
    /// let ciphertext = sender.encode_message("HELLOWORLD").unwrap();
    ///
    /// let mut receiver = EnigmaMachine::new(&setting);
    /// assert_eq!(receiver.encode_message(&ciphertext).unwrap(), "HELLOWORLD");
    /// ```
    pub fn encode_message(&mut self, message: &str) -> Result<String, EncodeError> {
        let mut output = String::with_capacity(message.len());
        for c in message.chars() {
            output.push(self.encode_char(c)?);
        }
        Ok(output)
    }

    /// Rewinds every rotor to its configured starting position.
    ///
    /// After a reset the machine reproduces its first-message output
    /// exactly, as if freshly built from the setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_machine::{EnigmaMachine, EnigmaSetting, ReflectorType, RotorConfig, RotorType};
    ///
    /// let setting = EnigmaSetting::new(
    ///     ReflectorType::UkwB,
    ///     vec![
    ///         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
    ///         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
    ///     ],
    ///     &[],
    /// )
    /// .unwrap();
    ///
    /// let mut machine = EnigmaMachine::new(&setting);
    /// let first = machine.encode_message("TOPSECRET").unwrap();
    /// machine.reset();
    /// let second = machine.encode_message("TOPSECRET").unwrap();
    /// assert_eq!(first, second);
    /// ```
    pub fn reset(&mut self) {
        self.rotors.reset();
    }

    /// The letters currently visible in the rotor windows, leftmost first.
    pub fn rotor_positions(&self) -> String {
        self.rotors.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::RotorConfig;
    use crate::wiring::{ReflectorType, RotorType};

    fn setting(
        reflector: ReflectorType,
        wheels: &[(RotorType, &str, &str)],
        plugboard: &[(char, char)],
    ) -> EnigmaSetting {
        let rotors = wheels
            .iter()
            .map(|&(rotor_type, ring, initial)| {
                RotorConfig::new(rotor_type, ring, initial).unwrap()
            })
            .collect();
        EnigmaSetting::new(reflector, rotors, plugboard).unwrap()
    }

    fn basic_setting() -> EnigmaSetting {
        setting(
            ReflectorType::UkwB,
            &[
                (RotorType::I, "A", "A"),
                (RotorType::II, "A", "A"),
                (RotorType::III, "A", "A"),
            ],
            &[],
        )
    }

    #[test]
    fn test_machine_steps_before_encoding() {
        let mut machine = EnigmaMachine::new(&basic_setting());
        machine.encode_char('A').unwrap();
        assert_eq!(machine.rotor_positions(), "AAB");
    }

    #[test]
    fn test_positions_after_message() {
        let mut machine = EnigmaMachine::new(&basic_setting());
        machine.encode_message("AAAAA").unwrap();
        assert_eq!(machine.rotor_positions(), "AAF");
    }

    #[test]
    fn test_case_insensitive_input() {
        let mut upper = EnigmaMachine::new(&basic_setting());
        let mut lower = EnigmaMachine::new(&basic_setting());
        assert_eq!(
            upper.encode_message("HELLO").unwrap(),
            lower.encode_message("hello").unwrap()
        );
    }

    #[test]
    fn test_rejected_character_does_not_step() {
        let mut machine = EnigmaMachine::new(&basic_setting());
        machine.encode_char('A').unwrap();
        assert_eq!(machine.encode_char('7'), Err(EncodeError('7')));
        assert_eq!(
            machine.rotor_positions(),
            "AAB",
            "rejected input must not move the rotors"
        );
    }

    #[test]
    fn test_encode_message_fails_fast() {
        let mut machine = EnigmaMachine::new(&basic_setting());
        assert_eq!(machine.encode_message("AB CD"), Err(EncodeError(' ')));
        // Two accepted characters stepped the machine before the failure
        assert_eq!(machine.rotor_positions(), "AAC");
    }

    #[test]
    fn test_reciprocity_with_plugboard() {
        let key = setting(
            ReflectorType::UkwC,
            &[
                (RotorType::V, "P", "X"),
                (RotorType::IV, "D", "W"),
                (RotorType::III, "Q", "B"),
            ],
            &[('A', 'T'), ('C', 'K')],
        );
        let mut sender = EnigmaMachine::new(&key);
        let mut receiver = EnigmaMachine::new(&key);
        let ciphertext = sender.encode_message("ATTACKATDAWN").unwrap();
        assert_eq!(receiver.encode_message(&ciphertext).unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_no_letter_encodes_to_itself() {
        let mut machine = EnigmaMachine::new(&basic_setting());
        for _ in 0..4 {
            for c in 'A'..='Z' {
                let out = machine.encode_char(c).unwrap();
                assert_ne!(out, c, "'{}' encoded to itself", c);
            }
        }
    }

    #[test]
    fn test_identical_machines_from_one_setting() {
        let key = setting(
            ReflectorType::UkwB,
            &[
                (RotorType::VI, "B", "F"),
                (RotorType::VII, "X", "K"),
                (RotorType::VIII, "C", "W"),
            ],
            &[('Q', 'W'), ('E', 'R'), ('T', 'Y')],
        );
        let mut first = EnigmaMachine::new(&key);
        let mut second = EnigmaMachine::new(&key);
        assert_eq!(
            first.encode_message("THEQUICKBROWNFOX").unwrap(),
            second.encode_message("THEQUICKBROWNFOX").unwrap()
        );
    }

    #[test]
    fn test_reset_reproduces_output() {
        let mut machine = EnigmaMachine::new(&basic_setting());
        let first = machine.encode_message("ENIGMA").unwrap();
        machine.reset();
        assert_eq!(machine.rotor_positions(), "AAA");
        let second = machine.encode_message("ENIGMA").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_four_rotor_machine() {
        let key = setting(
            ReflectorType::UkwB,
            &[
                (RotorType::IV, "A", "A"),
                (RotorType::I, "A", "A"),
                (RotorType::II, "A", "A"),
                (RotorType::III, "A", "A"),
            ],
            &[],
        );
        let mut machine = EnigmaMachine::new(&key);
        assert_eq!(machine.encode_message("AAAAA").unwrap(), "BBZZT");
        assert_eq!(machine.rotor_positions(), "AAAF");
    }
}
