//! The mounted rotor bank and its pawl-driven stepping mechanism.
//!
//! Rotors are listed left to right as an operator reads the windows: index
//! 0 sits next to the reflector and the last rotor takes the signal first
//! and steps on every keypress. The pawls only ever reach the three
//! rightmost wheels, so the leading wheel of a naval four-rotor set is set
//! by hand and never moves.
//!
//! Stepping is decided from the pre-step state: the pawls sample the
//! notches while the keys are at rest, then every engaged wheel moves at
//! once. Sampling and moving in a single pass would lose the double-step
//! anomaly.

use crate::error::ValidationError;
use crate::letter::Letter;
use crate::rotor::Rotor;

/// An ordered bank of 3 or 4 rotors.
#[derive(Debug)]
pub(crate) struct RotorAssembly {
    rotors: Vec<Rotor>,
    /// Index of the slow wheel — the leftmost rotor the pawls can reach.
    stepping_base: usize,
}

impl RotorAssembly {
    /// Mounts a rotor bank.
    ///
    /// # Parameters
    /// - `rotors`: Rotors in window order, leftmost first.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidRotorCount`] unless exactly 3 or 4
    /// rotors are supplied.
    pub(crate) fn new(rotors: Vec<Rotor>) -> Result<Self, ValidationError> {
        if !(3..=4).contains(&rotors.len()) {
            return Err(ValidationError::InvalidRotorCount(rotors.len()));
        }
        let stepping_base = rotors.len() - 3;
        Ok(RotorAssembly {
            rotors,
            stepping_base,
        })
    }

    /// Advances the bank exactly as one keypress does.
    ///
    /// Notch states are read before anything moves, then the engaged wheels
    /// step together:
    /// - the fast (rightmost) wheel always steps;
    /// - the middle wheel steps when the fast wheel sat at its notch, or
    ///   when the middle wheel itself did (the double-step anomaly);
    /// - the slow wheel steps when the middle wheel sat at its notch.
    pub(crate) fn step_all(&mut self) {
        let fast = self.stepping_base + 2;
        let middle = self.stepping_base + 1;
        let slow = self.stepping_base;

        let fast_at_notch = self.rotors[fast].at_notch();
        let middle_at_notch = self.rotors[middle].at_notch();

        self.rotors[fast].step();
        if fast_at_notch || middle_at_notch {
            self.rotors[middle].step();
        }
        if middle_at_notch {
            self.rotors[slow].step();
        }
    }

    /// Folds a letter through every rotor toward the reflector, entry side
    /// first.
    pub(crate) fn encode_forward(&self, letter: Letter) -> Letter {
        self.rotors
            .iter()
            .rev()
            .fold(letter, |l, rotor| rotor.forward(l))
    }

    /// Folds a letter back out through every rotor, reflector side first.
    pub(crate) fn encode_backward(&self, letter: Letter) -> Letter {
        self.rotors.iter().fold(letter, |l, rotor| rotor.backward(l))
    }

    /// Rewinds every rotor to its configured starting position.
    pub(crate) fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.reset();
        }
    }

    /// The window letters, leftmost first.
    pub(crate) fn positions(&self) -> String {
        self.rotors
            .iter()
            .map(|rotor| rotor.position().to_char())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring::RotorType;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn bank(wheels: &[(RotorType, char)]) -> RotorAssembly {
        let rotors = wheels
            .iter()
            .map(|&(rotor_type, position)| {
                Rotor::new(rotor_type, letter('A'), letter(position))
            })
            .collect();
        RotorAssembly::new(rotors).unwrap()
    }

    #[test]
    fn test_rejects_wrong_rotor_count() {
        let two = vec![
            Rotor::new(RotorType::I, letter('A'), letter('A')),
            Rotor::new(RotorType::II, letter('A'), letter('A')),
        ];
        assert_eq!(
            RotorAssembly::new(two).unwrap_err(),
            ValidationError::InvalidRotorCount(2)
        );
        assert_eq!(
            RotorAssembly::new(Vec::new()).unwrap_err(),
            ValidationError::InvalidRotorCount(0)
        );
    }

    #[test]
    fn test_assembly_debug_format() {
        // unwrap_err needs the assembly and its rotors to be debug-printable
        let assembly = bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        let rendered = format!("{:?}", assembly);
        assert!(rendered.contains("RotorAssembly"));
        assert!(rendered.contains("notch_mask"), "rotor fields render through the bank");
    }

    #[test]
    fn test_fast_wheel_steps_every_time() {
        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        assembly.step_all();
        assert_eq!(assembly.positions(), "AAB");
        assembly.step_all();
        assert_eq!(assembly.positions(), "AAC");
    }

    #[test]
    fn test_turnover_carries_middle_wheel() {
        // Rotor III notches at V: the step out of V carries the middle
        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'V')]);
        assembly.step_all();
        assert_eq!(assembly.positions(), "ABW");
    }

    #[test]
    fn test_double_step_anomaly_walk() {
        // The canonical I/II/III walk from ADU: the middle wheel reaches
        // its own notch E and then steps again, dragging the slow wheel
        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'D'), (RotorType::III, 'U')]);
        let mut walk = Vec::new();
        for _ in 0..5 {
            assembly.step_all();
            walk.push(assembly.positions());
        }
        assert_eq!(walk, ["ADV", "AEW", "BFX", "BFY", "BFZ"]);
    }

    #[test]
    fn test_middle_wheel_self_steps_at_own_notch() {
        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'E'), (RotorType::III, 'A')]);
        assembly.step_all();
        assert_eq!(assembly.positions(), "BFB");
    }

    #[test]
    fn test_full_revolution_cadence() {
        // 26 keypresses bring the fast wheel full circle and move the
        // middle wheel exactly once
        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        for _ in 0..26 {
            assembly.step_all();
        }
        assert_eq!(assembly.positions(), "ABA");
    }

    #[test]
    fn test_double_notch_rotor_turns_twice_per_revolution() {
        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::VIII, 'Z')]);
        assembly.step_all();
        assert_eq!(assembly.positions(), "ABA", "turnover at Z");

        let mut assembly =
            bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::VIII, 'M')]);
        assembly.step_all();
        assert_eq!(assembly.positions(), "ABN", "turnover at M");
    }

    #[test]
    fn test_leading_wheel_of_four_never_steps() {
        let mut assembly = bank(&[
            (RotorType::IV, 'M'),
            (RotorType::I, 'A'),
            (RotorType::II, 'E'),
            (RotorType::III, 'A'),
        ]);
        assembly.step_all();
        // The three-wheel rules apply one slot over; the leading IV holds
        assert_eq!(assembly.positions(), "MBFB");
        for _ in 0..100 {
            assembly.step_all();
        }
        assert!(assembly.positions().starts_with('M'));
    }

    #[test]
    fn test_forward_fold_enters_at_the_right() {
        // At rest: III takes A to B, II takes B to J, I takes J to Z
        let assembly = bank(&[(RotorType::I, 'A'), (RotorType::II, 'A'), (RotorType::III, 'A')]);
        assert_eq!(assembly.encode_forward(letter('A')), letter('Z'));
    }

    #[test]
    fn test_backward_fold_inverts_forward() {
        let assembly = bank(&[(RotorType::I, 'G'), (RotorType::II, 'K'), (RotorType::III, 'P')]);
        for c in 'A'..='Z' {
            assert_eq!(
                assembly.encode_backward(assembly.encode_forward(letter(c))),
                letter(c),
                "fold roundtrip at '{}'",
                c
            );
        }
    }

    #[test]
    fn test_reset_rewinds_the_bank() {
        let mut assembly =
            bank(&[(RotorType::I, 'F'), (RotorType::II, 'R'), (RotorType::III, 'Q')]);
        for _ in 0..40 {
            assembly.step_all();
        }
        assert_ne!(assembly.positions(), "FRQ");
        assembly.reset();
        assert_eq!(assembly.positions(), "FRQ");
    }
}
