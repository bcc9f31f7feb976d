//! Rotor (Walze): a rotating substitution wheel.
//!
//! A rotor is a fixed wiring core inside a rotatable shell. Rotation moves
//! the core relative to the static contacts on either side; the ring
//! setting (Ringstellung) shifts the core the opposite way relative to the
//! window letter and the turnover notch. Both displacements cancel out of
//! the signal as it leaves the wheel, which is why only their difference
//! appears in the contact arithmetic below.
//!
//! Each rotor keeps its configured starting position so the machine can be
//! rewound without rebuilding it.

use crate::letter::Letter;
use crate::wiring::RotorType;

/// A single rotor with its current rotational state.
#[derive(Debug)]
pub(crate) struct Rotor {
    forward_table: [u8; 26],
    inverse_table: [u8; 26],
    notch_mask: u32,
    ring: Letter,
    initial: Letter,
    position: Letter,
}

impl Rotor {
    /// Builds a rotor from a catalog wheel and its two settings.
    ///
    /// The ASCII wiring is parsed once into index tables; the inverse table
    /// is derived by inverting the forward bijection. The notch letters are
    /// folded into a bitmask for the stepping check.
    ///
    /// # Parameters
    /// - `rotor_type`: Which catalog wheel is mounted.
    /// - `ring`: Ring setting (Ringstellung).
    /// - `initial`: Starting window position (Grundstellung).
    pub(crate) fn new(rotor_type: RotorType, ring: Letter, initial: Letter) -> Self {
        let wiring = rotor_type.wiring();
        let mut forward_table = [0u8; 26];
        let mut inverse_table = [0u8; 26];
        for (i, &byte) in wiring.iter().enumerate() {
            let out = byte - b'A';
            forward_table[i] = out;
            inverse_table[out as usize] = i as u8;
        }
        let mut notch_mask = 0u32;
        for &notch in rotor_type.notches() {
            notch_mask |= 1 << (notch - b'A');
        }
        Rotor {
            forward_table,
            inverse_table,
            notch_mask,
            ring,
            initial,
            position: initial,
        }
    }

    /// Net displacement of the wiring core relative to the static contacts:
    /// rotation advances it, the ring setting pulls it back.
    fn core_shift(&self) -> i8 {
        self.position.index() as i8 - self.ring.index() as i8
    }

    /// Maps a letter through the wiring toward the reflector.
    ///
    /// The entering signal is offset onto the rotated core, wired through,
    /// and offset back into the static frame on exit.
    pub(crate) fn forward(&self, letter: Letter) -> Letter {
        let shift = self.core_shift();
        let contact = letter.offset_by(shift);
        let wired = Letter::from_index(self.forward_table[contact.index()]);
        wired.offset_by(-shift)
    }

    /// Maps a letter through the inverse wiring, away from the reflector.
    pub(crate) fn backward(&self, letter: Letter) -> Letter {
        let shift = self.core_shift();
        let contact = letter.offset_by(shift);
        let wired = Letter::from_index(self.inverse_table[contact.index()]);
        wired.offset_by(-shift)
    }

    /// True when the turnover notch is under the pawl, i.e. the next step
    /// will carry the neighbor to the left.
    pub(crate) fn at_notch(&self) -> bool {
        (self.notch_mask >> self.position.index()) & 1 != 0
    }

    /// Advances the rotor by one position, wrapping Z to A.
    pub(crate) fn step(&mut self) {
        self.position = self.position.offset_by(1);
    }

    /// Rewinds the rotor to its configured starting position.
    pub(crate) fn reset(&mut self) {
        self.position = self.initial;
    }

    /// The letter currently visible in the window.
    pub(crate) fn position(&self) -> Letter {
        self.position
    }
}
