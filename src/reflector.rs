//! Reflector (Umkehrwalze): the turnaround at the left end of the bank.
//!
//! The reflector pairs up the 26 contacts and sends the signal back
//! through the rotors on the partner wire. Because it is an involution the
//! whole machine is reciprocal, and because it has no fixed point no
//! letter ever encodes to itself.

use crate::letter::Letter;
use crate::wiring::ReflectorType;

/// The static reflector mounted left of the rotor bank.
pub(crate) struct Reflector {
    table: [u8; 26],
}

impl Reflector {
    /// Builds the reflector from a catalog type, parsing the ASCII wiring
    /// into an index table once.
    pub(crate) fn new(reflector_type: ReflectorType) -> Self {
        let mut table = [0u8; 26];
        for (i, &byte) in reflector_type.wiring().iter().enumerate() {
            table[i] = byte - b'A';
        }
        Reflector { table }
    }

    /// Turns the signal around onto the partner wire.
    pub(crate) fn reflect(&self, letter: Letter) -> Letter {
        Letter::from_index(self.table[letter.index()])
    }
}
