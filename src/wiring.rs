//! Rotor and reflector wiring catalog.
//!
//! Wirings follow the Wehrmacht/Kriegsmarine hardware: rotors I-V as issued
//! from 1930/1938, the naval rotors VI-VIII with their second turnover
//! notch, and the two standard reflectors. Each table maps the letter at
//! index position `i` to the wired output letter; notches name the window
//! letters at which the stepping pawl engages.
//!
//! The catalog is closed: both enums are matched exhaustively, so adding a
//! rotor to one and forgetting its wiring is a compile error, and no lookup
//! can fail at runtime.

use std::fmt;

/// The eight historical rotor wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorType {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl RotorType {
    /// All catalog rotors, in issue order.
    pub const ALL: [RotorType; 8] = [
        RotorType::I,
        RotorType::II,
        RotorType::III,
        RotorType::IV,
        RotorType::V,
        RotorType::VI,
        RotorType::VII,
        RotorType::VIII,
    ];

    /// The substitution wiring of this rotor.
    ///
    /// # Returns
    /// 26 uppercase ASCII bytes; index `i` holds the output letter for
    /// input letter `i`. Every table is a bijection of the alphabet
    /// (checked by tests, not at runtime).
    pub(crate) fn wiring(self) -> &'static [u8; 26] {
        match self {
            RotorType::I => b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorType::II => b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorType::III => b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorType::IV => b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorType::V => b"VZBRGITYUPSDNHLXAWMJQOFECK",
            RotorType::VI => b"JPGVOUMFYQBENHZRDKASXLICTW",
            RotorType::VII => b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
            RotorType::VIII => b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
        }
    }

    /// The turnover notch letters of this rotor.
    ///
    /// # Returns
    /// The window letters at which the pawl engages on the next keypress.
    /// Rotors I-V carry one notch; the naval rotors VI-VIII carry two
    /// (Z and M), so they turn their neighbor twice per revolution.
    pub(crate) fn notches(self) -> &'static [u8] {
        match self {
            RotorType::I => b"Q",
            RotorType::II => b"E",
            RotorType::III => b"V",
            RotorType::IV => b"J",
            RotorType::V => b"Z",
            RotorType::VI => b"ZM",
            RotorType::VII => b"ZM",
            RotorType::VIII => b"ZM",
        }
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self {
            RotorType::I => "I",
            RotorType::II => "II",
            RotorType::III => "III",
            RotorType::IV => "IV",
            RotorType::V => "V",
            RotorType::VI => "VI",
            RotorType::VII => "VII",
            RotorType::VIII => "VIII",
        };
        write!(f, "{}", numeral)
    }
}

/// The two standard reflectors (Umkehrwalzen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorType {
    UkwB,
    UkwC,
}

impl ReflectorType {
    /// Both catalog reflectors.
    pub const ALL: [ReflectorType; 2] = [ReflectorType::UkwB, ReflectorType::UkwC];

    /// The reflection wiring of this reflector.
    ///
    /// # Returns
    /// 26 uppercase ASCII bytes forming a fixed-point-free involution:
    /// the table is its own inverse and never maps a letter to itself
    /// (checked by tests, not at runtime).
    pub(crate) fn wiring(self) -> &'static [u8; 26] {
        match self {
            ReflectorType::UkwB => b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorType::UkwC => b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }
}

impl fmt::Display for ReflectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectorType::UkwB => "UKW-B",
            ReflectorType::UkwC => "UKW-C",
        };
        write!(f, "{}", name)
    }
}
