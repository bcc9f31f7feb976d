//! Enigma cipher machine simulator.
//!
//! Models the Wehrmacht/Kriegsmarine Enigma: a plugboard, a bank of 3 or 4
//! rotors with ring settings, and a reflector, stepped by the historical
//! pawl mechanism including its double-stepping anomaly. Machines built
//! from the same validated setting produce identical output, and because
//! the signal path is reciprocal the same call both encrypts and decrypts.
//!
//! # Architecture
//!
//! ```text
//! Rotor        (atomic unit — wired core, ring setting, turnover notch)
//!     × 3..4 mounted left to right
//! RotorAssembly (the bank — pawl stepping, forward/backward folds)
//!     + Plugboard + Reflector
//! EnigmaMachine (orchestrator — keypress cycle over the full signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message with the same daily key:
//!
//! ```
//! use enigma_machine::{EnigmaMachine, EnigmaSetting, ReflectorType, RotorConfig, RotorType};
//!
//! let setting = EnigmaSetting::new(
//!     ReflectorType::UkwB,
//!     vec![
//!         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
//!         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
//!         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
//!     ],
//!     &[('A', 'B'), ('C', 'D')],
//! )
//! .unwrap();
//!
//! let mut sender = EnigmaMachine::new(&setting);
//! let ciphertext = sender.encode_message("MEETATMIDNIGHT").unwrap();
//! assert_ne!(ciphertext, "MEETATMIDNIGHT");
//!
//! let mut receiver = EnigmaMachine::new(&setting);
//! assert_eq!(receiver.encode_message(&ciphertext).unwrap(), "MEETATMIDNIGHT");
//! ```
//!
//! Reproduce the canonical three-rotor test vector:
//!
//! ```
//! use enigma_machine::{EnigmaMachine, EnigmaSetting, ReflectorType, RotorConfig, RotorType};
//!
//! let setting = EnigmaSetting::new(
//!     ReflectorType::UkwB,
//!     vec![
//!         RotorConfig::new(RotorType::I, "A", "A").unwrap(),
//!         RotorConfig::new(RotorType::II, "A", "A").unwrap(),
//!         RotorConfig::new(RotorType::III, "A", "A").unwrap(),
//!     ],
//!     &[],
//! )
//! .unwrap();
//!
//! let mut machine = EnigmaMachine::new(&setting);
//! assert_eq!(machine.encode_message("AAAAA").unwrap(), "BDZGO");
//! ```

#![deny(clippy::all)]

pub mod error;

mod enigma;
pub(crate) mod letter;
pub(crate) mod plugboard;
pub(crate) mod reflector;
pub(crate) mod rotor;
pub(crate) mod rotor_assembly;
mod setting;
mod wiring;

pub use enigma::EnigmaMachine;
pub use setting::{EnigmaSetting, RotorConfig};
pub use wiring::{ReflectorType, RotorType};
