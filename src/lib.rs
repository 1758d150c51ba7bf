//! RotorCrypt rotor cipher machine.
//!
//! RotorCrypt simulates a rotor-based substitution cipher machine: a stack
//! of rotating permutation wheels plus a fixed reflector, forming a
//! self-reciprocal polyalphabetic cipher over the 26 letters A-Z.
//!
//! The cipher is a historical curiosity and offers no real security.
//!
//! # Architecture
//!
//! ```text
//! Wiring     (validated permutation of 0..26)
//!     ↓
//! Rotor      (wiring + inverse + position + notch)
//! Reflector  (fixed self-inverse wiring)
//!     ↓ N rotors, fast rotor first
//! Machine    (stepping cascade + forward / reflect / backward signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the historical configuration:
//!
//! ```
//! use rotorcrypt::Machine;
//!
//! let mut machine = Machine::new();
//! machine.set_positions("AAA").unwrap();
//! let ciphertext = machine.encrypt("HELLO WORLD");
//! assert_eq!(ciphertext, "VQHFJ OFANZ");
//!
//! machine.set_positions("AAA").unwrap();
//! assert_eq!(machine.encrypt(&ciphertext), "HELLO WORLD");
//! ```
//!
//! Build a machine from a custom configuration:
//!
//! ```
//! use rotorcrypt::config::{MachineConfig, RotorSpec, ROTOR_I, ROTOR_III};
//! use rotorcrypt::{Machine, Wiring};
//!
//! let config = MachineConfig::new(
//!     vec![
//!         RotorSpec::from_letters(ROTOR_III, 'V').unwrap(),
//!         RotorSpec::from_letters(ROTOR_I, 'Q').unwrap(),
//!     ],
//!     Wiring::from_letters("ZYXWVUTSRQPONMLKJIHGFEDCBA").unwrap(),
//! )
//! .with_positions("MK");
//!
//! let mut machine = Machine::from_config(&config).unwrap();
//! let ciphertext = machine.encrypt("attack at dawn");
//! assert_ne!(ciphertext, "ATTACK AT DAWN");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;

mod machine;
mod pair_cipher;
mod reflector;
mod rotor;
mod wiring;

pub use config::{MachineConfig, RotorSpec};
pub use error::{Result, RotorCryptError};
pub use machine::Machine;
pub use pair_cipher::{PairCipher, PairTable};
pub use reflector::{Reflector, REFLECTOR_B};
pub use rotor::Rotor;
pub use wiring::Wiring;
