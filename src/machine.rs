//! Machine: rotor stack plus reflector.
//!
//! Orchestrates the per-letter stepping cascade and the full signal path:
//! forward through the rotors, through the reflector, and back through the
//! rotors in the opposite order. The cipher is self-reciprocal, so the same
//! operation encrypts and decrypts when the key is reset between calls.

use tracing::{debug, trace};

use crate::alphabet::{to_code, to_letter, ALPHABET_LEN};
use crate::config::{MachineConfig, RotorSpec};
use crate::error::{Result, RotorCryptError};
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wiring::Wiring;

/// Rotor cipher machine.
///
/// # Architecture
///
/// `rotors[0]` is the fast rotor: it steps on every letter. A rotor carries
/// its left neighbour only when it sat on its notch just before stepping.
/// The stack order and membership never change after construction; only
/// rotor positions do.
///
/// Non-letters pass through unchanged and do not step the rotors.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Creates a machine with the historical rotors I, II, III and reflector B,
    /// all rotors at position 'A'.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Machine;
    ///
    /// let mut machine = Machine::new();
    /// machine.set_positions("AAA").unwrap();
    /// let ciphertext = machine.encrypt("HELLO WORLD");
    ///
    /// machine.set_positions("AAA").unwrap();
    /// assert_eq!(machine.decrypt(&ciphertext), "HELLO WORLD");
    /// ```
    pub fn new() -> Self {
        let config = MachineConfig::default();
        Self::build(&config.rotors, Reflector::historical())
    }

    /// Creates a machine from raw wiring tables.
    ///
    /// # Parameters
    /// - `rotor_specs`: `(wiring, notch)` pairs, fast rotor first.
    /// - `reflector`: Reflector wiring table.
    ///
    /// # Errors
    /// - [`RotorCryptError::EmptyRotorStack`] if `rotor_specs` is empty.
    /// - [`RotorCryptError::InvalidWiring`] if any table is not a permutation.
    /// - [`RotorCryptError::NonReciprocalReflector`] if the reflector is not self-inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Machine;
    ///
    /// let identity: [u8; 26] = core::array::from_fn(|i| i as u8);
    /// let reversed: [u8; 26] = core::array::from_fn(|i| 25 - i as u8);
    /// let machine = Machine::with_config(&[(identity, 5)], reversed).unwrap();
    /// assert_eq!(machine.num_rotors(), 1);
    ///
    /// assert!(Machine::with_config(&[], reversed).is_err());
    /// ```
    pub fn with_config(rotor_specs: &[([u8; 26], u8)], reflector: [u8; 26]) -> Result<Self> {
        let rotors = rotor_specs
            .iter()
            .map(|&(table, notch)| Ok(RotorSpec::new(Wiring::new(table)?, notch)))
            .collect::<Result<Vec<_>>>()?;
        let config = MachineConfig::new(rotors, Wiring::new(reflector)?);
        Self::from_config(&config)
    }

    /// Creates a machine from a [`MachineConfig`], applying its starting key
    /// when one is set.
    ///
    /// # Errors
    /// Any error reported by [`MachineConfig::validate`].
    pub fn from_config(config: &MachineConfig) -> Result<Self> {
        config.validate()?;
        let reflector = Reflector::new(config.reflector)?;
        let mut machine = Self::build(&config.rotors, reflector);
        if let Some(key) = &config.positions {
            machine.set_positions(key)?;
        }
        Ok(machine)
    }

    /// Internal constructor shared by `new()` and `from_config()`.
    fn build(specs: &[RotorSpec], reflector: Reflector) -> Self {
        let rotors: Vec<Rotor> = specs
            .iter()
            .map(|spec| Rotor::new(spec.wiring, spec.notch))
            .collect();
        debug!(
            rotors = rotors.len(),
            reflector = %reflector.wiring(),
            "machine configured"
        );
        Machine { rotors, reflector }
    }

    /// Sets rotor positions from a key, one letter per rotor, fast rotor first.
    ///
    /// Letters are case-insensitive. Extra letters are ignored; rotors
    /// beyond the key length keep their current position.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidPosition`] if the key holds a
    /// non-letter within the rotor count. No rotor is changed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Machine;
    ///
    /// let mut machine = Machine::new();
    /// machine.set_positions("qev").unwrap();
    /// assert_eq!(machine.positions(), vec!['Q', 'E', 'V']);
    /// assert!(machine.set_positions("A1").is_err());
    /// ```
    pub fn set_positions(&mut self, key: &str) -> Result<()> {
        let codes = key
            .chars()
            .take(self.rotors.len())
            .map(|c| to_code(c).ok_or(RotorCryptError::InvalidPosition(c)))
            .collect::<Result<Vec<u8>>>()?;
        for (rotor, &code) in self.rotors.iter_mut().zip(codes.iter()) {
            rotor.set_position(code as usize);
        }
        debug!(key = %key, "rotor positions set");
        Ok(())
    }

    /// Current rotor positions as letters, fast rotor first.
    pub fn positions(&self) -> Vec<char> {
        self.rotors.iter().map(|r| to_letter(r.position())).collect()
    }

    /// Number of rotors in the stack.
    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }

    /// Advances the rotor stack by one letter.
    ///
    /// The fast rotor always rotates. Each rotor to its left rotates only
    /// if the rotor on its right was at its notch before rotating. There is
    /// no double-step: a rotor sitting on its own notch does not move again
    /// on the next letter unless carried.
    pub fn step(&mut self) {
        let last = self.rotors.len() - 1;
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            let carry = i < last && rotor.at_notch();
            rotor.rotate();
            if !carry {
                break;
            }
        }
        trace!(positions = ?self.positions(), "stepped");
    }

    /// Passes a code through the rotors and reflector without stepping.
    fn signal_path(&self, input: u8) -> u8 {
        let forward = self
            .rotors
            .iter()
            .rev()
            .fold(input, |signal, rotor| rotor.forward(signal));
        let reflected = self.reflector.reflect(forward);
        self.rotors
            .iter()
            .fold(reflected, |signal, rotor| rotor.backward(signal))
    }

    /// Encrypts a single character.
    ///
    /// Letters step the rotors and come out uppercase. Anything else is
    /// returned unchanged without stepping.
    pub fn encrypt_char(&mut self, c: char) -> char {
        match to_code(c) {
            Some(code) => {
                self.step();
                to_letter(self.signal_path(code))
            }
            None => c,
        }
    }

    /// Encrypts a message, advancing the rotors once per letter.
    pub fn encrypt(&mut self, message: &str) -> String {
        message.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Decrypts a message. Identical to [`encrypt`](Self::encrypt); reset
    /// the key with [`set_positions`](Self::set_positions) first.
    pub fn decrypt(&mut self, message: &str) -> String {
        self.encrypt(message)
    }

    /// Substitution table for the current rotor positions, without stepping.
    ///
    /// Entry `i` is the output for input code `i`. For a valid machine this
    /// is always a self-inverse permutation.
    pub fn current_permutation(&self) -> [u8; ALPHABET_LEN] {
        core::array::from_fn(|i| self.signal_path(i as u8))
    }
}
