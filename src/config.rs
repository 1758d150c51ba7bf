//! Machine configuration.
//!
//! A [`MachineConfig`] describes the rotor stack, the reflector and an
//! optional starting key. It derives `serde` traits so callers can load it
//! from whatever format they use; wirings are written as letter strings.

use serde::{Deserialize, Serialize};

use crate::alphabet::{to_code, ALPHABET_LEN};
use crate::error::{Result, RotorCryptError};
use crate::reflector::Reflector;
use crate::wiring::Wiring;

/// Historical rotor I wiring (notch at Q).
pub const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
/// Historical rotor II wiring (notch at E).
pub const ROTOR_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";
/// Historical rotor III wiring (notch at V).
pub const ROTOR_III: &str = "BDFHJLCPRTXVZNYEIWGAKMUSQO";

const ROTOR_I_TABLE: [u8; 26] = [
    4, 10, 12, 5, 11, 6, 3, 16, 21, 25, 13, 19, 14, 22, 24, 7, 23, 20, 18, 15, 0, 8, 1, 17, 2, 9,
];
const ROTOR_II_TABLE: [u8; 26] = [
    0, 9, 3, 10, 18, 8, 17, 20, 23, 1, 11, 7, 22, 19, 12, 2, 16, 6, 25, 13, 15, 24, 5, 21, 14, 4,
];
const ROTOR_III_TABLE: [u8; 26] = [
    1, 3, 5, 7, 9, 11, 2, 15, 17, 19, 23, 21, 25, 13, 24, 4, 8, 22, 6, 0, 10, 12, 20, 18, 16, 14,
];

/// Notch of rotor I ('Q').
const NOTCH_I: u8 = 16;
/// Notch of rotor II ('E').
const NOTCH_II: u8 = 4;
/// Notch of rotor III ('V').
const NOTCH_III: u8 = 21;

/// Wiring and notch of one rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    /// Forward substitution table.
    pub wiring: Wiring,
    /// Position at which this rotor carries the next one. Wraps modulo 26.
    pub notch: u8,
}

impl RotorSpec {
    /// Creates a spec from a wiring and a numeric notch.
    pub fn new(wiring: Wiring, notch: u8) -> Self {
        RotorSpec {
            wiring,
            notch: notch % ALPHABET_LEN as u8,
        }
    }

    /// Creates a spec from a 26-letter wiring and a notch letter.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`] for a bad wiring string and
    /// [`RotorCryptError::InvalidPosition`] if `notch` is not a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::config::{RotorSpec, ROTOR_I};
    ///
    /// let spec = RotorSpec::from_letters(ROTOR_I, 'Q').unwrap();
    /// assert_eq!(spec.notch, 16);
    /// ```
    pub fn from_letters(wiring: &str, notch: char) -> Result<Self> {
        let wiring = Wiring::from_letters(wiring)?;
        let notch = to_code(notch).ok_or(RotorCryptError::InvalidPosition(notch))?;
        Ok(RotorSpec { wiring, notch })
    }

    /// Historical rotor I.
    pub fn rotor_i() -> Self {
        RotorSpec {
            wiring: Wiring::from_trusted(ROTOR_I_TABLE),
            notch: NOTCH_I,
        }
    }

    /// Historical rotor II.
    pub fn rotor_ii() -> Self {
        RotorSpec {
            wiring: Wiring::from_trusted(ROTOR_II_TABLE),
            notch: NOTCH_II,
        }
    }

    /// Historical rotor III.
    pub fn rotor_iii() -> Self {
        RotorSpec {
            wiring: Wiring::from_trusted(ROTOR_III_TABLE),
            notch: NOTCH_III,
        }
    }
}

/// Full description of a machine.
///
/// `rotors[0]` is the fast rotor that steps on every letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor stack, fast rotor first.
    pub rotors: Vec<RotorSpec>,
    /// Reflector wiring. Must be self-inverse.
    pub reflector: Wiring,
    /// Optional starting key applied when the machine is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<String>,
}

impl Default for MachineConfig {
    /// Rotors I, II, III with reflector B and no starting key.
    fn default() -> Self {
        MachineConfig {
            rotors: vec![
                RotorSpec::rotor_i(),
                RotorSpec::rotor_ii(),
                RotorSpec::rotor_iii(),
            ],
            reflector: *Reflector::historical().wiring(),
            positions: None,
        }
    }
}

impl MachineConfig {
    /// Creates a config without a starting key.
    pub fn new(rotors: Vec<RotorSpec>, reflector: Wiring) -> Self {
        MachineConfig {
            rotors,
            reflector,
            positions: None,
        }
    }

    /// Sets the starting key.
    pub fn with_positions(mut self, key: impl Into<String>) -> Self {
        self.positions = Some(key.into());
        self
    }

    /// Checks the parts the [`Wiring`] type cannot guarantee on its own.
    ///
    /// # Errors
    /// - [`RotorCryptError::EmptyRotorStack`] if there are no rotors.
    /// - [`RotorCryptError::NonReciprocalReflector`] if the reflector is not self-inverse.
    /// - [`RotorCryptError::InvalidPosition`] if the starting key holds a non-letter.
    pub fn validate(&self) -> Result<()> {
        if self.rotors.is_empty() {
            return Err(RotorCryptError::EmptyRotorStack);
        }
        if !self.reflector.is_involution() {
            return Err(RotorCryptError::NonReciprocalReflector);
        }
        if let Some(key) = &self.positions {
            if let Some(bad) = key.chars().find(|&c| to_code(c).is_none()) {
                return Err(RotorCryptError::InvalidPosition(bad));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflector::REFLECTOR_B;

    #[test]
    fn test_historical_tables_match_letters() {
        assert_eq!(
            RotorSpec::rotor_i(),
            RotorSpec::from_letters(ROTOR_I, 'Q').unwrap()
        );
        assert_eq!(
            RotorSpec::rotor_ii(),
            RotorSpec::from_letters(ROTOR_II, 'E').unwrap()
        );
        assert_eq!(
            RotorSpec::rotor_iii(),
            RotorSpec::from_letters(ROTOR_III, 'V').unwrap()
        );
        assert_eq!(
            MachineConfig::default().reflector,
            Wiring::from_letters(REFLECTOR_B).unwrap()
        );
    }

    #[test]
    fn test_default_is_valid() {
        let config = MachineConfig::default();
        assert_eq!(config.rotors.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_notch_wraps() {
        let spec = RotorSpec::new(Wiring::identity(), 27);
        assert_eq!(spec.notch, 1);
    }

    #[test]
    fn test_from_letters_bad_notch() {
        assert_eq!(
            RotorSpec::from_letters(ROTOR_I, '#'),
            Err(RotorCryptError::InvalidPosition('#'))
        );
    }

    #[test]
    fn test_validate_empty_stack() {
        let config = MachineConfig::new(Vec::new(), Wiring::from_letters(REFLECTOR_B).unwrap());
        assert_eq!(config.validate(), Err(RotorCryptError::EmptyRotorStack));
    }

    #[test]
    fn test_validate_non_reciprocal_reflector() {
        let config = MachineConfig::new(
            vec![RotorSpec::rotor_i()],
            Wiring::from_letters(ROTOR_II).unwrap(),
        );
        assert_eq!(
            config.validate(),
            Err(RotorCryptError::NonReciprocalReflector)
        );
    }

    #[test]
    fn test_validate_bad_key() {
        let config = MachineConfig::default().with_positions("A1C");
        assert_eq!(
            config.validate(),
            Err(RotorCryptError::InvalidPosition('1'))
        );
    }
}
