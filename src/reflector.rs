//! Reflector: fixed self-inverse wiring at the end of the rotor stack.
//!
//! The reflector sends the signal back through the rotors, which is what
//! makes the machine self-reciprocal. It never rotates.

use tracing::warn;

use crate::alphabet::to_letter;
use crate::error::{Result, RotorCryptError};
use crate::wiring::Wiring;

/// Historical reflector B wiring.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

const REFLECTOR_B_TABLE: [u8; 26] = [
    24, 17, 20, 7, 16, 18, 11, 3, 15, 23, 13, 6, 14, 10, 12, 8, 4, 1, 5, 25, 2, 22, 21, 9, 0, 19,
];

/// Fixed involutive permutation that turns the signal around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Creates a reflector from a self-inverse wiring.
    ///
    /// Fixed points are accepted (the machine stays reciprocal) but logged,
    /// since a letter may then encrypt to itself.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::NonReciprocalReflector`] if
    /// `wiring.map(wiring.map(i)) != i` for some `i`.
    pub fn new(wiring: Wiring) -> Result<Self> {
        if !wiring.is_involution() {
            return Err(RotorCryptError::NonReciprocalReflector);
        }
        let fixed = wiring.fixed_points();
        if !fixed.is_empty() {
            let letters: String = fixed.iter().map(|&c| to_letter(c)).collect();
            warn!(fixed = %letters, "reflector maps letters onto themselves");
        }
        Ok(Reflector { wiring })
    }

    /// The historical reflector B.
    pub fn historical() -> Self {
        Reflector {
            wiring: Wiring::from_trusted(REFLECTOR_B_TABLE),
        }
    }

    /// Sends a code through the reflector.
    #[inline]
    pub fn reflect(&self, input: u8) -> u8 {
        self.wiring.map(input)
    }

    /// Reflector wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}

impl Default for Reflector {
    fn default() -> Self {
        Self::historical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_matches_letters() {
        let from_letters = Wiring::from_letters(REFLECTOR_B).unwrap();
        assert_eq!(Reflector::historical().wiring(), &from_letters);
        assert_eq!(Reflector::historical().wiring().as_array(), &REFLECTOR_B_TABLE);
    }

    #[test]
    fn test_reflect_twice_is_identity() {
        let reflector = Reflector::default();
        for i in 0..26u8 {
            assert_eq!(reflector.reflect(reflector.reflect(i)), i);
            assert_ne!(reflector.reflect(i), i);
        }
    }

    #[test]
    fn test_rejects_non_involution() {
        let rotor_i = Wiring::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert_eq!(
            Reflector::new(rotor_i),
            Err(RotorCryptError::NonReciprocalReflector)
        );
    }

    #[test]
    fn test_accepts_reversed_alphabet() {
        let reversed = Wiring::from_letters("ZYXWVUTSRQPONMLKJIHGFEDCBA").unwrap();
        let reflector = Reflector::new(reversed).unwrap();
        assert_eq!(reflector.reflect(0), 25);
        assert_eq!(reflector.reflect(12), 13);
    }

    #[test]
    fn test_accepts_fixed_points() {
        let reflector = Reflector::new(Wiring::identity()).unwrap();
        assert_eq!(reflector.reflect(7), 7);
    }
}
