//! Wiring: validated permutation of the 26-letter alphabet.
//!
//! Rotors and reflectors are both built from a [`Wiring`]. Construction
//! checks that the table is a bijection, so every downstream component can
//! index it without further checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{to_code, to_letter, ALPHABET_LEN};
use crate::error::{Result, RotorCryptError};

/// Immutable permutation of the codes `0..26`.
///
/// Serialized as its 26-letter string (`"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`);
/// deserialization runs the same validation as [`Wiring::from_letters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Wiring {
    table: [u8; ALPHABET_LEN],
}

impl Wiring {
    /// Builds a wiring from a raw table.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`] if a value is `>= 26` or
    /// appears more than once.
    pub fn new(table: [u8; ALPHABET_LEN]) -> Result<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for (i, &value) in table.iter().enumerate() {
            if value as usize >= ALPHABET_LEN {
                return Err(RotorCryptError::InvalidWiring {
                    reason: format!("entry {} is {}, outside 0..26", i, value),
                });
            }
            if seen[value as usize] {
                return Err(RotorCryptError::InvalidWiring {
                    reason: format!("letter '{}' appears twice", to_letter(value)),
                });
            }
            seen[value as usize] = true;
        }
        Ok(Wiring { table })
    }

    /// Builds a wiring from a 26-letter string, case-insensitive.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidWiring`] if the string does not
    /// hold exactly 26 letters forming a permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Wiring;
    ///
    /// let w = Wiring::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// assert_eq!(w.map(0), 4);
    /// assert!(Wiring::from_letters("ABC").is_err());
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self> {
        let mut table = [0u8; ALPHABET_LEN];
        let mut count = 0;
        for c in letters.chars() {
            let code = to_code(c).ok_or_else(|| RotorCryptError::InvalidWiring {
                reason: format!("'{}' is not a letter", c),
            })?;
            if count < ALPHABET_LEN {
                table[count] = code;
            }
            count += 1;
        }
        if count != ALPHABET_LEN {
            return Err(RotorCryptError::InvalidWiring {
                reason: format!("expected {} letters, got {}", ALPHABET_LEN, count),
            });
        }
        Self::new(table)
    }

    /// Wraps a table known to be a permutation, used for built-in constants.
    pub(crate) const fn from_trusted(table: [u8; ALPHABET_LEN]) -> Self {
        Wiring { table }
    }

    /// The identity permutation.
    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, item) in table.iter_mut().enumerate() {
            *item = i as u8;
        }
        Wiring { table }
    }

    /// Maps a code through the table.
    #[inline]
    pub fn map(&self, code: u8) -> u8 {
        self.table[code as usize]
    }

    /// Returns the inverse permutation: `inverse().map(map(i)) == i`.
    pub fn inverse(&self) -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, &value) in self.table.iter().enumerate() {
            table[value as usize] = i as u8;
        }
        Wiring { table }
    }

    /// True when applying the wiring twice returns every input.
    pub fn is_involution(&self) -> bool {
        self.table
            .iter()
            .enumerate()
            .all(|(i, &value)| self.map(value) as usize == i)
    }

    /// Codes that the wiring maps onto themselves.
    pub fn fixed_points(&self) -> Vec<u8> {
        (0..ALPHABET_LEN as u8)
            .filter(|&code| self.map(code) == code)
            .collect()
    }

    /// Raw table view.
    pub fn as_array(&self) -> &[u8; ALPHABET_LEN] {
        &self.table
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in self.table.iter() {
            write!(f, "{}", to_letter(code))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Wiring {
    type Error = RotorCryptError;

    fn try_from(letters: String) -> Result<Self> {
        Wiring::from_letters(&letters)
    }
}

impl From<Wiring> for String {
    fn from(wiring: Wiring) -> Self {
        wiring.to_string()
    }
}
