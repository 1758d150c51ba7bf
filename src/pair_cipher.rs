//! PairCipher: shifting symmetric-pair substitution.
//!
//! A much simpler companion to the rotor [`Machine`](crate::Machine). The
//! 26 letters are split into 13 swapped pairs. The k-th letter of a message
//! is substituted through the pair table and then shifted by `k`, so the
//! substitution changes after every letter.
//!
//! The pairing is an explicit [`PairTable`] value: either supplied by the
//! caller or drawn once from a caller-provided random number generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::{to_code, to_letter, ALPHABET_LEN};
use crate::error::{Result, RotorCryptError};

const MODULUS: u8 = ALPHABET_LEN as u8;

/// Self-inverse mapping of the 26 letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairTable {
    table: [u8; ALPHABET_LEN],
}

impl PairTable {
    /// Builds a table from explicit codes.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidPairTable`] unless `table` is a
    /// permutation with `table[table[i]] == i` for every `i`.
    pub fn new(table: [u8; ALPHABET_LEN]) -> Result<Self> {
        let valid = table.iter().enumerate().all(|(i, &value)| {
            (value as usize) < ALPHABET_LEN && table[value as usize] as usize == i
        });
        if !valid {
            return Err(RotorCryptError::InvalidPairTable);
        }
        Ok(PairTable { table })
    }

    /// Draws a random pairing: every letter is swapped with a distinct partner.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rotorcrypt::PairTable;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let table = PairTable::random(&mut rng);
    /// for i in 0..26u8 {
    ///     assert_ne!(table.map(i), i);
    ///     assert_eq!(table.map(table.map(i)), i);
    /// }
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut codes: [u8; ALPHABET_LEN] = core::array::from_fn(|i| i as u8);
        codes.shuffle(rng);
        let mut table = [0u8; ALPHABET_LEN];
        for pair in codes.chunks_exact(2) {
            table[pair[0] as usize] = pair[1];
            table[pair[1] as usize] = pair[0];
        }
        PairTable { table }
    }

    /// Partner of `code`.
    #[inline]
    pub fn map(&self, code: u8) -> u8 {
        self.table[code as usize]
    }

    /// Raw table view.
    pub fn as_array(&self) -> &[u8; ALPHABET_LEN] {
        &self.table
    }
}

/// Shifting pair substitution cipher.
///
/// Each call to [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt)
/// starts from shift 0, so the cipher holds no state between messages.
#[derive(Debug, Clone)]
pub struct PairCipher {
    table: PairTable,
}

impl PairCipher {
    /// Creates a cipher over the given pairing.
    pub fn new(table: PairTable) -> Self {
        PairCipher { table }
    }

    /// Pairing in use.
    pub fn table(&self) -> &PairTable {
        &self.table
    }

    /// Encrypts a message. Letters are uppercased; other characters pass
    /// through and do not advance the shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{PairCipher, PairTable};
    ///
    /// // A<->B, C<->D, ...
    /// let table = PairTable::new(core::array::from_fn(|i| (i ^ 1) as u8)).unwrap();
    /// let cipher = PairCipher::new(table);
    /// assert_eq!(cipher.encrypt("Hello World"), "GGMNT CVXSL");
    /// assert_eq!(cipher.decrypt("GGMNT CVXSL"), "HELLO WORLD");
    /// ```
    pub fn encrypt(&self, message: &str) -> String {
        self.transform(message, |table, code, shift| {
            (table.map(code) + shift) % MODULUS
        })
    }

    /// Decrypts a message produced by [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, message: &str) -> String {
        self.transform(message, |table, code, shift| {
            table.map((code + MODULUS - shift) % MODULUS)
        })
    }

    fn transform<F>(&self, message: &str, substitute: F) -> String
    where
        F: Fn(&PairTable, u8, u8) -> u8,
    {
        let mut shift = 0u8;
        message
            .chars()
            .map(|c| match to_code(c) {
                Some(code) => {
                    let out = substitute(&self.table, code, shift);
                    shift = (shift + 1) % MODULUS;
                    to_letter(out)
                }
                None => c,
            })
            .collect()
    }
}
