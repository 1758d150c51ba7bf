//! Error types for the RotorCrypt library.
//!
//! All errors are raised while building or keying a machine. Once a
//! [`Machine`](crate::Machine) exists, encryption never fails.

use thiserror::Error;

/// Errors produced by the RotorCrypt library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorCryptError {
    /// A rotor or reflector wiring is not a permutation of the 26 letters.
    #[error("Invalid wiring: {reason}")]
    InvalidWiring {
        /// What made the table invalid.
        reason: String,
    },
    /// Reflector wiring does not map every letter back onto itself when applied twice.
    #[error("Reflector wiring is not self-inverse")]
    NonReciprocalReflector,
    /// A machine needs at least one rotor.
    #[error("Machine requires at least one rotor")]
    EmptyRotorStack,
    /// A rotor position key contains a symbol outside A-Z.
    #[error("Invalid rotor position '{0}': expected a letter A-Z")]
    InvalidPosition(char),
    /// A pair cipher table is not a symmetric pairing of the 26 letters.
    #[error("Pair table must be a self-inverse permutation of the 26 letters")]
    InvalidPairTable,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RotorCryptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_wiring() {
        let err = RotorCryptError::InvalidWiring {
            reason: "letter 'A' appears twice".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid wiring: letter 'A' appears twice"
        );
    }

    #[test]
    fn test_display_non_reciprocal_reflector() {
        let err = RotorCryptError::NonReciprocalReflector;
        assert_eq!(format!("{}", err), "Reflector wiring is not self-inverse");
    }

    #[test]
    fn test_display_empty_rotor_stack() {
        let err = RotorCryptError::EmptyRotorStack;
        assert_eq!(format!("{}", err), "Machine requires at least one rotor");
    }

    #[test]
    fn test_display_invalid_position() {
        let err = RotorCryptError::InvalidPosition('7');
        assert_eq!(
            format!("{}", err),
            "Invalid rotor position '7': expected a letter A-Z"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RotorCryptError::EmptyRotorStack,
            RotorCryptError::EmptyRotorStack
        );
        assert_ne!(
            RotorCryptError::EmptyRotorStack,
            RotorCryptError::InvalidPairTable
        );
    }

    #[test]
    fn test_error_clone() {
        let err = RotorCryptError::InvalidPosition('?');
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
