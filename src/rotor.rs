//! Rotor: a rotating permutation wheel.
//!
//! A rotor holds a fixed wiring, its precomputed inverse, a notch and the
//! current rotational position. The signal enters offset by the position,
//! passes through the wiring, then is shifted back to absolute terms.

use crate::alphabet::ALPHABET_LEN;
use crate::wiring::Wiring;

const MODULUS: u8 = ALPHABET_LEN as u8;

/// A single rotating wheel of the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    reverse_wiring: Wiring,
    position: u8,
    notch: u8,
}

impl Rotor {
    /// Creates a rotor at position 0.
    ///
    /// The reverse wiring is derived once here. `notch` is reduced modulo 26.
    pub fn new(wiring: Wiring, notch: u8) -> Self {
        Rotor {
            reverse_wiring: wiring.inverse(),
            wiring,
            position: 0,
            notch: notch % MODULUS,
        }
    }

    /// Right-to-left pass through the wiring.
    ///
    /// # Parameters
    /// - `input`: Signal code in `0..26`.
    #[inline]
    pub fn forward(&self, input: u8) -> u8 {
        Self::through(&self.wiring, self.position, input)
    }

    /// Left-to-right pass through the same wiring, in the opposite direction.
    #[inline]
    pub fn backward(&self, input: u8) -> u8 {
        Self::through(&self.reverse_wiring, self.position, input)
    }

    #[inline]
    fn through(table: &Wiring, position: u8, input: u8) -> u8 {
        let shifted = (input + position) % MODULUS;
        (table.map(shifted) + MODULUS - position) % MODULUS
    }

    /// Advances the rotor by one position, wrapping at 26.
    pub fn rotate(&mut self) {
        self.position = (self.position + 1) % MODULUS;
    }

    /// True when the rotor sits on its notch.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Sets the rotational position, reduced modulo 26.
    pub fn set_position(&mut self, position: usize) {
        self.position = (position % ALPHABET_LEN) as u8;
    }

    /// Current rotational position in `0..26`.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Notch position in `0..26`.
    pub fn notch(&self) -> u8 {
        self.notch
    }

    /// Forward wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotor_i() -> Rotor {
        Rotor::new(
            Wiring::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap(),
            16,
        )
    }

    #[test]
    fn test_forward_at_position_zero_is_plain_wiring() {
        let rotor = rotor_i();
        for i in 0..26u8 {
            assert_eq!(rotor.forward(i), rotor.wiring().map(i));
        }
    }

    #[test]
    fn test_forward_with_offset() {
        let mut rotor = rotor_i();
        rotor.set_position(1);
        // shifted = 1 -> 'K' (10), minus offset -> 9
        assert_eq!(rotor.forward(0), 9);
        assert_eq!(rotor.backward(9), 0);
    }

    #[test]
    fn test_backward_inverts_forward_at_every_position() {
        let mut rotor = rotor_i();
        for p in 0..26 {
            rotor.set_position(p);
            for i in 0..26u8 {
                assert_eq!(
                    rotor.backward(rotor.forward(i)),
                    i,
                    "position {}, input {}",
                    p,
                    i
                );
            }
        }
    }

    #[test]
    fn test_rotate_wraps() {
        let mut rotor = rotor_i();
        rotor.set_position(25);
        rotor.rotate();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_at_notch() {
        let mut rotor = rotor_i();
        assert!(!rotor.at_notch());
        rotor.set_position(16);
        assert!(rotor.at_notch());
        rotor.rotate();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn test_position_and_notch_wrap() {
        let mut rotor = Rotor::new(Wiring::identity(), 30);
        assert_eq!(rotor.notch(), 4);
        rotor.set_position(53);
        assert_eq!(rotor.position(), 1);
    }

    #[test]
    fn test_identity_rotor_is_transparent() {
        let mut rotor = Rotor::new(Wiring::identity(), 0);
        for p in 0..26 {
            rotor.set_position(p);
            for i in 0..26u8 {
                assert_eq!(rotor.forward(i), i);
            }
        }
    }
}
