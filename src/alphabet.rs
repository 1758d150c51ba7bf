//! Letter-to-code conversion for the 26-letter machine alphabet.
//!
//! Everything inside the machine works on codes `0..26`; only the public
//! text boundary converts to and from letters.

/// Number of symbols in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Converts an ASCII letter (either case) to its code in `0..26`.
///
/// # Returns
/// `Some(code)` for `'A'..='Z'` and `'a'..='z'`, `None` for anything else,
/// including digits, whitespace and non-ASCII letters.
pub fn to_code(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Converts a code back to its uppercase letter.
///
/// Codes outside `0..26` are reduced modulo 26 first.
pub fn to_letter(code: u8) -> char {
    (b'A' + code % ALPHABET_LEN as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_code_upper_and_lower() {
        assert_eq!(to_code('A'), Some(0));
        assert_eq!(to_code('z'), Some(25));
        assert_eq!(to_code('m'), to_code('M'));
    }

    #[test]
    fn test_to_code_rejects_non_letters() {
        for c in [' ', '1', '-', '\n', 'é', 'Ω'] {
            assert_eq!(to_code(c), None, "'{}' should not map to a code", c);
        }
    }

    #[test]
    fn test_to_letter_wraps() {
        assert_eq!(to_letter(0), 'A');
        assert_eq!(to_letter(25), 'Z');
        assert_eq!(to_letter(26), 'A');
    }

    #[test]
    fn test_all_codes_roundtrip() {
        for code in 0..ALPHABET_LEN as u8 {
            assert_eq!(to_code(to_letter(code)), Some(code));
        }
    }
}
