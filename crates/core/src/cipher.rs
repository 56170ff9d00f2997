//! Cipher engine - turns a plaintext word into an encrypted packet
//!
//! Everything here is a pure function of its arguments, except that
//! [`CipherScheme::Caesar`] draws its shift from the supplied [`RandomSource`].
//! The shift is not returned: callers keep the ciphertext, and the player
//! decodes from that.
//!
//! # Encodings
//!
//! | Scheme | Transform |
//! |--------|-----------|
//! | REVERSE | character order reversed |
//! | CAESAR | letters shifted forward by `1 + d/2 ..= 5 + d/2` |
//! | ATBASH | letters mirrored within their case (A↔Z) |
//! | ROT13 | letters shifted forward by 13 |
//! | BASE64 | standard padded Base64 of the UTF-8 bytes |
//! | BINARY | 8-bit code points, space separated |
//! | HEX | 2-digit upper-case code points, space separated |
//!
//! # Example
//!
//! ```
//! use cipher_terminal_core::cipher::encode;
//! use cipher_terminal_core::SimpleRng;
//! use cipher_terminal_core::types::CipherScheme;
//!
//! let mut rng = SimpleRng::new(1);
//! let packet = encode("CYBERPUNK", CipherScheme::Hex, 1, &mut rng);
//! assert_eq!(packet, "43 59 42 45 52 50 55 4E 4B");
//! ```

use std::ops::RangeInclusive;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CipherError;
use crate::rng::RandomSource;
use crate::types::CipherScheme;

/// Number of distinct Caesar shifts available at any difficulty.
pub const CAESAR_SHIFT_SPAN: u32 = 5;

/// Fixed ROT13 shift.
pub const ROT13_SHIFT: i32 = 13;

/// Parse a scheme name, reporting unknown names as [`CipherError::InvalidScheme`].
pub fn parse_scheme(name: &str) -> Result<CipherScheme, CipherError> {
    CipherScheme::from_str(name).ok_or_else(|| CipherError::InvalidScheme(name.to_string()))
}

/// Encode `word` under `scheme`.
///
/// `difficulty` only matters for Caesar, where it raises the shift range.
pub fn encode<R: RandomSource + ?Sized>(
    word: &str,
    scheme: CipherScheme,
    difficulty: u32,
    rng: &mut R,
) -> String {
    match scheme {
        CipherScheme::Reverse => reverse(word),
        CipherScheme::Caesar => {
            let shift = draw_caesar_shift(difficulty, rng);
            caesar_shift(word, shift as i32)
        }
        CipherScheme::Atbash => atbash(word),
        CipherScheme::Base64 => STANDARD.encode(word.as_bytes()),
        CipherScheme::Binary => join_code_points(word, |c| format!("{:08b}", c as u32)),
        CipherScheme::Hex => join_code_points(word, |c| format!("{:02X}", c as u32)),
        CipherScheme::Rot13 => caesar_shift(word, ROT13_SHIFT),
    }
}

/// Inclusive range the Caesar shift is drawn from at `difficulty`.
///
/// ```
/// use cipher_terminal_core::cipher::caesar_shift_range;
///
/// assert_eq!(caesar_shift_range(1), 1..=5);
/// assert_eq!(caesar_shift_range(10), 6..=10);
/// ```
pub fn caesar_shift_range(difficulty: u32) -> RangeInclusive<u32> {
    let low = 1 + difficulty / 2;
    low..=low + CAESAR_SHIFT_SPAN - 1
}

/// Draw a Caesar shift for `difficulty`.
pub fn draw_caesar_shift<R: RandomSource + ?Sized>(difficulty: u32, rng: &mut R) -> u32 {
    *caesar_shift_range(difficulty).start() + rng.next_range(CAESAR_SHIFT_SPAN)
}

/// Shift every ASCII letter by `amount` within its case's alphabet.
///
/// Negative amounts shift backwards, so `caesar_shift(caesar_shift(s, k), -k) == s`.
/// Non-letters pass through unchanged.
pub fn caesar_shift(text: &str, amount: i32) -> String {
    let amount = amount.rem_euclid(26) as u8;
    text.chars()
        .map(|c| match c {
            'A'..='Z' => rotate(c, b'A', amount),
            'a'..='z' => rotate(c, b'a', amount),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8, amount: u8) -> char {
    (((c as u8 - base + amount) % 26) + base) as char
}

/// Mirror every ASCII letter within its case's alphabet (A↔Z, b↔y).
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
            'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
            _ => c,
        })
        .collect()
}

/// Reverse the character sequence.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

fn join_code_points(text: &str, f: impl Fn(char) -> String) -> String {
    text.chars().map(f).collect::<Vec<_>>().join(" ")
}

/// Scheme-specific tip for the current puzzle.
///
/// `encoded` is accepted for symmetry with [`encode`]; no tip depends on it.
pub fn hint(word: &str, _encoded: &str, scheme: CipherScheme) -> String {
    match scheme {
        CipherScheme::Reverse => {
            let first = word.chars().next().map(String::from).unwrap_or_default();
            format!("First letter is: {}", first)
        }
        CipherScheme::Caesar => "Shift characters backward in alphabet".to_string(),
        CipherScheme::Atbash => "A becomes Z, B becomes Y...".to_string(),
        CipherScheme::Base64 => "Standard web encoding. Ends in =?".to_string(),
        CipherScheme::Binary => "ASCII Binary code. 01000001 = A".to_string(),
        CipherScheme::Hex => "Hexadecimal. 41 = A".to_string(),
        CipherScheme::Rot13 => "Caesar shift of 13. A->N".to_string(),
    }
}

/// Recover plaintext from a packet.
///
/// Caesar packets cannot be decoded this way because the shift is not kept;
/// use [`caesar_shift`] with a negative amount instead.
pub fn decode(encoded: &str, scheme: CipherScheme) -> Result<String, CipherError> {
    match scheme {
        CipherScheme::Reverse => Ok(reverse(encoded)),
        CipherScheme::Atbash => Ok(atbash(encoded)),
        CipherScheme::Rot13 => Ok(caesar_shift(encoded, -ROT13_SHIFT)),
        CipherScheme::Caesar => Err(undecodable(scheme, "shift is not recoverable")),
        CipherScheme::Base64 => {
            let bytes = STANDARD
                .decode(encoded)
                .map_err(|e| undecodable(scheme, e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| undecodable(scheme, e.to_string()))
        }
        CipherScheme::Binary => decode_code_points(encoded, 2, scheme),
        CipherScheme::Hex => decode_code_points(encoded, 16, scheme),
    }
}

fn decode_code_points(encoded: &str, radix: u32, scheme: CipherScheme) -> Result<String, CipherError> {
    encoded
        .split_whitespace()
        .map(|group| {
            u32::from_str_radix(group, radix)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| undecodable(scheme, format!("bad group '{}'", group)))
        })
        .collect()
}

fn undecodable(scheme: CipherScheme, reason: impl Into<String>) -> CipherError {
    CipherError::Undecodable {
        scheme,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Returns the same draw every time.
    struct FixedRng(u32);

    impl RandomSource for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_hex_cyberpunk() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            encode("CYBERPUNK", CipherScheme::Hex, 1, &mut rng),
            "43 59 42 45 52 50 55 4E 4B"
        );
    }

    #[test]
    fn test_binary_hacker() {
        let mut rng = SimpleRng::new(1);
        let packet = encode("HACKER", CipherScheme::Binary, 1, &mut rng);
        let groups: Vec<&str> = packet.split(' ').collect();
        assert_eq!(groups.len(), 6);
        assert_eq!(groups[0], "01001000");
        assert!(groups.iter().all(|g| g.len() == 8));
    }

    #[test]
    fn test_reverse() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(encode("KERNEL", CipherScheme::Reverse, 1, &mut rng), "LENREK");
    }

    #[test]
    fn test_atbash_preserves_case() {
        assert_eq!(atbash("AbZz"), "ZyAa");
        let mut rng = SimpleRng::new(1);
        assert_eq!(encode("HACKER", CipherScheme::Atbash, 1, &mut rng), "SZXPVI");
    }

    #[test]
    fn test_rot13() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(encode("SERVER", CipherScheme::Rot13, 1, &mut rng), "FREIRE");
    }

    #[test]
    fn test_base64_padding() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(encode("CLOUD", CipherScheme::Base64, 1, &mut rng), "Q0xPVUQ=");
        assert_eq!(encode("KERNEL", CipherScheme::Base64, 1, &mut rng), "S0VSTkVM");
    }

    #[test]
    fn test_caesar_uses_lowest_shift_for_zero_draw() {
        let mut rng = FixedRng(0);
        // difficulty 1 -> shift 1
        assert_eq!(encode("HAL", CipherScheme::Caesar, 1, &mut rng), "IBM");
    }

    #[test]
    fn test_caesar_uses_highest_shift_for_last_draw() {
        let mut rng = FixedRng(4);
        // difficulty 4 -> range 3..=7, draw 4 -> shift 7
        assert_eq!(encode("ABC", CipherScheme::Caesar, 4, &mut rng), "HIJ");
    }

    #[test]
    fn test_caesar_wraps_and_passes_non_letters() {
        assert_eq!(caesar_shift("XYZ xyz-9", 3), "ABC abc-9");
        assert_eq!(caesar_shift("ABC", -1), "ZAB");
        assert_eq!(caesar_shift("ABC", 26), "ABC");
    }

    #[test]
    fn test_caesar_shift_range_width() {
        for d in 1..=10 {
            let range = caesar_shift_range(d);
            assert_eq!(range.end() - range.start() + 1, CAESAR_SHIFT_SPAN);
            assert_eq!(*range.start(), 1 + d / 2);
        }
    }

    #[test]
    fn test_non_letters_do_not_panic() {
        let mut rng = SimpleRng::new(9);
        for scheme in CipherScheme::ALL {
            let _ = encode("ZERO_DAY 42!", scheme, 10, &mut rng);
        }
    }

    #[test]
    fn test_hints() {
        assert_eq!(
            hint("MALWARE", "ERAWLAM", CipherScheme::Reverse),
            "First letter is: M"
        );
        assert_eq!(
            hint("MALWARE", "", CipherScheme::Rot13),
            "Caesar shift of 13. A->N"
        );
        assert_eq!(hint("", "", CipherScheme::Reverse), "First letter is: ");
        for scheme in CipherScheme::ALL {
            assert!(!hint("PACKET", "", scheme).is_empty());
        }
    }

    #[test]
    fn test_decode_deterministic_schemes() {
        let mut rng = SimpleRng::new(1);
        for scheme in [
            CipherScheme::Reverse,
            CipherScheme::Atbash,
            CipherScheme::Rot13,
            CipherScheme::Base64,
            CipherScheme::Binary,
            CipherScheme::Hex,
        ] {
            let packet = encode("FIREWALL", scheme, 5, &mut rng);
            assert_eq!(decode(&packet, scheme).unwrap(), "FIREWALL", "{}", scheme);
        }
    }

    #[test]
    fn test_decode_caesar_is_refused() {
        let err = decode("IBM", CipherScheme::Caesar).unwrap_err();
        assert!(matches!(
            err,
            CipherError::Undecodable {
                scheme: CipherScheme::Caesar,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("012 XYZ", CipherScheme::Binary).is_err());
        assert!(decode("ZZ", CipherScheme::Hex).is_err());
        assert!(decode("!!!", CipherScheme::Base64).is_err());
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!(parse_scheme("Caesar"), Ok(CipherScheme::Caesar));
        assert_eq!(
            parse_scheme("enigma"),
            Err(CipherError::InvalidScheme("enigma".to_string()))
        );
    }
}
