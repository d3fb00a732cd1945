//! Base62 alias codec.
//!
//! Maps counter values to short aliases and back. The alphabet is digits, then
//! lowercase, then uppercase letters; symbols are written most significant first
//! and zero encodes to `"0"`.

/// Ordered base62 alphabet.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// `u64::MAX` needs 11 base62 digits.
const MAX_LEN: usize = 11;

/// Errors produced when decoding an alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Alias is empty")]
    Empty,

    #[error("Alias contains '{character}' at position {position}, which is outside the base62 alphabet")]
    InvalidCharacter { character: char, position: usize },

    #[error("Alias value does not fit in 64 bits")]
    Overflow,
}

/// Encodes a non-negative integer as a base62 alias.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// assert_eq!(encode(1_000_001), "4c93");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_LEN];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[i..].iter().map(|&b| b as char).collect()
}

/// Decodes a base62 alias back to its integer value.
///
/// # Errors
///
/// - [`CodecError::Empty`] for an empty string
/// - [`CodecError::InvalidCharacter`] for any symbol outside [`ALPHABET`]
/// - [`CodecError::Overflow`] if the value exceeds `u64::MAX`
pub fn decode(alias: &str) -> Result<u64, CodecError> {
    if alias.is_empty() {
        return Err(CodecError::Empty);
    }

    alias
        .chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, character)| {
            let digit = digit_value(character).ok_or(CodecError::InvalidCharacter {
                character,
                position,
            })?;

            acc.checked_mul(BASE)
                .and_then(|v| v.checked_add(digit))
                .ok_or(CodecError::Overflow)
        })
}

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'a'..='z' => c as u64 - 'a' as u64 + 10,
        'A'..='Z' => c as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_62_distinct_symbols() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_alphabet_order_matches_digit_values() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(symbol as char), Some(i as u64));
        }
    }

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(3843), "ZZ");
        assert_eq!(encode(1_000_000), "4c92");
        assert_eq!(encode(1_000_001), "4c93");
    }

    #[test]
    fn test_encode_max_value() {
        assert_eq!(encode(u64::MAX), "lYGhA16ahyf");
        assert_eq!(decode("lYGhA16ahyf"), Ok(u64::MAX));
    }

    #[test]
    fn test_roundtrip_around_digit_boundaries() {
        let mut samples = vec![0, 1, u64::MAX, u64::MAX - 1];
        let mut power = 1u64;
        while let Some(next) = power.checked_mul(BASE) {
            samples.extend([next - 1, next, next + 1]);
            power = next;
        }

        for n in samples {
            assert_eq!(decode(&encode(n)), Ok(n), "roundtrip failed for {n}");
        }
    }

    #[test]
    fn test_encode_is_injective_over_counter_range() {
        let aliases: HashSet<String> = (1_000_000..1_010_000).map(encode).collect();
        assert_eq!(aliases.len(), 10_000);
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(decode(""), Err(CodecError::Empty));
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        assert_eq!(
            decode("ab-c"),
            Err(CodecError::InvalidCharacter {
                character: '-',
                position: 2
            })
        );
        assert!(decode("promo!").is_err());
        assert!(decode("é").is_err());
    }

    #[test]
    fn test_decode_rejects_overflow() {
        assert_eq!(decode("lYGhA16ahyg"), Err(CodecError::Overflow));
        assert_eq!(decode("ZZZZZZZZZZZZ"), Err(CodecError::Overflow));
    }

    #[test]
    fn test_leading_zero_symbols_decode_to_same_value() {
        assert_eq!(decode("0004c93"), Ok(1_000_001));
    }
}
