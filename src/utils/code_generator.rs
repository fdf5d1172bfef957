//! Short code generation utilities.
//!
//! Codes are drawn from the operating system CSPRNG so they cannot be predicted
//! from previously issued codes.

use thiserror::Error;

/// Characters a short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in every generated short code.
pub const CODE_LENGTH: usize = 7;

/// Largest multiple of the alphabet size that fits in a byte.
///
/// Bytes at or above this bound are discarded so every character stays
/// equally likely.
const ACCEPT_BELOW: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// The system random source could not produce entropy.
#[derive(Debug, Error)]
#[error("secure random source failed: {0}")]
pub struct GenerationError(#[from] getrandom::Error);

/// Generates a random short code of [`CODE_LENGTH`] characters from [`ALPHABET`].
///
/// No uniqueness check is performed; collisions are left to the size of the
/// keyspace (62^7).
///
/// # Errors
///
/// Returns [`GenerationError`] if the OS random source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> Result<String, GenerationError> {
    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; 16];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer)?;

        for &byte in buffer.iter().filter(|&&b| b < ACCEPT_BELOW) {
            code.push(ALPHABET[(byte as usize) % ALPHABET.len()] as char);
            if code.len() == CODE_LENGTH {
                break;
            }
        }
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code().unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..200 {
            let code = generate_code().unwrap();
            assert!(
                code.bytes().all(|b| ALPHABET.contains(&b)),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..10_000 {
            codes.insert(generate_code().unwrap());
        }

        assert_eq!(codes.len(), 10_000);
    }

    #[test]
    fn test_alphabet_is_62_distinct_alphanumerics() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_rejection_bound() {
        assert_eq!(ACCEPT_BELOW, 248);
    }

    #[test]
    fn test_every_position_varies() {
        let codes: Vec<String> = (0..500).map(|_| generate_code().unwrap()).collect();

        for position in 0..CODE_LENGTH {
            let distinct: HashSet<u8> = codes.iter().map(|c| c.as_bytes()[position]).collect();
            assert!(distinct.len() > 20, "position {position} looks biased");
        }
    }
}
