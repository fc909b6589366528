//! Short code generation.
//!
//! Codes are [`CODE_LENGTH`] characters drawn uniformly from the 62-symbol
//! alphabet `[A-Za-z0-9]`, giving 62^6 ≈ 5.68 × 10^10 possible codes.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code using the thread-local RNG.
///
/// Uniqueness is not guaranteed here; callers check storage and retry.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    generate_code_with(&mut rand::rng())
}

/// Generates a short code from the given RNG.
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
