//! Random string generation library.
//!
//! This crate produces random strings of variable length drawn from a
//! caller-supplied alphabet, including:
//! - A bias-free sampler extracting several alphabet indices per random word
//! - A buffered generator producing strings ahead of time in a background task
//! - Process-wide convenience calls backed by a shared, re-seedable source
//! - Constant character tables (letters, digits, punctuation)
//!
//! The output is meant for tokens, fixtures and temporary identifiers.
//! It is NOT suitable for secrets.
//!
//! ```
//! use rands_core::chars;
//!
//! // Between 6 and 8 characters (9 excluded) of letters and digits
//! let token = rands_core::string(6, 9, chars::alpha_number()).unwrap();
//! assert!((6..9).contains(&token.len()));
//! ```

/// Constant character tables usable as alphabets.
pub mod chars;

/// Error type shared by the whole crate.
pub mod error;

/// Sampling model and buffered generation.
///
/// Exposes the sampler, the buffered generator and their validated inputs.
pub mod model;

/// Process-wide default random source.
///
/// Not exposed, only `seed` is re-exported.
pub(crate) mod source;

pub use error::{Error, Result};
pub use model::alphabet::{Alphabet, Symbol};
pub use model::config::GeneratorConfig;
pub use model::generator::{Generator, Producer};
pub use model::range::LengthRange;
pub use model::sampler::{Sampler, sample};
pub use source::seed;

/// Generates a random byte sequence whose length lies in `[min, max)`.
///
/// Symbols are drawn uniformly from `alphabet` using the process-wide
/// default source. Wide (`char`) alphabets are UTF-8 encoded.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `min == 0`, `max <= min` or
/// `alphabet` is empty. No randomness is consumed in that case.
pub fn bytes<S: Symbol>(min: usize, max: usize, alphabet: &[S]) -> Result<Vec<u8>> {
	Ok(S::into_bytes(sample_default(min, max, alphabet)?))
}

/// Generates a random string whose length (in symbols) lies in `[min, max)`.
///
/// Same as [`bytes`], but returns text. Byte alphabets that are not valid
/// UTF-8 are converted lossily.
///
/// # Errors
/// Same as [`bytes`].
pub fn string<S: Symbol>(min: usize, max: usize, alphabet: &[S]) -> Result<String> {
	Ok(S::into_text(sample_default(min, max, alphabet)?))
}

fn sample_default<S: Symbol>(min: usize, max: usize, alphabet: &[S]) -> Result<Vec<S>> {
	let range = LengthRange::new(min, max)?;
	let alphabet = Alphabet::new(alphabet)?;
	Ok(source::with_default(|rng| sample(&range, &alphabet, rng)))
}
