use std::ops::Deref;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A symbol an alphabet can be made of.
///
/// Implemented for `u8` (byte alphabets) and `char` (Unicode code points).
/// The sampler is generic over this trait, so each symbol width gets its own
/// inner loop and no per-draw branching.
pub trait Symbol: Copy + Send + Sync + 'static {
	/// Encodes a sampled sequence as raw bytes.
	fn into_bytes(symbols: Vec<Self>) -> Vec<u8>;

	/// Encodes a sampled sequence as text.
	fn into_text(symbols: Vec<Self>) -> String;
}

impl Symbol for u8 {
	fn into_bytes(symbols: Vec<Self>) -> Vec<u8> {
		symbols
	}

	/// Invalid UTF-8 (bytes above `0x7f` picked out of their sequence)
	/// is replaced with `U+FFFD`.
	fn into_text(symbols: Vec<Self>) -> String {
		match String::from_utf8(symbols) {
			Ok(text) => text,
			Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
		}
	}
}

impl Symbol for char {
	fn into_bytes(symbols: Vec<Self>) -> Vec<u8> {
		Self::into_text(symbols).into_bytes()
	}

	fn into_text(symbols: Vec<Self>) -> String {
		symbols.into_iter().collect()
	}
}

/// The symbols eligible for output, in caller-defined order.
///
/// # Invariants
/// - Never empty
/// - Immutable once built; clones share the same storage
///
/// Symbols need not be unique. A repeated symbol is picked proportionally
/// more often.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet<S> {
	symbols: Arc<[S]>,
}

impl<S: Symbol> Alphabet<S> {
	/// Builds an alphabet from any sequence of symbols.
	///
	/// # Errors
	/// Returns `Error::InvalidArgument` if `symbols` is empty.
	pub fn new(symbols: impl Into<Arc<[S]>>) -> Result<Self> {
		let symbols = symbols.into();
		if symbols.is_empty() {
			return Err(Error::invalid("alphabet must not be empty"));
		}
		Ok(Self { symbols })
	}

	/// Number of symbols, duplicates included. Always `>= 1`.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Always `false`; present for API symmetry with slices.
	pub fn is_empty(&self) -> bool {
		false
	}

	pub fn as_slice(&self) -> &[S] {
		&self.symbols
	}
}

impl Alphabet<char> {
	/// Builds a code point alphabet from the characters of `text`.
	///
	/// # Errors
	/// Returns `Error::InvalidArgument` if `text` is empty.
	pub fn from_text(text: &str) -> Result<Self> {
		Self::new(text.chars().collect::<Vec<_>>())
	}
}

impl<S> Deref for Alphabet<S> {
	type Target = [S];

	fn deref(&self) -> &[S] {
		&self.symbols
	}
}
