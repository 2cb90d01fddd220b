use rand::{Rng, RngCore};

use super::alphabet::{Alphabet, Symbol};
use super::range::LengthRange;

/// Samples random symbol sequences from one alphabet and one length range.
///
/// Indices are produced by **bit-sliced extraction with rejection**:
/// - `bits` is the smallest width covering every index (`0..len`)
/// - each 64-bit word is cut into `64 / bits` candidates of `bits` bits
/// - candidates `>= len` are discarded instead of being reduced modulo `len`
///
/// One word therefore yields several indices, and none of them is biased.
/// When `len` is a power of two nothing is ever discarded.
///
/// A `Sampler` precomputes the width and mask once, so it is the form used
/// by the buffered producer. For one-off calls see [`sample`].
#[derive(Clone, Debug)]
pub struct Sampler<S> {
	range: LengthRange,
	alphabet: Alphabet<S>,
	/// Candidate width in bits, `0` for a single-symbol alphabet.
	bits: u32,
	mask: u64,
	/// Number of whole candidates in one word.
	per_word: u32,
}

impl<S: Symbol> Sampler<S> {
	/// Creates a sampler. Both inputs are already validated by construction.
	pub fn new(range: LengthRange, alphabet: Alphabet<S>) -> Self {
		let bits = index_bits(alphabet.len());
		let (mask, per_word) = if bits == 0 {
			(0, 0)
		} else {
			(u64::MAX >> (u64::BITS - bits), u64::BITS / bits)
		};
		Self { range, alphabet, bits, mask, per_word }
	}

	pub fn range(&self) -> &LengthRange {
		&self.range
	}

	pub fn alphabet(&self) -> &Alphabet<S> {
		&self.alphabet
	}

	/// Draws one sequence.
	///
	/// # Behavior
	/// - Length is `min` when the range is degenerate (no draw), otherwise
	///   `min + uniform[0, max - min)` from one bounded draw.
	/// - Each symbol is drawn independently and uniformly from the alphabet.
	pub fn sample<R: RngCore>(&self, rng: &mut R) -> Vec<S> {
		let len = self.draw_len(rng);
		let mut out = Vec::with_capacity(len);
		self.fill(rng, len, &mut out);
		out
	}

	fn draw_len<R: RngCore>(&self, rng: &mut R) -> usize {
		if self.range.is_fixed() {
			self.range.min()
		} else {
			self.range.min() + rng.random_range(0..self.range.span())
		}
	}

	/// Appends symbols to `out` until it holds `len` of them.
	///
	/// Returns the number of rejected candidates.
	pub(crate) fn fill<R: RngCore>(&self, rng: &mut R, len: usize, out: &mut Vec<S>) -> usize {
		let symbols = self.alphabet.as_slice();
		if self.bits == 0 {
			out.resize(len, symbols[0]);
			return 0;
		}

		let mut rejected = 0;
		while out.len() < len {
			let mut word = rng.next_u64();
			for _ in 0..self.per_word {
				let candidate = (word & self.mask) as usize;
				// A shift by the full width (64-bit candidates) leaves nothing.
				word = word.checked_shr(self.bits).unwrap_or(0);

				if candidate < symbols.len() {
					out.push(symbols[candidate]);
					if out.len() == len {
						break;
					}
				} else {
					rejected += 1;
				}
			}
		}
		rejected
	}
}

/// Draws one sequence of symbols from `alphabet`, with a length in `range`.
///
/// Convenience over [`Sampler`] for single draws.
pub fn sample<S: Symbol, R: RngCore>(range: &LengthRange, alphabet: &Alphabet<S>, rng: &mut R) -> Vec<S> {
	Sampler::new(*range, alphabet.clone()).sample(rng)
}

/// Smallest `b` such that `(1 << b) - 1 >= len - 1`.
fn index_bits(len: usize) -> u32 {
	let highest = (len.saturating_sub(1)) as u64;
	u64::BITS - highest.leading_zeros()
}
