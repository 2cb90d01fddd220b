use crate::error::{Error, Result};

/// Half-open range `[min, max)` of output lengths, counted in symbols.
///
/// # Invariants
/// - `min > 0`
/// - `max > min`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthRange {
	min: usize,
	max: usize,
}

impl LengthRange {
	/// Creates a validated range.
	///
	/// # Errors
	/// Returns `Error::InvalidArgument` if `min == 0` or `max <= min`.
	/// Values are never clamped.
	pub fn new(min: usize, max: usize) -> Result<Self> {
		if min == 0 {
			return Err(Error::invalid("min must be greater than 0"));
		}
		if max <= min {
			return Err(Error::invalid(format!("max must be greater than min, got min={min} max={max}")));
		}
		Ok(Self { min, max })
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn max(&self) -> usize {
		self.max
	}

	/// Number of possible lengths (`max - min`).
	pub fn span(&self) -> usize {
		self.max - self.min
	}

	/// `true` when only `min` is possible, no length draw is needed.
	pub fn is_fixed(&self) -> bool {
		self.span() == 1
	}
}
