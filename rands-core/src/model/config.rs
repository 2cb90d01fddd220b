use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::range::LengthRange;

/// Settings of a buffered [`Generator`](crate::Generator).
///
/// # Fields
/// - `seed`: fixed seed of the generator's own source, `None` for OS entropy.
/// - `capacity`: number of pre-generated outputs the queue holds (`>= 1`).
/// - `min` / `max`: output length range `[min, max)`.
///
/// Missing fields fall back to [`GeneratorConfig::default`] when deserialized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
	pub seed: Option<u64>,
	pub capacity: usize,
	pub min: usize,
	pub max: usize,
}

impl Default for GeneratorConfig {
	/// Entropy-seeded, 100 buffered outputs of 8 to 15 symbols.
	fn default() -> Self {
		Self { seed: None, capacity: 100, min: 8, max: 16 }
	}
}

impl GeneratorConfig {
	/// Checks every constraint a buffered generator relies on.
	///
	/// # Errors
	/// Returns `Error::InvalidArgument` if `capacity == 0`, `min == 0` or `max <= min`.
	pub fn validate(&self) -> Result<LengthRange> {
		if self.capacity == 0 {
			return Err(Error::invalid("capacity must be greater than 0"));
		}
		LengthRange::new(self.min, self.max)
	}
}
