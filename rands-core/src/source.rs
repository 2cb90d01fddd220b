use std::sync::{LazyLock, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source used by the stateless `bytes` / `string` calls.
///
/// Seeded lazily from OS entropy on first use. Drawing and re-seeding both
/// hold the lock, so a re-seed never races with a draw.
static DEFAULT_SOURCE: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

/// Re-seeds the process-wide default source.
///
/// Affects the stateless [`bytes`](crate::bytes) and [`string`](crate::string)
/// calls only; buffered generators own their source.
///
/// The same seed yields the same sequence of outputs, as long as no other
/// thread draws from the default source in between.
pub fn seed(seed: u64) {
	log::debug!("re-seeding default source");
	with_default(|rng| *rng = StdRng::seed_from_u64(seed));
}

/// Runs `f` with exclusive access to the default source.
///
/// A poisoned lock is recovered, the source holds no invariant a panic could break.
pub(crate) fn with_default<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
	let mut rng = DEFAULT_SOURCE.lock().unwrap_or_else(PoisonError::into_inner);
	f(&mut rng)
}
