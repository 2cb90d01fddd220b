use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::model::alphabet::{Alphabet, Symbol};
use crate::model::config::GeneratorConfig;
use crate::model::range::LengthRange;
use crate::model::sampler::Sampler;

/// Buffered random string generator.
///
/// A `Generator` is the consumer side of a bounded queue. Its [`Producer`]
/// fills the queue in the background and suspends while it is full.
///
/// # Responsibilities
/// - Hand out pre-generated outputs, FIFO, each to exactly one consumer
/// - Forward re-seed requests to the producer
/// - Shut the producer down on request or when dropped
///
/// # Lifecycle
/// - [`Generator::new`] / [`Generator::with_source`] return the handle and its
///   producer; the caller drives [`Producer::serve`] on its own executor.
/// - [`Generator::spawn`] does the same and starts the producer as a tokio task.
/// - After [`Generator::shutdown`], queued outputs can still be taken; once
///   drained every take returns an empty value immediately.
pub struct Generator<S: Symbol = u8> {
	queue: Mutex<mpsc::Receiver<Vec<S>>>,
	reseed: watch::Sender<Option<u64>>,
	shutdown: CancellationToken,
	capacity: usize,
}

/// Production side of a [`Generator`].
///
/// Owns the random source exclusively; consumers never touch it.
pub struct Producer<S: Symbol, R = StdRng> {
	sampler: Sampler<S>,
	source: R,
	queue: mpsc::Sender<Vec<S>>,
	reseed: watch::Receiver<Option<u64>>,
	shutdown: CancellationToken,
}

impl<S: Symbol> Generator<S> {
	/// Creates a generator from its settings.
	///
	/// # Parameters
	/// - `config`: seed, capacity and length range.
	/// - `alphabet`: symbols to draw from, copied into the generator.
	///
	/// # Errors
	/// Returns `Error::InvalidArgument` if `capacity == 0`, the range is
	/// malformed or `alphabet` is empty. Nothing is started in that case.
	pub fn new(config: &GeneratorConfig, alphabet: &[S]) -> Result<(Self, Producer<S>)> {
		let range = config.validate()?;
		let alphabet = Alphabet::new(alphabet)?;
		let source = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self::build(source, config.capacity, range, alphabet))
	}

	/// Creates a generator around a caller-supplied random source.
	///
	/// The source must be seedable so that [`Generator::reseed`] can replace it.
	///
	/// # Errors
	/// Returns `Error::InvalidArgument` if `capacity == 0`.
	pub fn with_source<R>(source: R, capacity: usize, range: LengthRange, alphabet: Alphabet<S>) -> Result<(Self, Producer<S, R>)>
	where
		R: RngCore + SeedableRng,
	{
		if capacity == 0 {
			return Err(Error::invalid("capacity must be greater than 0"));
		}
		Ok(Self::build(source, capacity, range, alphabet))
	}

	/// Creates a generator and starts its producer as a tokio task.
	///
	/// The returned handle resolves to `Err(Error::Cancelled)` after shutdown.
	///
	/// # Panics
	/// Panics when called outside of a tokio runtime.
	pub fn spawn(config: &GeneratorConfig, alphabet: &[S]) -> Result<(Self, JoinHandle<Result<()>>)> {
		let (generator, producer) = Self::new(config, alphabet)?;
		let handle = tokio::spawn(producer.serve(generator.shutdown.child_token()));
		Ok((generator, handle))
	}

	fn build<R>(source: R, capacity: usize, range: LengthRange, alphabet: Alphabet<S>) -> (Self, Producer<S, R>) {
		let (tx, rx) = mpsc::channel(capacity);
		let (reseed_tx, reseed_rx) = watch::channel(None);
		let shutdown = CancellationToken::new();

		let generator = Self {
			queue: Mutex::new(rx),
			reseed: reseed_tx,
			shutdown: shutdown.clone(),
			capacity,
		};
		let producer = Producer {
			sampler: Sampler::new(range, alphabet),
			source,
			queue: tx,
			reseed: reseed_rx,
			shutdown,
		};
		(generator, producer)
	}

	/// Takes the next output as bytes, waiting for one if the queue is empty.
	///
	/// Returns an empty vector once the generator is shut down and drained.
	pub async fn bytes(&self) -> Vec<u8> {
		S::into_bytes(self.take().await)
	}

	/// Takes the next output as text, waiting for one if the queue is empty.
	///
	/// Returns an empty string once the generator is shut down and drained.
	pub async fn string(&self) -> String {
		S::into_text(self.take().await)
	}

	/// Blocking version of [`Generator::bytes`] for synchronous callers.
	///
	/// Must not be called from within an async task: it parks the thread.
	pub fn blocking_bytes(&self) -> Vec<u8> {
		S::into_bytes(futures::executor::block_on(self.take()))
	}

	/// Blocking version of [`Generator::string`] for synchronous callers.
	///
	/// Must not be called from within an async task: it parks the thread.
	pub fn blocking_string(&self) -> String {
		S::into_text(futures::executor::block_on(self.take()))
	}

	async fn take(&self) -> Vec<S> {
		let mut queue = self.queue.lock().await;
		tokio::select! {
			biased;
			item = queue.recv() => return item.unwrap_or_default(),
			_ = self.shutdown.cancelled() => {}
		}

		// Shut down: drain what is queued, accept nothing new.
		queue.close();
		queue.recv().await.unwrap_or_default()
	}

	/// Re-seeds the producer's source.
	///
	/// Applies to the next output sampled. Outputs already queued are not
	/// affected. If several seeds arrive before the next draw, the last wins.
	pub fn reseed(&self, seed: u64) {
		self.reseed.send_replace(Some(seed));
	}

	/// Stops production. Idempotent.
	///
	/// Outputs already queued remain available to takes.
	pub fn shutdown(&self) {
		if !self.shutdown.is_cancelled() {
			log::debug!("shutting down buffered generator");
		}
		self.shutdown.cancel();
	}

	pub fn is_shutdown(&self) -> bool {
		self.shutdown.is_cancelled()
	}

	/// Maximum number of queued outputs.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of outputs currently queued. Never above [`Generator::capacity`].
	///
	/// Waits for a consumer currently suspended in a take.
	pub async fn queued(&self) -> usize {
		self.queue.lock().await.len()
	}
}

impl<S: Symbol> Drop for Generator<S> {
	fn drop(&mut self) {
		self.shutdown.cancel();
	}
}

impl<S: Symbol, R: RngCore + SeedableRng> Producer<S, R> {
	/// Runs the production loop until cancelled.
	///
	/// # Behavior
	/// - Waits for a free queue slot (suspends while the queue is full).
	/// - Applies a pending re-seed, samples one output and enqueues it.
	/// - Stops when `token` or the generator's own shutdown is cancelled, or
	///   when the generator has been dropped. The queue is then closed.
	///
	/// # Errors
	/// Always returns `Error::Cancelled`: production never ends on its own.
	pub async fn serve(self, token: CancellationToken) -> Result<()> {
		let Self { sampler, mut source, queue, mut reseed, shutdown } = self;
		log::debug!("producer started (capacity {})", queue.max_capacity());

		loop {
			let permit = tokio::select! {
				biased;
				_ = token.cancelled() => break,
				_ = shutdown.cancelled() => break,
				permit = queue.reserve() => match permit {
					Ok(permit) => permit,
					// Every consumer handle is gone.
					Err(_) => break,
				},
			};

			if reseed.has_changed().unwrap_or(false) {
				if let Some(seed) = *reseed.borrow_and_update() {
					source = R::seed_from_u64(seed);
					log::debug!("producer re-seeded");
				}
			}

			permit.send(sampler.sample(&mut source));
		}

		drop(queue);
		log::debug!("producer stopped");
		Err(Error::Cancelled)
	}
}
