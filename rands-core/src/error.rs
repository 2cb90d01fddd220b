use thiserror::Error;

/// Failures reported by the library.
///
/// There are only two kinds:
/// - `InvalidArgument`: a caller error, raised before any randomness is consumed
/// - `Cancelled`: returned by [`Producer::serve`](crate::Producer::serve) once
///   it has honoured a cancellation request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("generator was cancelled")]
	Cancelled,
}

impl Error {
	pub(crate) fn invalid(reason: impl Into<String>) -> Self {
		Self::InvalidArgument(reason.into())
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
