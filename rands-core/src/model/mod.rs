//! Top-level module for random string generation.
//!
//! This module provides:
//! - Validated inputs (`Alphabet`, `LengthRange`)
//! - The bit-sliced sampler (`Sampler`)
//! - A buffered, cancellable generator (`Generator` / `Producer`)
//! - Generator settings (`GeneratorConfig`)

/// Non-empty symbol sequence and the `Symbol` trait for byte and code point alphabets.
pub mod alphabet;

/// Serializable settings for a buffered generator.
pub mod config;

/// Buffered generator: a bounded queue fed by one background producer.
///
/// Supports blocking and async retrieval, re-seeding and idempotent shutdown.
pub mod generator;

/// Half-open output length range `[min, max)`.
pub mod range;

/// Bias-free sampling of alphabet symbols from 64-bit random words.
pub mod sampler;
