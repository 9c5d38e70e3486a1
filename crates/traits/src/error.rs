//! Error types for hashing operations.
//!
//! Small, opaque error types. None of these are transient: nothing is retried
//! internally, and every error is reported synchronously to the immediate
//! caller.

use core::fmt;

/// A construction parameter was out of range.
///
/// Returned when a hasher is built with an unsupported output length or key
/// length. Retrying with the same arguments will fail again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParameterError;

impl ParameterError {
  /// Create a new parameter error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ParameterError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ParameterError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid parameter: output or key length out of range")
  }
}

impl core::error::Error for ParameterError {}

/// A hasher was used after it was finalized.
///
/// Indicates caller misuse, not a data problem: `update` or a second
/// `finalize` was called on an engine that has already produced its digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct StateError;

impl StateError {
  /// Create a new state error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for StateError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for StateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid state: hasher already finalized")
  }
}

impl core::error::Error for StateError {}

/// MAC tag verification failed.
///
/// Intentionally opaque to prevent timing side-channels; the underlying
/// comparison must be constant-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
