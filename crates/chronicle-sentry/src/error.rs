// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for event construction and encoding.

use thiserror::Error;

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, SentryError>;

/// Errors raised while building or encoding an error event.
///
/// The attachment filter swallows all of these; they exist so the failure
/// can be logged before the record is dropped.
#[derive(Debug, Error)]
pub enum SentryError {
	/// The record carries no exception info.
	#[error("record carries no exception info")]
	NoException,

	/// Event (de)serialization failed.
	#[error("event serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),

	/// An encoded payload was not valid base64.
	#[error("event payload is not valid base64: {0}")]
	Decoding(#[from] base64::DecodeError),
}
