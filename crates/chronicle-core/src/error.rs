// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for Chronicle core.

use thiserror::Error;

/// Result type alias for Chronicle core operations.
pub type Result<T> = std::result::Result<T, ChronicleError>;

/// Errors raised while constructing Chronicle configuration.
///
/// These surface at startup; nothing on the per-record path returns them.
#[derive(Debug, Error)]
pub enum ChronicleError {
	/// An exclusion rule pattern failed to compile.
	#[error("invalid exclude pattern `{pattern}`: {source}")]
	InvalidPattern {
		/// The pattern as supplied by the caller.
		pattern: String,
		/// The underlying regex error.
		#[source]
		source: regex::Error,
	},

	/// A log level string was not recognized.
	#[error("unknown log level `{0}`")]
	UnknownLevel(String),
}
