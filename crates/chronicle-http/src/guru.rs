// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Correlation-id stamping.

use chronicle_core::{LogRecord, RecordFilter};

/// Placeholder used when a record has no correlation id.
pub const DEFAULT_GURU_ID: &str = "-";

/// Stamps `guru_id` onto every record.
///
/// The id comes from the record's request snapshot when one is attached;
/// records produced outside any request get the configured default. Always
/// keeps the record.
pub struct GuruFilter {
	default: String,
}

impl GuruFilter {
	pub fn new(default: impl Into<String>) -> Self {
		Self {
			default: default.into(),
		}
	}
}

impl Default for GuruFilter {
	fn default() -> Self {
		Self::new(DEFAULT_GURU_ID)
	}
}

impl RecordFilter for GuruFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		let guru_id = record
			.request
			.as_ref()
			.and_then(|request| request.guru_id.clone())
			.unwrap_or_else(|| self.default.clone());
		record.set_extra("guru_id", guru_id);
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chronicle_core::{LogLevel, RequestContext};
	use http::Method;
	use std::sync::Arc;

	#[test]
	fn stamps_id_from_request_snapshot() {
		let request = Arc::new(
			RequestContext::new(Method::GET, "https://api.example.test/").with_guru_id("g-42"),
		);
		let mut record = LogRecord::new(LogLevel::Info, "test", "msg").with_request(request);
		assert!(GuruFilter::default().filter(&mut record));
		assert_eq!(record.extra("guru_id").unwrap(), "g-42");
	}

	#[test]
	fn defaults_when_request_has_no_id() {
		let request = Arc::new(RequestContext::new(Method::GET, "https://api.example.test/"));
		let mut record = LogRecord::new(LogLevel::Info, "test", "msg").with_request(request);
		assert!(GuruFilter::default().filter(&mut record));
		assert_eq!(record.extra("guru_id").unwrap(), DEFAULT_GURU_ID);
	}

	#[test]
	fn defaults_outside_any_request() {
		let mut record = LogRecord::new(LogLevel::Info, "test", "msg");
		assert!(GuruFilter::new("none").filter(&mut record));
		assert_eq!(record.extra("guru_id").unwrap(), "none");
	}
}
