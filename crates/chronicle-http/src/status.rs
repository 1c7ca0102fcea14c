// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Suppression of records for expected HTTP error statuses.

use std::collections::HashSet;

use chronicle_core::{LogRecord, RecordFilter};

/// Rejects records whose exception is an HTTP-layer error with a status
/// outside the allow-list.
///
/// Fail-open: records without exception info, without a request snapshot,
/// or whose exception carries no status code are always kept.
pub struct HttpStatusFilter {
	include_codes: HashSet<u16>,
}

impl HttpStatusFilter {
	pub fn new(include_codes: impl IntoIterator<Item = u16>) -> Self {
		Self {
			include_codes: include_codes.into_iter().collect(),
		}
	}
}

impl RecordFilter for HttpStatusFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		let Some(exception) = &record.exception else {
			return true;
		};
		if record.request.is_none() {
			return true;
		}
		match exception.status {
			Some(code) => self.include_codes.contains(&code),
			None => true,
		}
	}
}
