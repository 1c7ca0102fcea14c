// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The attachment filter.

use chronicle_core::{LogRecord, RecordFilter};

use crate::builder::EventBuilder;
use crate::encode::encode;

/// Extra key the encoded payload is attached under.
pub const SENTRY_KEY: &str = "sentry";

/// Attaches an encoded error event to records carrying exceptions.
///
/// Records without exception info are rejected outright; they are not this
/// filter's business. Records with exceptions get the encoded event under
/// [`SENTRY_KEY`] and pass. Fail-closed: any failure while building or
/// encoding is logged at debug and the record is rejected, so the logging
/// pipeline itself never raises.
pub struct SentryFilter {
	builder: EventBuilder,
	extra_keys: Vec<String>,
}

impl SentryFilter {
	pub fn new(builder: EventBuilder) -> Self {
		Self {
			builder,
			extra_keys: Vec::new(),
		}
	}

	/// Name the record extras copied into each event.
	pub fn with_extra_keys<S: Into<String>>(
		mut self,
		keys: impl IntoIterator<Item = S>,
	) -> Self {
		self.extra_keys = keys.into_iter().map(Into::into).collect();
		self
	}
}

impl RecordFilter for SentryFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		if record.exception.is_none() {
			return false;
		}
		let encoded = self
			.builder
			.build(record, &self.extra_keys)
			.and_then(|event| encode(&event));
		match encoded {
			Ok(payload) => {
				record.set_extra(SENTRY_KEY, payload);
				true
			}
			Err(error) => {
				tracing::debug!(%error, "dropping record after event attachment failure");
				false
			}
		}
	}
}
