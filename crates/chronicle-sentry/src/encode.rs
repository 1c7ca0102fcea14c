// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Transport encoding for error events.

use base64::prelude::*;

use crate::error::Result;
use crate::event::Event;

/// Encode an event for attachment: canonical JSON, then base64.
pub fn encode(event: &Event) -> Result<String> {
	let raw = serde_json::to_vec(event)?;
	Ok(BASE64_STANDARD.encode(raw))
}

/// Decode an attached payload back into an event.
pub fn decode(encoded: &str) -> Result<Event> {
	let raw = BASE64_STANDARD.decode(encoded)?;
	Ok(serde_json::from_slice(&raw)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::EventBuilder;
	use chronicle_core::{ExceptionInfo, LogLevel, LogRecord};

	#[test]
	fn encoded_events_decode_back() {
		let record = LogRecord::new(LogLevel::Error, "app", "boom")
			.with_exception(ExceptionInfo::new("io::Error", "connection reset"));
		let event = EventBuilder::new().build(&record, &[]).unwrap();
		let decoded = decode(&encode(&event).unwrap()).unwrap();
		assert_eq!(decoded, event);
	}

	#[test]
	fn garbage_does_not_decode() {
		assert!(decode("not base64 at all!").is_err());
	}
}
