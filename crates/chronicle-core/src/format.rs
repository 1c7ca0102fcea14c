// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Plain-text rendering of log records.

use std::fmt::Write as _;

use chrono::SecondsFormat;

use crate::record::LogRecord;

/// Renders records as single text lines.
///
/// The default layout is `timestamp LEVEL target: message key=value ...`,
/// with exception text appended on following lines. The
/// [`without_exception`](TextFormatter::without_exception) variant renders
/// identically but never appends exception text, for destinations that
/// receive the encoded exception through another field.
#[derive(Debug, Clone)]
pub struct TextFormatter {
	include_exception: bool,
	include_timestamp: bool,
}

impl Default for TextFormatter {
	fn default() -> Self {
		Self {
			include_exception: true,
			include_timestamp: true,
		}
	}
}

impl TextFormatter {
	pub fn new() -> Self {
		Self::default()
	}

	/// A formatter that never appends exception text.
	pub fn without_exception() -> Self {
		Self {
			include_exception: false,
			include_timestamp: true,
		}
	}

	/// Toggle the leading timestamp.
	pub fn with_timestamps(mut self, include: bool) -> Self {
		self.include_timestamp = include;
		self
	}

	pub fn format(&self, record: &LogRecord) -> String {
		let mut line = String::new();
		if self.include_timestamp {
			let _ = write!(
				line,
				"{} ",
				record.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
			);
		}
		let _ = write!(
			line,
			"{:>5} {}: {}",
			record.level, record.target, record.message
		);
		for (key, value) in &record.extra {
			let _ = write!(line, " {key}={value}");
		}
		if self.include_exception {
			if let Some(exception) = &record.exception {
				let _ = write!(line, "\n{}: {}", exception.kind, exception.message);
				if let Some(backtrace) = &exception.backtrace {
					let _ = write!(line, "\n{backtrace}");
				}
			}
		}
		line
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::{ExceptionInfo, LogLevel, LogRecord};

	fn record_with_exception() -> LogRecord {
		LogRecord::new(LogLevel::Error, "app::billing", "charge failed")
			.with_extra("guru_id", "g-7")
			.with_exception(
				ExceptionInfo::new("io::Error", "connection reset").with_backtrace("frame 0"),
			)
	}

	#[test]
	fn renders_level_target_message_and_extras() {
		let line = TextFormatter::new()
			.with_timestamps(false)
			.format(&record_with_exception());
		assert!(line.starts_with("ERROR app::billing: charge failed"));
		assert!(line.contains("guru_id=\"g-7\""));
	}

	#[test]
	fn default_formatter_appends_exception_text() {
		let line = TextFormatter::new()
			.with_timestamps(false)
			.format(&record_with_exception());
		assert!(line.contains("io::Error: connection reset"));
		assert!(line.contains("frame 0"));
	}

	#[test]
	fn without_exception_omits_exception_text() {
		let line = TextFormatter::without_exception()
			.with_timestamps(false)
			.format(&record_with_exception());
		assert!(!line.contains("io::Error"));
		assert!(!line.contains("frame 0"));
		// Message content is untouched.
		assert!(line.contains("charge failed"));
	}

	#[test]
	fn timestamp_leads_the_line_when_enabled() {
		let line = TextFormatter::new().format(&record_with_exception());
		// RFC 3339, UTC.
		assert!(line.contains('T'));
		assert!(line.split(' ').next().unwrap().ends_with('Z'));
	}
}
