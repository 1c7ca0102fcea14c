// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Record emission: a filter chain ahead of a formatter and a shared writer.

use std::io::Write;

use parking_lot::Mutex;

use crate::filter::FilterChain;
use crate::format::TextFormatter;
use crate::record::LogRecord;

/// Emission seam for produced records.
///
/// Access loggers and the tracing layer hand finished records to a sink;
/// what happens next (filtering, formatting, buffering) is the sink's
/// business.
pub trait RecordSink: Send + Sync {
	fn emit(&self, record: LogRecord);
}

/// Filters, a formatter, and a line writer.
///
/// Records that survive the chain are rendered and written as one line.
/// Write failures are ignored; the logging path must never raise.
pub struct LogPipeline {
	filters: FilterChain,
	formatter: TextFormatter,
	writer: Mutex<Box<dyn Write + Send>>,
}

impl LogPipeline {
	pub fn new(
		filters: FilterChain,
		formatter: TextFormatter,
		writer: impl Write + Send + 'static,
	) -> Self {
		Self {
			filters,
			formatter,
			writer: Mutex::new(Box::new(writer)),
		}
	}

	/// A pipeline writing to stderr with the default formatter.
	pub fn stderr(filters: FilterChain) -> Self {
		Self::new(filters, TextFormatter::new(), std::io::stderr())
	}

	/// Run the chain and write the record if it survives.
	///
	/// Returns whether the record was written.
	pub fn handle(&self, mut record: LogRecord) -> bool {
		if !self.filters.apply(&mut record) {
			return false;
		}
		let line = self.formatter.format(&record);
		let mut writer = self.writer.lock();
		let _ = writeln!(writer, "{line}");
		let _ = writer.flush();
		true
	}
}

impl RecordSink for LogPipeline {
	fn emit(&self, record: LogRecord) {
		self.handle(record);
	}
}
