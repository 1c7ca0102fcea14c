// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tracing layer that feeds events into a Chronicle pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::pipeline::{LogPipeline, RecordSink};
use crate::record::{ExceptionInfo, LogLevel, LogRecord};

/// A tracing Layer that converts each event into a [`LogRecord`] and hands
/// it to a [`LogPipeline`].
///
/// The `message` field becomes the record message, `error`-valued fields
/// become exception info, and every other field lands in `extra`.
#[derive(Clone)]
pub struct PipelineLayer {
	pipeline: Arc<LogPipeline>,
}

impl PipelineLayer {
	pub fn new(pipeline: Arc<LogPipeline>) -> Self {
		Self { pipeline }
	}

	pub fn pipeline(&self) -> &Arc<LogPipeline> {
		&self.pipeline
	}
}

impl<S> Layer<S> for PipelineLayer
where
	S: Subscriber + for<'a> LookupSpan<'a>,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let metadata = event.metadata();

		let mut visitor = RecordVisitor::default();
		event.record(&mut visitor);

		let mut record = LogRecord::new(
			LogLevel::from_tracing(metadata.level()),
			metadata.target(),
			visitor.message.unwrap_or_default(),
		);
		record.exception = visitor.exception;
		record.extra = visitor.fields;

		self.pipeline.emit(record);
	}
}

#[derive(Default)]
struct RecordVisitor {
	message: Option<String>,
	exception: Option<ExceptionInfo>,
	fields: BTreeMap<String, Value>,
}

impl RecordVisitor {
	fn push(&mut self, field: &Field, value: Value) {
		self.fields.insert(field.name().to_string(), value);
	}
}

impl Visit for RecordVisitor {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		let rendered = format!("{value:?}");
		if field.name() == "message" {
			self.message = Some(rendered);
		} else {
			self.push(field, Value::String(rendered));
		}
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = Some(value.to_string());
		} else {
			self.push(field, Value::String(value.to_string()));
		}
	}

	fn record_i64(&mut self, field: &Field, value: i64) {
		self.push(field, Value::from(value));
	}

	fn record_u64(&mut self, field: &Field, value: u64) {
		self.push(field, Value::from(value));
	}

	fn record_bool(&mut self, field: &Field, value: bool) {
		self.push(field, Value::from(value));
	}

	fn record_f64(&mut self, field: &Field, value: f64) {
		self.push(field, Value::from(value));
	}

	fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
		self.exception = Some(ExceptionInfo::from_error(value));
		self.push(field, Value::String(value.to_string()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filter::{FilterChain, RecordFilter};
	use crate::format::TextFormatter;
	use parking_lot::Mutex;
	use std::io::Write;
	use tracing_subscriber::layer::SubscriberExt;

	#[derive(Clone, Default)]
	struct SharedBuf(Arc<Mutex<Vec<u8>>>);

	impl SharedBuf {
		fn contents(&self) -> String {
			String::from_utf8(self.0.lock().clone()).unwrap()
		}
	}

	impl Write for SharedBuf {
		fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
			self.0.lock().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	fn capture(filters: FilterChain, f: impl FnOnce()) -> String {
		let buf = SharedBuf::default();
		let pipeline = Arc::new(LogPipeline::new(
			filters,
			TextFormatter::new().with_timestamps(false),
			buf.clone(),
		));
		let subscriber = tracing_subscriber::registry().with(PipelineLayer::new(pipeline));
		tracing::subscriber::with_default(subscriber, f);
		buf.contents()
	}

	#[test]
	fn events_flow_through_the_pipeline() {
		let out = capture(FilterChain::new(), || {
			tracing::info!(user = "alice", "login accepted");
		});
		assert!(out.contains("login accepted"));
		assert!(out.contains("user=\"alice\""));
	}

	#[test]
	fn error_fields_become_exception_info() {
		struct SawException;

		impl RecordFilter for SawException {
			fn filter(&self, record: &mut LogRecord) -> bool {
				assert!(record.exception.is_some());
				true
			}
		}

		let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
		let out = capture(FilterChain::new().with(SawException), || {
			tracing::error!(error = &err as &(dyn std::error::Error + 'static), "request failed");
		});
		assert!(out.contains("request failed"));
		assert!(out.contains("reset by peer"));
	}

	#[test]
	fn numeric_fields_land_in_extra() {
		let out = capture(FilterChain::new(), || {
			tracing::info!(status = 204_u64, "responded");
		});
		assert!(out.contains("status=204"));
	}
}
