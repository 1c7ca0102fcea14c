// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Event construction from log records.

use chrono::Utc;
use uuid::Uuid;

use chronicle_core::LogRecord;

use crate::error::{Result, SentryError};
use crate::event::{Event, ExceptionValue, ExceptionValues};
use crate::processors::{Processor, RequestProcessor, SanitizeProcessor};

/// Builds error events from records.
///
/// Deployment identity (release, environment, server name) and the
/// processor list are configuration; there is one builder however many
/// frameworks feed it.
#[derive(Default)]
pub struct EventBuilder {
	release: Option<String>,
	environment: Option<String>,
	server_name: Option<String>,
	processors: Vec<Box<dyn Processor>>,
}

impl EventBuilder {
	/// A builder with no processors.
	pub fn new() -> Self {
		Self::default()
	}

	/// A builder with the stock processors: field sanitization and request
	/// enrichment.
	pub fn with_default_processors() -> Self {
		Self::new()
			.processor(SanitizeProcessor::default())
			.processor(RequestProcessor)
	}

	pub fn release(mut self, release: impl Into<String>) -> Self {
		self.release = Some(release.into());
		self
	}

	pub fn environment(mut self, environment: impl Into<String>) -> Self {
		self.environment = Some(environment.into());
		self
	}

	pub fn server_name(mut self, server_name: impl Into<String>) -> Self {
		self.server_name = Some(server_name.into());
		self
	}

	/// Append a processor. Processors run in registration order.
	pub fn processor(mut self, processor: impl Processor + 'static) -> Self {
		self.processors.push(Box::new(processor));
		self
	}

	/// Build an event for the record's exception, copying the named extra
	/// attributes from the record when present.
	pub fn build(&self, record: &LogRecord, extra_keys: &[String]) -> Result<Event> {
		let exception = record.exception.as_ref().ok_or(SentryError::NoException)?;

		let mut event = Event {
			event_id: Uuid::now_v7().simple().to_string(),
			timestamp: Utc::now(),
			level: record.level,
			logger: record.target.clone(),
			platform: "rust".to_string(),
			release: self.release.clone(),
			environment: self.environment.clone(),
			server_name: self.server_name.clone(),
			exception: ExceptionValues {
				values: vec![ExceptionValue {
					kind: exception.kind.clone(),
					value: exception.message.clone(),
					stacktrace: exception.backtrace.clone(),
				}],
			},
			extra: extra_keys
				.iter()
				.filter_map(|key| record.extra(key).map(|v| (key.clone(), v.clone())))
				.collect(),
			http: None,
		};

		for processor in &self.processors {
			processor.process(&mut event, record);
		}

		Ok(event)
	}
}
