// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Event processors: sanitization and request enrichment.

use std::collections::BTreeMap;

use chronicle_core::{LogRecord, GURU_ID_HEADER};
use chronicle_redact::Masker;

use crate::event::{Event, HttpInterface};

/// Rewrites an event before encoding. Runs on every built event.
pub trait Processor: Send + Sync {
	fn process(&self, event: &mut Event, record: &LogRecord);
}

/// Field names scrubbed from every outgoing event.
pub const SANITIZED_FIELDS: &[&str] = &[
	"password",
	"secret",
	"card_number",
	"account_number",
	"security_code",
	"ssn",
	"ssn_last_4",
	"ssn_last4",
	"tax_id",
];

/// Redacts [`SANITIZED_FIELDS`] from the event's extra attributes and HTTP
/// interface maps.
pub struct SanitizeProcessor {
	masker: Masker,
}

impl Default for SanitizeProcessor {
	fn default() -> Self {
		Self {
			masker: Masker::new(SANITIZED_FIELDS.iter().copied()).with_mask(Some('*')),
		}
	}
}

impl SanitizeProcessor {
	fn sanitize_values(&self, map: &mut BTreeMap<String, serde_json::Value>) {
		for (key, value) in map.iter_mut() {
			if self.masker.contains(key) {
				*value = self.masker.mask_value(value);
			} else {
				*value = self.masker.mask(value);
			}
		}
	}

	fn sanitize_strings(&self, map: &mut BTreeMap<String, String>) {
		let placeholder = match self.masker.placeholder() {
			Some(placeholder) => placeholder,
			None => return,
		};
		for (key, value) in map.iter_mut() {
			if self.masker.contains(key) {
				*value = placeholder.clone();
			}
		}
	}
}

impl Processor for SanitizeProcessor {
	fn process(&self, event: &mut Event, _record: &LogRecord) {
		self.sanitize_values(&mut event.extra);
		if let Some(http) = &mut event.http {
			self.sanitize_strings(&mut http.headers);
			self.sanitize_strings(&mut http.env);
			self.sanitize_strings(&mut http.form);
		}
	}
}

/// Populates the HTTP interface from the record's request snapshot.
///
/// Does nothing when the event already has HTTP data or the record was
/// produced outside any request. The correlation header is defaulted from
/// the snapshot when the request itself did not carry one.
pub struct RequestProcessor;

impl Processor for RequestProcessor {
	fn process(&self, event: &mut Event, record: &LogRecord) {
		if event.http.is_some() {
			return;
		}
		let Some(request) = &record.request else {
			return;
		};

		let mut headers: BTreeMap<String, String> = request.headers.iter().cloned().collect();
		if !headers.keys().any(|k| k.eq_ignore_ascii_case(GURU_ID_HEADER)) {
			if let Some(guru_id) = &request.guru_id {
				headers.insert(GURU_ID_HEADER.to_string(), guru_id.clone());
			}
		}

		event.http = Some(HttpInterface {
			method: request.method.to_string(),
			url: request.url_without_query().to_string(),
			query_string: request.query_string.clone(),
			headers,
			env: request.env.clone(),
			form: request.form.clone(),
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::EventBuilder;
	use chronicle_core::{ExceptionInfo, LogLevel, RequestContext};
	use http::Method;
	use serde_json::json;
	use std::sync::Arc;

	fn record_with_request(request: RequestContext) -> LogRecord {
		LogRecord::new(LogLevel::Error, "app", "boom")
			.with_exception(ExceptionInfo::new("error", "boom"))
			.with_request(Arc::new(request))
	}

	#[test]
	fn sanitize_scrubs_extra_and_form() {
		let request = RequestContext::new(Method::POST, "https://api.example.test/cards")
			.with_form_field("card_number", "4111111111111111")
			.with_form_field("amount", "500");
		let mut record = record_with_request(request);
		record.set_extra("password", "hunter2");
		record.set_extra("attempt", 3);

		let event = EventBuilder::with_default_processors()
			.build(
				&record,
				&["password".to_string(), "attempt".to_string()],
			)
			.unwrap();

		assert_eq!(event.extra.get("password").unwrap(), "********");
		assert_eq!(event.extra.get("attempt").unwrap(), 3);
		let http = event.http.unwrap();
		assert_eq!(http.form.get("card_number").unwrap(), "********");
		assert_eq!(http.form.get("amount").unwrap(), "500");
	}

	#[test]
	fn sanitize_recurses_into_nested_extra() {
		let mut record = LogRecord::new(LogLevel::Error, "app", "boom")
			.with_exception(ExceptionInfo::new("error", "boom"));
		record.set_extra("context", json!({"secret": "s3cr3t", "kept": 1}));

		let event = EventBuilder::new()
			.processor(SanitizeProcessor::default())
			.build(&record, &["context".to_string()])
			.unwrap();

		assert_eq!(
			event.extra.get("context").unwrap(),
			&json!({"secret": "********", "kept": 1})
		);
	}

	#[test]
	fn request_processor_populates_http_interface() {
		let request = RequestContext::new(
			Method::GET,
			"https://api.example.test/things?page=2",
		)
		.with_query_string("page=2")
		.with_header("Accept", "application/json")
		.with_env_var("REMOTE_ADDR", "10.0.0.1")
		.with_guru_id("g-9");

		let event = EventBuilder::new()
			.processor(RequestProcessor)
			.build(&record_with_request(request), &[])
			.unwrap();

		let http = event.http.unwrap();
		assert_eq!(http.method, "GET");
		assert_eq!(http.url, "https://api.example.test/things");
		assert_eq!(http.query_string.as_deref(), Some("page=2"));
		assert_eq!(http.headers.get(GURU_ID_HEADER).unwrap(), "g-9");
		assert_eq!(http.env.get("REMOTE_ADDR").unwrap(), "10.0.0.1");
	}

	#[test]
	fn request_processor_keeps_an_existing_correlation_header() {
		let request = RequestContext::new(Method::GET, "https://api.example.test/things")
			.with_header("X-Guru-Id", "from-header")
			.with_guru_id("from-state");

		let event = EventBuilder::new()
			.processor(RequestProcessor)
			.build(&record_with_request(request), &[])
			.unwrap();

		let http = event.http.unwrap();
		assert_eq!(http.headers.get("X-Guru-Id").unwrap(), "from-header");
		assert!(!http.headers.contains_key(GURU_ID_HEADER));
	}

	#[test]
	fn request_processor_skips_records_without_request() {
		let record = LogRecord::new(LogLevel::Error, "app", "boom")
			.with_exception(ExceptionInfo::new("error", "boom"));
		let event = EventBuilder::new()
			.processor(RequestProcessor)
			.build(&record, &[])
			.unwrap();
		assert!(event.http.is_none());
	}
}
