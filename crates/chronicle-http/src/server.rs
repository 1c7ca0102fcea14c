// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Access logging for inbound requests.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use chronicle_core::{LogLevel, LogRecord, RecordSink, RequestContext, ResponseContext};
use chronicle_redact::Masker;

use crate::body::{default_no_response_body, is_textual, should_include_body, NoBodyRule};
use crate::guru::DEFAULT_GURU_ID;

/// Emits one JSON access line per inbound request/response exchange.
///
/// The request payload is masked before emission. The response body is
/// included only when its content type is textual and the (method, status)
/// pair survives the configured no-body rules; by default every 2XX
/// response has its body omitted.
pub struct ServerRequestLogger {
	target: String,
	masker: Masker,
	no_response_body: HashSet<NoBodyRule>,
	guru_default: String,
	sink: Arc<dyn RecordSink>,
}

#[derive(Serialize)]
struct ServerLogLine<'a> {
	request: RequestLine<'a>,
	user_guid: Option<&'a str>,
	guru_id: &'a str,
	response: ResponseLine<'a>,
}

#[derive(Serialize)]
struct RequestLine<'a> {
	url: &'a str,
	method: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	payload: Option<Value>,
	headers: &'a [(String, String)],
}

#[derive(Serialize)]
struct ResponseLine<'a> {
	status: String,
	headers: &'a [(String, String)],
	#[serde(skip_serializing_if = "Option::is_none")]
	body: Option<&'a str>,
}

impl ServerRequestLogger {
	pub fn new<S: Into<String>>(
		target: impl Into<String>,
		masked_fields: impl IntoIterator<Item = S>,
		sink: Arc<dyn RecordSink>,
	) -> Self {
		Self {
			target: target.into(),
			masker: Masker::new(masked_fields),
			no_response_body: default_no_response_body(),
			guru_default: DEFAULT_GURU_ID.to_string(),
			sink,
		}
	}

	/// Replace the placeholder used when a request carries no correlation id.
	pub fn with_guru_default(mut self, guru_default: impl Into<String>) -> Self {
		self.guru_default = guru_default.into();
		self
	}

	/// Replace the mask character. `None` drops masked keys entirely.
	pub fn with_mask(mut self, mask: Option<char>) -> Self {
		self.masker = self.masker.with_mask(mask);
		self
	}

	/// Replace the no-body rule set.
	pub fn with_no_response_body(mut self, rules: HashSet<NoBodyRule>) -> Self {
		self.no_response_body = rules;
		self
	}

	/// Emit the access line for one exchange.
	pub fn log(&self, request: &RequestContext, response: &ResponseContext) {
		let payload = request.payload.as_ref().map(|p| self.masker.mask(p));

		let body = response
			.body
			.as_deref()
			.filter(|body| !body.is_empty())
			.filter(|_| {
				should_include_body(&self.no_response_body, &request.method, response.status)
			})
			.filter(|_| response.content_type().is_some_and(is_textual));

		let line = ServerLogLine {
			request: RequestLine {
				url: &request.url,
				method: request.method.as_str(),
				payload,
				headers: &request.headers,
			},
			user_guid: request.user_guid.as_deref(),
			guru_id: request.guru_id.as_deref().unwrap_or(&self.guru_default),
			response: ResponseLine {
				status: response.status_line(),
				headers: &response.headers,
				body,
			},
		};

		let raw = match serde_json::to_string(&line) {
			Ok(raw) => raw,
			Err(error) => {
				tracing::debug!(%error, "dropping unserializable access line");
				return;
			}
		};

		self.sink
			.emit(LogRecord::new(LogLevel::Info, self.target.clone(), raw));
	}
}
