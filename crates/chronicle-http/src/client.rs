// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Access logging for outbound requests.

use std::sync::Arc;

use serde::Serialize;

use chronicle_core::{
	LogLevel, LogRecord, RecordSink, RequestContext, ResponseContext, GURU_ID_HEADER,
};

/// Predicate deciding whether a response body is logged.
pub type BodyPredicate = Box<dyn Fn(&ResponseContext) -> bool + Send + Sync>;

/// Emits one JSON access line per outbound request this service makes.
///
/// Unlike the server variant, the response body is included whenever the
/// body predicate allows it (default: always), and the correlation id is
/// taken from the request's propagation header when present.
pub struct ClientRequestLogger {
	target: String,
	sink: Arc<dyn RecordSink>,
	body_predicate: Option<BodyPredicate>,
}

#[derive(Serialize)]
struct ClientLogLine<'a> {
	request: RequestLine<'a>,
	response: ResponseLine<'a>,
	#[serde(skip_serializing_if = "Option::is_none")]
	guru_id: Option<&'a str>,
}

#[derive(Serialize)]
struct RequestLine<'a> {
	url: &'a str,
	method: &'a str,
	headers: &'a [(String, String)],
}

#[derive(Serialize)]
struct ResponseLine<'a> {
	status: u16,
	headers: &'a [(String, String)],
	#[serde(skip_serializing_if = "Option::is_none")]
	body: Option<&'a str>,
}

impl ClientRequestLogger {
	pub fn new(target: impl Into<String>, sink: Arc<dyn RecordSink>) -> Self {
		Self {
			target: target.into(),
			sink,
			body_predicate: None,
		}
	}

	/// Gate response-body inclusion on a predicate.
	pub fn with_body_predicate(
		mut self,
		predicate: impl Fn(&ResponseContext) -> bool + Send + Sync + 'static,
	) -> Self {
		self.body_predicate = Some(Box::new(predicate));
		self
	}

	fn include_body(&self, response: &ResponseContext) -> bool {
		match &self.body_predicate {
			Some(predicate) => predicate(response),
			None => true,
		}
	}

	/// Emit the access line for one exchange.
	pub fn log(&self, request: &RequestContext, response: &ResponseContext) {
		let line = ClientLogLine {
			request: RequestLine {
				url: &request.url,
				method: request.method.as_str(),
				headers: &request.headers,
			},
			response: ResponseLine {
				status: response.status.as_u16(),
				headers: &response.headers,
				body: response
					.body
					.as_deref()
					.filter(|_| self.include_body(response)),
			},
			guru_id: request.header(GURU_ID_HEADER),
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

#[cfg(test)]
mod tests {
	use super::*;
	use http::{Method, StatusCode};
	use parking_lot::Mutex;
	use serde_json::Value;

	#[derive(Default)]
	struct TestSink {
		records: Mutex<Vec<LogRecord>>,
	}

	impl RecordSink for TestSink {
		fn emit(&self, record: LogRecord) {
			self.records.lock().push(record);
		}
	}

	impl TestSink {
		fn only_line(&self) -> Value {
			let records = self.records.lock();
			assert_eq!(records.len(), 1);
			serde_json::from_str(&records[0].message).unwrap()
		}
	}

	fn exchange() -> (RequestContext, ResponseContext) {
		let request = RequestContext::new(Method::GET, "https://upstream.example.test/rates")
			.with_header("Accept", "application/json")
			.with_header("X-Guru-Id", "g-55");
		let response = ResponseContext::new(StatusCode::OK)
			.with_header("Content-Type", "application/json")
			.with_body("{\"usd\":1.0}");
		(request, response)
	}

	#[test]
	fn logs_request_response_and_propagated_guru_id() {
		let sink = Arc::new(TestSink::default());
		let (request, response) = exchange();
		ClientRequestLogger::new("upstream.access", sink.clone()).log(&request, &response);
		let line = sink.only_line();
		assert_eq!(line["request"]["method"], "GET");
		assert_eq!(line["response"]["status"], 200);
		assert_eq!(line["response"]["body"], "{\"usd\":1.0}");
		assert_eq!(line["guru_id"], "g-55");
	}

	#[test]
	fn guru_id_is_absent_without_the_header() {
		let sink = Arc::new(TestSink::default());
		let request = RequestContext::new(Method::GET, "https://upstream.example.test/rates");
		let response = ResponseContext::new(StatusCode::OK);
		ClientRequestLogger::new("upstream.access", sink.clone()).log(&request, &response);
		let line = sink.only_line();
		assert!(line.get("guru_id").is_none());
	}

	#[test]
	fn body_predicate_can_suppress_the_body() {
		let sink = Arc::new(TestSink::default());
		let (request, response) = exchange();
		ClientRequestLogger::new("upstream.access", sink.clone())
			.with_body_predicate(|response| response.status.is_client_error())
			.log(&request, &response);
		let line = sink.only_line();
		assert!(line["response"].get("body").is_none());
	}
}
