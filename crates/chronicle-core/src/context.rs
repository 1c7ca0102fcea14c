// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Immutable request/response snapshots supplied by the hosting framework.
//!
//! Chronicle never reads "the current request" from a global. The host
//! builds one [`RequestContext`] (and, for access logging, one
//! [`ResponseContext`]) per request and passes it to whichever filter or
//! logger needs it.

use std::collections::BTreeMap;

use http::{Method, StatusCode};
use serde_json::Value;

/// Header that propagates the correlation id between services.
pub const GURU_ID_HEADER: &str = "x-guru-id";

/// Snapshot of an in-flight HTTP request.
#[derive(Debug, Clone)]
pub struct RequestContext {
	pub method: Method,
	/// Full request URL, including any query string.
	pub url: String,
	pub query_string: Option<String>,
	/// Header pairs in arrival order. Repeated names are preserved.
	pub headers: Vec<(String, String)>,
	/// Environment of the request, e.g. CGI-style server variables.
	pub env: BTreeMap<String, String>,
	/// Decoded form fields.
	pub form: BTreeMap<String, String>,
	/// Decoded request body, when the host parsed one.
	pub payload: Option<Value>,
	/// Correlation id assigned to this request.
	pub guru_id: Option<String>,
	/// Authenticated user's GUID.
	pub user_guid: Option<String>,
}

impl RequestContext {
	pub fn new(method: Method, url: impl Into<String>) -> Self {
		Self {
			method,
			url: url.into(),
			query_string: None,
			headers: Vec::new(),
			env: BTreeMap::new(),
			form: BTreeMap::new(),
			payload: None,
			guru_id: None,
			user_guid: None,
		}
	}

	pub fn with_query_string(mut self, query: impl Into<String>) -> Self {
		self.query_string = Some(query.into());
		self
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.env.insert(name.into(), value.into());
		self
	}

	pub fn with_form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.form.insert(name.into(), value.into());
		self
	}

	pub fn with_payload(mut self, payload: Value) -> Self {
		self.payload = Some(payload);
		self
	}

	pub fn with_guru_id(mut self, guru_id: impl Into<String>) -> Self {
		self.guru_id = Some(guru_id.into());
		self
	}

	pub fn with_user_guid(mut self, user_guid: impl Into<String>) -> Self {
		self.user_guid = Some(user_guid.into());
		self
	}

	/// First value of a header, matched case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// The URL with any query string stripped.
	pub fn url_without_query(&self) -> &str {
		self.url.split('?').next().unwrap_or(&self.url)
	}
}

/// Snapshot of the response paired with a request.
#[derive(Debug, Clone)]
pub struct ResponseContext {
	pub status: StatusCode,
	/// Header pairs in emission order.
	pub headers: Vec<(String, String)>,
	/// Response body, when textual and available to the host.
	pub body: Option<String>,
}

impl ResponseContext {
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: Vec::new(),
			body: None,
		}
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}

	/// First value of a header, matched case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}

	/// The `Content-Type` header value, if present.
	pub fn content_type(&self) -> Option<&str> {
		self.header("content-type")
	}

	/// Status line in `"204 No Content"` form.
	pub fn status_line(&self) -> String {
		match self.status.canonical_reason() {
			Some(reason) => format!("{} {}", self.status.as_u16(), reason),
			None => self.status.as_u16().to_string(),
		}
	}
}
