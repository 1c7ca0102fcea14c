// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Wire shape of an error event.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use chronicle_core::LogLevel;

/// An error event, as encoded and attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
	/// Hyphen-less UUID identifying the event.
	pub event_id: String,
	pub timestamp: DateTime<Utc>,
	pub level: LogLevel,
	/// Name of the logger that produced the record.
	pub logger: String,
	pub platform: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub release: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub environment: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub server_name: Option<String>,
	pub exception: ExceptionValues,
	/// Extra attributes copied from the record.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub extra: BTreeMap<String, Value>,
	/// HTTP interface block, populated by [`RequestProcessor`].
	///
	/// [`RequestProcessor`]: crate::processors::RequestProcessor
	#[serde(
		rename = "sentry.interfaces.Http",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub http: Option<HttpInterface>,
}

/// Exception list wrapper; always holds at least one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionValues {
	pub values: Vec<ExceptionValue>,
}

/// One captured exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionValue {
	#[serde(rename = "type")]
	pub kind: String,
	pub value: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stacktrace: Option<String>,
}

/// The `sentry.interfaces.Http` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpInterface {
	pub method: String,
	/// Request URL with the query string stripped.
	pub url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query_string: Option<String>,
	pub headers: BTreeMap<String, String>,
	pub env: BTreeMap<String, String>,
	pub form: BTreeMap<String, String>,
}
