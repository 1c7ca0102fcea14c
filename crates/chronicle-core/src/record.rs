// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The log record model shared by every filter and formatter.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::RequestContext;
use crate::error::ChronicleError;

/// Severity of a log record.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Trace,
	Debug,
	Info,
	#[default]
	Warn,
	Error,
}

impl LogLevel {
	/// Convert from a tracing level.
	pub fn from_tracing(level: &tracing::Level) -> Self {
		match *level {
			tracing::Level::TRACE => Self::Trace,
			tracing::Level::DEBUG => Self::Debug,
			tracing::Level::INFO => Self::Info,
			tracing::Level::WARN => Self::Warn,
			tracing::Level::ERROR => Self::Error,
		}
	}

	/// Uppercase name, as rendered in log lines.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Trace => "TRACE",
			Self::Debug => "DEBUG",
			Self::Info => "INFO",
			Self::Warn => "WARN",
			Self::Error => "ERROR",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = ChronicleError;

	/// Parse a level name, case-insensitive.
	///
	/// `WARNING` is accepted as an alias for `WARN`, and `CRITICAL`/`FATAL`
	/// as aliases for `ERROR`, matching the choices exposed on the command
	/// line.
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"trace" => Ok(Self::Trace),
			"debug" => Ok(Self::Debug),
			"info" => Ok(Self::Info),
			"warn" | "warning" => Ok(Self::Warn),
			"error" | "critical" | "fatal" => Ok(Self::Error),
			_ => Err(ChronicleError::UnknownLevel(s.to_string())),
		}
	}
}

/// Exception details carried by a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInfo {
	/// Short type name, e.g. `io::Error` or `http`.
	pub kind: String,
	/// Human-readable description.
	pub message: String,
	/// HTTP status code, for HTTP-layer exceptions only.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<u16>,
	/// Rendered backtrace, when one was captured.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub backtrace: Option<String>,
}

impl ExceptionInfo {
	/// Create exception info with a kind and message.
	pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			message: message.into(),
			status: None,
			backtrace: None,
		}
	}

	/// Create exception info for an HTTP-layer error.
	pub fn http(status: http::StatusCode, message: impl Into<String>) -> Self {
		Self {
			kind: "http".to_string(),
			message: message.into(),
			status: Some(status.as_u16()),
			backtrace: None,
		}
	}

	/// Capture an error value as exception info.
	pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
		Self::new("error", err.to_string())
	}

	/// Attach a rendered backtrace.
	pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
		self.backtrace = Some(backtrace.into());
		self
	}

	/// Whether this exception came from the HTTP layer.
	pub fn is_http(&self) -> bool {
		self.status.is_some()
	}
}

/// A single structured log event flowing through the filter chain.
///
/// Filters may read and add extra attributes but never remove or reorder
/// message content. The optional request snapshot replaces the implicit
/// "current request" state of thread-local designs: whoever produces the
/// record decides what request it belongs to.
#[derive(Debug, Clone)]
pub struct LogRecord {
	pub level: LogLevel,
	/// Logger name, in module-path form.
	pub target: String,
	pub message: String,
	pub timestamp: DateTime<Utc>,
	pub exception: Option<ExceptionInfo>,
	pub request: Option<Arc<RequestContext>>,
	/// Open-ended extra attributes, JSON-valued.
	pub extra: BTreeMap<String, Value>,
}

impl LogRecord {
	/// Create a record stamped with the current time.
	pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			level,
			target: target.into(),
			message: message.into(),
			timestamp: Utc::now(),
			exception: None,
			request: None,
			extra: BTreeMap::new(),
		}
	}

	/// Attach exception info.
	pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
		self.exception = Some(exception);
		self
	}

	/// Attach an immutable request snapshot.
	pub fn with_request(mut self, request: Arc<RequestContext>) -> Self {
		self.request = Some(request);
		self
	}

	/// Attach an extra attribute.
	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}

	/// Set an extra attribute, overwriting any existing value.
	pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.extra.insert(key.into(), value.into());
	}

	/// Set an extra attribute only when the key is absent.
	pub fn set_extra_if_absent(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.extra.entry(key.into()).or_insert_with(|| value.into());
	}

	/// Look up an extra attribute.
	pub fn extra(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_ordering() {
		assert!(LogLevel::Trace < LogLevel::Debug);
		assert!(LogLevel::Debug < LogLevel::Info);
		assert!(LogLevel::Info < LogLevel::Warn);
		assert!(LogLevel::Warn < LogLevel::Error);
	}

	#[test]
	fn level_parsing_accepts_aliases() {
		assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
		assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
		assert_eq!("CRITICAL".parse::<LogLevel>().unwrap(), LogLevel::Error);
		assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Error);
		assert_eq!("Info".parse::<LogLevel>().unwrap(), LogLevel::Info);
	}

	#[test]
	fn level_parsing_rejects_unknown() {
		let err = "verbose".parse::<LogLevel>().unwrap_err();
		assert!(err.to_string().contains("verbose"));
	}

	#[test]
	fn extra_defaulting_does_not_overwrite() {
		let mut record = LogRecord::new(LogLevel::Info, "test", "hello");
		record.set_extra("guru_id", "abc");
		record.set_extra_if_absent("guru_id", "-");
		assert_eq!(record.extra("guru_id").unwrap(), "abc");
	}

	#[test]
	fn http_exception_carries_status() {
		let exc = ExceptionInfo::http(http::StatusCode::NOT_FOUND, "no such thing");
		assert!(exc.is_http());
		assert_eq!(exc.status, Some(404));
	}
}
