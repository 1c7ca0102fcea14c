// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Suppression of known-noisy log lines.

use regex::Regex;

use crate::error::ChronicleError;
use crate::filter::RecordFilter;
use crate::record::{LogLevel, LogRecord};

/// One suppression rule: exact level, exact target, message pattern.
///
/// The pattern is anchored at the start of the message; the rest of the
/// message is unconstrained unless the pattern says otherwise.
#[derive(Debug, Clone)]
pub struct ExcludeRule {
	level: LogLevel,
	target: String,
	pattern: Regex,
}

impl ExcludeRule {
	pub fn new(
		level: LogLevel,
		target: impl Into<String>,
		pattern: &str,
	) -> Result<Self, ChronicleError> {
		let anchored = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
			ChronicleError::InvalidPattern {
				pattern: pattern.to_string(),
				source,
			}
		})?;
		Ok(Self {
			level,
			target: target.into(),
			pattern: anchored,
		})
	}

	/// Whether this rule suppresses the record.
	pub fn matches(&self, record: &LogRecord) -> bool {
		record.level == self.level
			&& record.target == self.target
			&& self.pattern.is_match(&record.message)
	}
}

/// Drops records matching any exclusion rule; everything else passes.
///
/// The table is fixed at construction and immutable thereafter.
pub struct NoiseFilter {
	rules: Vec<ExcludeRule>,
}

impl NoiseFilter {
	pub fn new(rules: Vec<ExcludeRule>) -> Self {
		Self { rules }
	}

	/// The stock table of known-noisy lines: telemetry collector outages
	/// and broker-connection churn that page nobody.
	pub fn with_default_rules() -> Self {
		let rules = [
			(
				LogLevel::Warn,
				"telemetry::collector",
				r"Data collector is (not contactable|unavailable)\.",
			),
			(
				LogLevel::Warn,
				"telemetry::collector",
				"An unexpected HTTP response was received",
			),
			(
				LogLevel::Error,
				"telemetry::reporter",
				"Unable to report main transaction metrics",
			),
			(
				LogLevel::Error,
				"amqp::consumer",
				"consumer: Connection to broker lost",
			),
			(
				LogLevel::Error,
				"telemetry::reporter",
				"Registration of the application",
			),
			(LogLevel::Warn, "amqp::connection", "Connection to broker lost"),
		]
		.into_iter()
		.map(|(level, target, pattern)| {
			ExcludeRule::new(level, target, pattern).expect("default exclude pattern compiles")
		})
		.collect();
		Self::new(rules)
	}

	pub fn rules(&self) -> &[ExcludeRule] {
		&self.rules
	}
}

impl RecordFilter for NoiseFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		!self.rules.iter().any(|rule| rule.matches(record))
	}
}
