// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Version stamping for log records.

use crate::filter::RecordFilter;
use crate::record::LogRecord;

/// Default extra key the version is stored under.
pub const DEFAULT_VERSION_KEY: &str = "version";

/// Stamps a package version onto every record.
///
/// The version is resolved at compile time by the caller, typically
/// `env!("CARGO_PKG_VERSION")`.
pub struct VersionFilter {
	key: String,
	version: String,
}

impl VersionFilter {
	pub fn new(version: impl Into<String>) -> Self {
		Self {
			key: DEFAULT_VERSION_KEY.to_string(),
			version: version.into(),
		}
	}

	/// Store the version under a different extra key.
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();
		self
	}
}

impl RecordFilter for VersionFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		record.set_extra(self.key.clone(), self.version.clone());
		true
	}
}
