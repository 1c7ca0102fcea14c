// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Filters that attach extra attributes to records.
//!
//! Typically installed on a pipeline to guarantee that a field exists by
//! the time a formatter references it, e.g. defaulting `guru_id` to `-`
//! for records produced outside any request.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::filter::RecordFilter;
use crate::record::LogRecord;

/// Sets each configured attribute only when the record lacks it.
pub struct ExtraDefaultsFilter {
	extra: BTreeMap<String, Value>,
}

impl ExtraDefaultsFilter {
	pub fn new<K, V>(extra: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		Self {
			extra: extra
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl RecordFilter for ExtraDefaultsFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		for (key, value) in &self.extra {
			record.set_extra_if_absent(key.clone(), value.clone());
		}
		true
	}
}

/// Sets each configured attribute unconditionally.
pub struct ExtraOverrideFilter {
	extra: BTreeMap<String, Value>,
}

impl ExtraOverrideFilter {
	pub fn new<K, V>(extra: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		Self {
			extra: extra
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl RecordFilter for ExtraOverrideFilter {
	fn filter(&self, record: &mut LogRecord) -> bool {
		for (key, value) in &self.extra {
			record.set_extra(key.clone(), value.clone());
		}
		true
	}
}
