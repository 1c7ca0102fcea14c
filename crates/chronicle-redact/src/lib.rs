// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Recursive masking of sensitive fields in JSON payloads.
//!
//! A [`Masker`] owns a set of field names. Applying it to a JSON value
//! returns a copy where every key in the set has its value replaced by a
//! fixed placeholder: string values become [`MASK_LEN`] repetitions of the
//! mask character (hiding the original length), anything else becomes the
//! single mask character. Keys outside the set are copied, recursing into
//! nested objects. Non-object inputs pass through unchanged, and the input
//! is never mutated.
//!
//! Masking is idempotent: a placeholder is itself a string whose key is in
//! the set, so masking masked output yields the same placeholder.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Width of the placeholder for masked string values.
pub const MASK_LEN: usize = 8;

/// Default mask character.
pub const DEFAULT_MASK: char = 'X';

/// Masks a fixed set of field names in nested JSON objects.
#[derive(Debug, Clone)]
pub struct Masker {
	fields: HashSet<String>,
	mask: Option<char>,
}

impl Masker {
	/// A masker over the given field names, using [`DEFAULT_MASK`].
	pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
		Self {
			fields: fields.into_iter().map(Into::into).collect(),
			mask: Some(DEFAULT_MASK),
		}
	}

	/// Replace the mask character. `None` drops masked keys entirely
	/// instead of replacing their values.
	pub fn with_mask(mut self, mask: Option<char>) -> Self {
		self.mask = mask;
		self
	}

	/// Whether a key belongs to the masked set.
	pub fn contains(&self, key: &str) -> bool {
		self.fields.contains(key)
	}

	/// The placeholder masked string values are replaced with, if any.
	pub fn placeholder(&self) -> Option<String> {
		self.mask.map(|c| c.to_string().repeat(MASK_LEN))
	}

	/// The replacement for a single flagged value.
	pub fn mask_value(&self, value: &Value) -> Value {
		match self.mask {
			Some(mask) => match value {
				Value::String(_) => Value::String(mask.to_string().repeat(MASK_LEN)),
				_ => Value::String(mask.to_string()),
			},
			None => Value::Null,
		}
	}

	/// Return a masked copy of `payload`.
	///
	/// Non-object inputs pass through unchanged; arrays are copied as-is
	/// without descending into their elements.
	pub fn mask(&self, payload: &Value) -> Value {
		match payload {
			Value::Object(map) => Value::Object(self.mask_object(map)),
			other => other.clone(),
		}
	}

	fn mask_object(&self, map: &Map<String, Value>) -> Map<String, Value> {
		let mut masked = Map::with_capacity(map.len());
		for (key, value) in map {
			if self.fields.contains(key) {
				if self.mask.is_none() {
					continue;
				}
				masked.insert(key.clone(), self.mask_value(value));
			} else if let Value::Object(nested) = value {
				masked.insert(key.clone(), Value::Object(self.mask_object(nested)));
			} else {
				masked.insert(key.clone(), value.clone());
			}
		}
		masked
	}
}

/// One-shot helper over [`Masker`] with the default mask.
pub fn mask_fields(payload: &Value, fields: &[&str]) -> Value {
	Masker::new(fields.iter().copied()).mask(payload)
}
