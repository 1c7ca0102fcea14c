// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response-body gating for access lines.

use std::collections::HashSet;

use http::{Method, StatusCode};

/// A rule deciding when the response body is left out of the access line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NoBodyRule {
	/// Omit the body for this status, regardless of method.
	Status(u16),
	/// Omit the body for this (method, status) pair only.
	MethodStatus(Method, u16),
}

/// The default set: omit the body for every 2XX response.
pub fn default_no_response_body() -> HashSet<NoBodyRule> {
	(200..300).map(NoBodyRule::Status).collect()
}

/// Whether the body survives the no-body rules for this exchange.
pub(crate) fn should_include_body(
	rules: &HashSet<NoBodyRule>,
	method: &Method,
	status: StatusCode,
) -> bool {
	let code = status.as_u16();
	!rules.contains(&NoBodyRule::Status(code))
		&& !rules.contains(&NoBodyRule::MethodStatus(method.clone(), code))
}

/// Whether a content type is worth logging: JSON, XML, or any `text/*`.
pub(crate) fn is_textual(content_type: &str) -> bool {
	content_type == "application/json"
		|| content_type == "application/xml"
		|| content_type.starts_with("text/")
}
