// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error-event payload construction and attachment.
//!
//! This crate turns a record's exception into an encoded error event and
//! attaches it back onto the record, where a formatter or downstream
//! handler can pick it up under the `sentry` extra key:
//!
//! - [`Event`] - The wire shape of an error event, including the
//!   `sentry.interfaces.Http` block
//! - [`EventBuilder`] - Builds events from records; processors are
//!   configuration, not subclasses
//! - [`SanitizeProcessor`] - Scrubs a fixed set of sensitive field names
//!   from outgoing events
//! - [`RequestProcessor`] - Enriches events with the record's request
//!   snapshot
//! - [`SentryFilter`] - The attachment filter: no exception means reject,
//!   and any build/encode failure rejects rather than raising
//!
//! Delivery to the error-tracking backend is someone else's job; this
//! crate only builds, encodes, and attaches payloads.

pub mod builder;
pub mod encode;
pub mod error;
pub mod event;
pub mod filter;
pub mod processors;

pub use builder::EventBuilder;
pub use encode::{decode, encode};
pub use error::{Result, SentryError};
pub use event::{Event, ExceptionValue, ExceptionValues, HttpInterface};
pub use filter::{SentryFilter, SENTRY_KEY};
pub use processors::{Processor, RequestProcessor, SanitizeProcessor, SANITIZED_FIELDS};
