// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request/response access logging and HTTP-aware record filters.
//!
//! This crate provides:
//! - [`ServerRequestLogger`] - One JSON access line per inbound request,
//!   with payload masking and response-body gating
//! - [`ClientRequestLogger`] - The outbound counterpart
//! - [`GuruFilter`] - Stamps the per-request correlation id onto records
//! - [`HttpStatusFilter`] - Suppresses records for HTTP exceptions outside
//!   a configured allow-list
//! - [`NoBodyRule`] - Configuration for when a response body is left out
//!   of the access line
//!
//! The host framework supplies immutable [`RequestContext`] /
//! [`ResponseContext`] snapshots; nothing here reads request state from
//! globals.
//!
//! [`RequestContext`]: chronicle_core::RequestContext
//! [`ResponseContext`]: chronicle_core::ResponseContext

pub mod body;
pub mod client;
pub mod guru;
pub mod server;
pub mod status;

pub use body::{default_no_response_body, NoBodyRule};
pub use client::ClientRequestLogger;
pub use guru::{GuruFilter, DEFAULT_GURU_ID};
pub use server::ServerRequestLogger;
pub use status::HttpStatusFilter;

pub use chronicle_core::GURU_ID_HEADER;
