// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Core logging utilities for Chronicle.
//!
//! This crate provides:
//! - [`LogRecord`] - A structured log record with level, target, message,
//!   exception info, and open-ended extra attributes
//! - [`RecordFilter`] / [`FilterChain`] - The filter seam every other
//!   Chronicle crate plugs into
//! - [`NoiseFilter`] - Drops known-noisy log lines by (level, target,
//!   message pattern)
//! - [`ExtraDefaultsFilter`] / [`ExtraOverrideFilter`] - Attach default or
//!   forced extra attributes to records
//! - [`VersionFilter`] - Stamps a package version onto every record
//! - [`TextFormatter`] - Plain-text rendering, with a variant that omits
//!   exception text
//! - [`LogPipeline`] / [`PipelineLayer`] - Filters ahead of a formatter and
//!   a shared writer, fed either directly or from a tracing subscriber
//!
//! Request-scoped state is never read from globals: callers attach an
//! immutable [`RequestContext`] snapshot to the records (and loggers) that
//! need one.
//!
//! # Usage
//!
//! ```ignore
//! use chronicle_core::{FilterChain, LogPipeline, NoiseFilter, PipelineLayer, TextFormatter};
//! use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
//!
//! let pipeline = LogPipeline::new(
//!     FilterChain::new().with(NoiseFilter::with_default_rules()),
//!     TextFormatter::new(),
//!     std::io::stderr(),
//! );
//!
//! tracing_subscriber::registry()
//!     .with(PipelineLayer::new(pipeline.into()))
//!     .init();
//! ```

pub mod context;
pub mod error;
pub mod extra;
pub mod filter;
pub mod format;
pub mod layer;
pub mod noise;
pub mod pipeline;
pub mod record;
pub mod version;

pub use context::{RequestContext, ResponseContext, GURU_ID_HEADER};
pub use error::{ChronicleError, Result};
pub use extra::{ExtraDefaultsFilter, ExtraOverrideFilter};
pub use filter::{FilterChain, RecordFilter};
pub use format::TextFormatter;
pub use layer::PipelineLayer;
pub use noise::{ExcludeRule, NoiseFilter};
pub use pipeline::{LogPipeline, RecordSink};
pub use record::{ExceptionInfo, LogLevel, LogRecord};
pub use version::VersionFilter;
