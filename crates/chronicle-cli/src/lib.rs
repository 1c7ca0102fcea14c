// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Command-line flags and configuration wiring for Chronicle logging.
//!
//! Service binaries flatten [`LoggingArgs`] into their clap parser to get
//! the standard logging flags, then hand the derived [`LoggingOptions`] to
//! their own configuration function:
//!
//! ```ignore
//! use clap::Parser;
//! use chronicle_cli::LoggingArgs;
//!
//! #[derive(Parser)]
//! struct Args {
//!     #[command(flatten)]
//!     logging: LoggingArgs,
//! }
//!
//! let args = Args::parse();
//! args.logging.configure(|options| {
//!     // wire console/syslog/email/sentry handlers here
//! });
//! ```
//!
//! [`load_log_config`] reads an on-disk TOML logging configuration; a
//! missing file is fatal at startup, never retried.

pub mod args;
pub mod config;
pub mod setup;

pub use args::{LoggingArgs, LoggingOptions};
pub use config::{load_log_config, ConfigError, LogConfig};
pub use setup::init_logging;
