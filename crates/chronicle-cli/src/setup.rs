// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Subscriber setup from parsed logging options.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::LoggingOptions;

/// Initialize the global subscriber for the console path.
///
/// `RUST_LOG` wins over the flag-derived level when set. Syslog, email,
/// and sentry transports are wired by the application through its
/// configuration function; only the stderr layer is owned here. Calling
/// this twice is a no-op, not an error.
pub fn init_logging(options: &LoggingOptions) {
	if !options.enable_console {
		return;
	}

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(options.level.as_str().to_ascii_lowercase()));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
