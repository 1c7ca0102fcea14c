// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Standard logging flags for service binaries.

use clap::Args;

use chronicle_core::LogLevel;

/// Logging flags shared by every service binary.
///
/// Flatten into a binary's clap parser with `#[command(flatten)]`.
#[derive(Debug, Clone, Args)]
pub struct LoggingArgs {
	/// Set the logging level.
	#[arg(
		short = 'l',
		long = "log-level",
		value_name = "LEVEL",
		default_value = "warn",
		value_parser = parse_level
	)]
	pub log_level: LogLevel,

	/// Mirror log output to syslog.
	#[arg(long, default_value_t = false)]
	pub enable_syslog: bool,

	/// Suppress the default stderr log output.
	#[arg(long, default_value_t = false)]
	pub disable_stderrlog: bool,

	/// Send high-severity records by email.
	#[arg(long, default_value_t = false)]
	pub enable_emaillog: bool,

	/// Forward error records to the error-tracking backend.
	#[arg(long, default_value_t = false)]
	pub enable_sentrylog: bool,
}

/// Accepts DEBUG/INFO/WARN/WARNING/ERROR/CRITICAL/FATAL in any case.
fn parse_level(value: &str) -> Result<LogLevel, String> {
	value.parse::<LogLevel>().map_err(|e| e.to_string())
}

/// Options handed to the application's logging configuration function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingOptions {
	pub enable_console: bool,
	pub enable_syslog: bool,
	pub enable_email: bool,
	pub enable_sentry: bool,
	pub level: LogLevel,
}

impl LoggingArgs {
	/// Derive the configuration options from the parsed flags.
	pub fn options(&self) -> LoggingOptions {
		LoggingOptions {
			enable_console: !self.disable_stderrlog,
			enable_syslog: self.enable_syslog,
			enable_email: self.enable_emaillog,
			enable_sentry: self.enable_sentrylog,
			level: self.log_level,
		}
	}

	/// Call the application-supplied configuration function once.
	pub fn configure<F: FnOnce(LoggingOptions)>(&self, configure_fn: F) {
		configure_fn(self.options());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[derive(Parser)]
	struct TestCli {
		#[command(flatten)]
		logging: LoggingArgs,
	}

	fn parse(argv: &[&str]) -> LoggingArgs {
		TestCli::try_parse_from([&["test"], argv].concat())
			.unwrap()
			.logging
	}

	#[test]
	fn defaults_match_the_contract() {
		let options = parse(&[]).options();
		assert_eq!(
			options,
			LoggingOptions {
				enable_console: true,
				enable_syslog: false,
				enable_email: false,
				enable_sentry: false,
				level: LogLevel::Warn,
			}
		);
	}

	#[test]
	fn short_flag_sets_the_level() {
		assert_eq!(parse(&["-l", "debug"]).log_level, LogLevel::Debug);
	}

	#[test]
	fn level_aliases_parse_case_insensitively() {
		assert_eq!(parse(&["--log-level", "WARNING"]).log_level, LogLevel::Warn);
		assert_eq!(parse(&["--log-level", "CRITICAL"]).log_level, LogLevel::Error);
		assert_eq!(parse(&["--log-level", "fatal"]).log_level, LogLevel::Error);
		assert_eq!(parse(&["--log-level", "Info"]).log_level, LogLevel::Info);
	}

	#[test]
	fn unknown_levels_are_rejected() {
		assert!(TestCli::try_parse_from(["test", "--log-level", "verbose"]).is_err());
	}

	#[test]
	fn toggles_invert_console_and_enable_transports() {
		let options = parse(&[
			"--disable-stderrlog",
			"--enable-syslog",
			"--enable-emaillog",
			"--enable-sentrylog",
		])
		.options();
		assert!(!options.enable_console);
		assert!(options.enable_syslog);
		assert!(options.enable_email);
		assert!(options.enable_sentry);
	}

	#[test]
	fn configure_invokes_the_callback_once_with_options() {
		let args = parse(&["-l", "error"]);
		let mut seen = None;
		args.configure(|options| seen = Some(options));
		assert_eq!(seen.unwrap().level, LogLevel::Error);
	}
}
