// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! On-disk logging configuration.
//!
//! A small TOML file sets the global level and per-target overrides:
//!
//! ```toml
//! level = "info"
//!
//! [targets]
//! "hyper" = "error"
//! "app::billing" = "debug"
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors loading the logging configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configured file does not exist. Fatal at startup.
	#[error("log config `{path}` not found")]
	NotFound { path: PathBuf },

	/// The file exists but could not be read.
	#[error("failed to read log config `{path}`: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The file is not valid TOML for this schema.
	#[error("failed to parse log config `{path}`: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// Parsed logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
	/// Global level directive.
	#[serde(default = "default_level")]
	pub level: String,
	/// Per-target level overrides.
	#[serde(default)]
	pub targets: BTreeMap<String, String>,
}

fn default_level() -> String {
	"warn".to_string()
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: default_level(),
			targets: BTreeMap::new(),
		}
	}
}

impl LogConfig {
	/// Render as an `EnvFilter` directive string, e.g.
	/// `warn,hyper=error,app::billing=debug`.
	pub fn env_filter_directive(&self) -> String {
		let mut directive = self.level.clone();
		for (target, level) in &self.targets {
			let _ = write!(directive, ",{target}={level}");
		}
		directive
	}
}

/// Load the logging configuration, failing fast when the file is absent.
pub fn load_log_config(path: impl AsRef<Path>) -> Result<LogConfig, ConfigError> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(ConfigError::NotFound {
			path: path.to_path_buf(),
		});
	}
	let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	toml::from_str(&raw).map_err(|source| ConfigError::Parse {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write as _;

	#[test]
	fn missing_file_is_fatal() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_log_config(dir.path().join("logging.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::NotFound { .. }));
	}

	#[test]
	fn parses_level_and_targets() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "level = \"info\"\n\n[targets]\n\"hyper\" = \"error\"").unwrap();

		let config = load_log_config(file.path()).unwrap();
		assert_eq!(config.level, "info");
		assert_eq!(config.targets.get("hyper").unwrap(), "error");
	}

	#[test]
	fn empty_file_uses_defaults() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let config = load_log_config(file.path()).unwrap();
		assert_eq!(config, LogConfig::default());
	}

	#[test]
	fn malformed_toml_is_a_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "level = [not toml").unwrap();
		let err = load_log_config(file.path()).unwrap_err();
		assert!(matches!(err, ConfigError::Parse { .. }));
	}

	#[test]
	fn directive_lists_global_then_targets() {
		let config = LogConfig {
			level: "warn".into(),
			targets: [
				("app::billing".to_string(), "debug".to_string()),
				("hyper".to_string(), "error".to_string()),
			]
			.into_iter()
			.collect(),
		};
		assert_eq!(
			config.env_filter_directive(),
			"warn,app::billing=debug,hyper=error"
		);
	}
}
