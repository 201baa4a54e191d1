//! User configuration loading.
//!
//! Configuration lives at `$XDG_CONFIG_HOME/sawah/config.toml` (or the
//! platform equivalent) and is entirely optional:
//!
//! ```toml
//! theme = "paddy_light"
//! show_citation = true
//! ```
//!
//! A missing file yields defaults; a file that exists but fails to parse is
//! a startup error, since silently ignoring a user's config is worse than
//! refusing to start.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from reading or parsing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	#[error("TOML parse error in {path}: {error}")]
	Parse {
		path: PathBuf,
		error: toml::de::Error,
	},
}

/// Parsed configuration. Unknown keys are ignored so configs stay forward
/// compatible.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Theme name; unknown names fall back to the default theme with a
	/// logged warning rather than failing startup.
	pub theme: Option<String>,
	/// Show the citation section of the detail pane.
	pub show_citation: bool,
}

impl Config {
	pub fn parse(input: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(input)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content).map_err(|e| ConfigError::Parse {
			path: path.to_path_buf(),
			error: e,
		})
	}

	/// Load from the default location; a missing file yields defaults.
	pub fn load_default() -> Result<Self, ConfigError> {
		let Some(path) = config_path() else {
			return Ok(Self::default());
		};
		if !path.exists() {
			return Ok(Self::default());
		}
		Self::load(&path)
	}
}

/// Default configuration file path, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("sawah").join("config.toml"))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::Config;

	#[test]
	fn empty_input_yields_defaults() {
		let config = Config::parse("").unwrap();
		assert_eq!(config.theme, None);
		assert!(!config.show_citation);
	}

	#[test]
	fn parses_both_fields() {
		let config = Config::parse("theme = \"paddy_light\"\nshow_citation = true\n").unwrap();
		assert_eq!(config.theme.as_deref(), Some("paddy_light"));
		assert!(config.show_citation);
	}

	#[test]
	fn unknown_keys_are_ignored() {
		let config = Config::parse("theme = \"paddy_dark\"\nfuture_knob = 3\n").unwrap();
		assert_eq!(config.theme.as_deref(), Some("paddy_dark"));
	}

	#[test]
	fn invalid_toml_is_an_error() {
		assert!(Config::parse("theme = [broken").is_err());
	}
}
