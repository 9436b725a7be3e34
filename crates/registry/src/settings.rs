//! TOML settings for the process-wide defaults.
//!
//! ```toml
//! # Strategy used for classes with no registered default.
//! default = "record"
//! # Namespace strategy names are resolved under.
//! namespace = "my_app::defaults"
//! ```
//!
//! Both keys are optional. Without `default` the fallback is absent; without
//! `namespace` providers are looked up under [`NAMESPACE`](crate::NAMESPACE).

use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, Strategy};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	/// Fallback strategy name.
	pub default: Option<String>,
	/// Provider namespace override.
	pub namespace: Option<String>,
}

impl Settings {
	pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a settings file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml(&input)
	}

	/// The fallback as a strategy, absent when not configured.
	pub fn strategy(&self) -> Strategy {
		self.default.as_deref().into()
	}
}
