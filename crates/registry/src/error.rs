//! Error types for default resolution and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a strategy into a behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// No provider type matches the strategy name under the namespace.
	#[error("no default provider {type_name} for strategy `{strategy}`")]
	UnknownProvider {
		/// The strategy name as given, e.g. `my_custom_default`.
		strategy: Box<str>,
		/// The qualified type name that was looked up.
		type_name: String,
	},

	/// More than one linked provider declares the same qualified type name.
	#[error("default provider {type_name} for strategy `{strategy}` is declared by more than one crate: {}", .crates.join(", "))]
	AmbiguousProvider {
		/// The strategy name as given.
		strategy: Box<str>,
		/// The qualified type name that was looked up.
		type_name: String,
		/// Declaring crate of each match, sorted.
		crates: Vec<&'static str>,
	},
}

/// Result type for resolution operations.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// Errors that can occur when loading [`Settings`](crate::Settings).
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a settings file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
