//! The forms a default may be registered in, before normalization.

use std::fmt;

use crate::Behavior;

/// A default as given to the registry.
///
/// Normalizing a strategy (see [`DefaultAssumption::normalize`]) yields a
/// [`Behavior`]. `Absent` and a strategy that always yields absence are
/// indistinguishable after normalization.
///
/// [`DefaultAssumption::normalize`]: crate::DefaultAssumption::normalize
#[derive(Clone, Default)]
pub enum Strategy {
	/// A ready-made behavior, used as-is.
	Behavior(Behavior),
	/// A provider name such as `"record"` or `"my_custom_default"`.
	Named(Box<str>),
	/// No default; resolves to the built-in [`Base`](crate::Base) provider.
	#[default]
	Absent,
}

impl Strategy {
	pub fn named(name: impl Into<Box<str>>) -> Self {
		Strategy::Named(name.into())
	}

	/// Returns the provider name for `Named` strategies.
	pub fn name(&self) -> Option<&str> {
		match self {
			Strategy::Named(name) => Some(name),
			_ => None,
		}
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, Strategy::Absent)
	}
}

impl From<Behavior> for Strategy {
	fn from(b: Behavior) -> Self {
		Strategy::Behavior(b)
	}
}

impl From<&str> for Strategy {
	fn from(name: &str) -> Self {
		Strategy::named(name)
	}
}

impl From<String> for Strategy {
	fn from(name: String) -> Self {
		Strategy::named(name)
	}
}

impl<T: Into<Strategy>> From<Option<T>> for Strategy {
	fn from(given: Option<T>) -> Self {
		given.map_or(Strategy::Absent, Into::into)
	}
}

impl fmt::Debug for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Strategy::Behavior(b) => f.debug_tuple("Behavior").field(&b.arity()).finish(),
			Strategy::Named(name) => f.debug_tuple("Named").field(name).finish(),
			Strategy::Absent => f.write_str("Absent"),
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Strategy::Behavior(_) => f.write_str("<behavior>"),
			Strategy::Named(name) => write!(f, "{name}"),
			Strategy::Absent => f.write_str("<absent>"),
		}
	}
}
