//! Strategy name to provider resolution.
//!
//! A strategy name is turned into a type name by converting it to
//! `UpperCamelCase` and qualifying it with a namespace:
//!
//! | strategy            | namespace          | type name                           |
//! |---------------------|--------------------|-------------------------------------|
//! | `record`            | `assume::defaults` | `assume::defaults::Record`          |
//! | `my_custom_default` | `assume::defaults` | `assume::defaults::MyCustomDefault` |
//!
//! Only `snake_case` names are strategies: a lowercase ASCII letter followed
//! by lowercase letters, digits and underscores. Anything else (`MyCustomDefault`,
//! `my-custom-default`, `admin/finder`) never matches a provider, even when
//! case conversion would produce an existing type name.
//!
//! The type is then looked up among the providers declared with
//! [`provider!`](crate::provider!) and constructed fresh. Nothing is cached.
//! Two providers declaring the same qualified name is an error.

use heck::ToUpperCamelCase;

use crate::provider::{self, Provider, ProviderStatic};
use crate::{ResolveError, Result};


/// Locates the provider type for a strategy name.
///
/// The resolver is stateless and created per-resolution.
#[derive(Debug, Clone, Copy)]
pub struct ClassResolver<'a> {
	name: &'a str,
	namespace: &'a str,
}

impl<'a> ClassResolver<'a> {
	pub fn new(name: &'a str, namespace: &'a str) -> Self {
		Self { name, namespace }
	}

	/// The unqualified `UpperCamelCase` type name.
	pub fn class_name(&self) -> String {
		self.name.to_upper_camel_case()
	}

	/// The qualified type name, `namespace::ClassName`.
	pub fn type_name(&self) -> String {
		format!("{}::{}", self.namespace, self.class_name())
	}

	/// Whether the name is a well-formed `snake_case` strategy name.
	pub fn is_strategy_name(&self) -> bool {
		let mut chars = self.name.chars();
		chars.next().is_some_and(|c| c.is_ascii_lowercase())
			&& chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
	}

	/// Finds the single registration for the type.
	///
	/// # Errors
	///
	/// Returns [`ResolveError::UnknownProvider`] for a malformed name or when
	/// nothing matches, and [`ResolveError::AmbiguousProvider`] when several
	/// linked providers declare the same qualified type name.
	pub fn find(&self) -> Result<&'static ProviderStatic> {
		if !self.is_strategy_name() {
			return Err(self.unknown());
		}

		let class_name = self.class_name();
		let mut found: Vec<_> = provider::all().filter(|p| p.matches(self.namespace, &class_name)).collect();

		match found.len() {
			0 => Err(self.unknown()),
			1 => Ok(found.remove(0)),
			_ => {
				let mut crates: Vec<_> = found.iter().map(|p| p.crate_name).collect();
				crates.sort_unstable();
				tracing::warn!(
					domain = "assume",
					strategy = self.name,
					type_name = %self.type_name(),
					crates = ?crates,
					"provider declared more than once",
				);
				Err(ResolveError::AmbiguousProvider {
					strategy: self.name.into(),
					type_name: self.type_name(),
					crates,
				})
			}
		}
	}

	/// Constructs a fresh instance of the provider type.
	///
	/// # Errors
	///
	/// Same as [`find`](Self::find).
	pub fn instance(&self) -> Result<Box<dyn Provider>> {
		let found = self.find()?;

		tracing::trace!(
			domain = "assume",
			strategy = self.name,
			provider = found.name,
			crate_name = found.crate_name,
			"instantiating provider",
		);
		Ok((found.construct)())
	}

	fn unknown(&self) -> ResolveError {
		ResolveError::UnknownProvider {
			strategy: self.name.into(),
			type_name: self.type_name(),
		}
	}
}
