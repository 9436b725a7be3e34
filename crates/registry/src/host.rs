//! The context a behavior runs in.

use std::any::Any;

use crate::{Class, Value};

/// A type whose instances carry assumed accessors.
///
/// The registry resolves defaults against [`Host::class`], which must
/// report the instance's actual class rather than the class the accessor
/// was declared on.
pub trait Host: Any + Send + Sync {
	fn class(&self) -> Class;

	/// Request-scoped lookup facility used by the [`Record`](crate::Record) provider.
	fn lookup(&self) -> Option<&dyn Lookup> {
		None
	}
}

/// Parameter and record access for providers that load entities by name.
pub trait Lookup {
	/// Returns a request parameter, such as `"id"`.
	fn param(&self, key: &str) -> Option<&str>;

	/// Loads the record of type `model` identified by `id`.
	fn find(&self, model: &str, id: &str) -> Option<Value>;
}

/// Arguments passed to a [`Behavior`](crate::Behavior) when it is invoked.
///
/// Both parts are optional: a behavior may be invoked without a name, and
/// outside of any host.
#[derive(Clone, Copy, Default)]
pub struct Invocation<'a> {
	name: Option<&'a str>,
	host: Option<&'a (dyn Host + 'static)>,
}

impl<'a> Invocation<'a> {
	/// Invocation carrying the accessor name.
	pub fn new(name: &'a str) -> Self {
		Self {
			name: Some(name),
			host: None,
		}
	}

	/// Invocation with neither a name nor a host.
	pub fn bare() -> Self {
		Self::default()
	}

	pub fn with_host(mut self, host: &'a (dyn Host + 'static)) -> Self {
		self.host = Some(host);
		self
	}

	pub fn name(&self) -> Option<&'a str> {
		self.name
	}

	/// Downcasts the host to its concrete type.
	pub fn host<T: Host>(&self) -> Option<&'a T> {
		let any: &'a (dyn Any + 'static) = self.host?;
		any.downcast_ref::<T>()
	}

	pub fn lookup(&self) -> Option<&'a dyn Lookup> {
		self.host?.lookup()
	}
}
