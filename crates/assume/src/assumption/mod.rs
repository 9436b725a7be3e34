//! A single assumed accessor.

use assume_registry::{Behavior, DefaultAssumption, Invocation, ResolveError, Value, defaults};

use crate::Assumable;

#[cfg(test)]
mod tests;

/// An accessor name plus, optionally, the behavior that implements it.
///
/// Declaring an assumption resolves nothing. On first [`fetch`](Self::fetch)
/// for a host, the behavior is taken from the declaration or resolved from
/// the registry for the host's actual class, invoked with the accessor name
/// and the host, and the result stored in the host's [`Memo`](crate::Memo).
#[derive(Debug, Clone)]
pub struct Assumption {
	name: &'static str,
	block: Option<Behavior>,
}

impl Assumption {
	pub const fn new(name: &'static str) -> Self {
		Self { name, block: None }
	}

	/// Uses `block` instead of the class default.
	pub fn with_block(mut self, block: Behavior) -> Self {
		self.block = Some(block);
		self
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn block(&self) -> Option<&Behavior> {
		self.block.as_ref()
	}

	/// Returns the memoized value, resolving against the process-wide registry.
	pub fn fetch<H: Assumable>(&self, host: &H) -> Result<Option<Value>, ResolveError> {
		self.fetch_in(host, defaults())
	}

	/// Returns the memoized value, resolving against `registry`.
	///
	/// # Errors
	///
	/// Propagates [`ResolveError`] when the class default names a provider
	/// that does not exist. Failures are not memoized.
	pub fn fetch_in<H: Assumable>(&self, host: &H, registry: &DefaultAssumption) -> Result<Option<Value>, ResolveError> {
		let memo = host.memo();
		if let Some(value) = memo.get(self.name) {
			return Ok(value);
		}

		let behavior = match &self.block {
			Some(block) => block.clone(),
			None => registry.resolve(&host.class())?,
		};

		tracing::trace!(domain = "assume", accessor = self.name, "computing assumed value");
		let value = behavior.call(&Invocation::new(self.name).with_host(host));
		Ok(memo.store(self.name, value))
	}
}
