//! Normalized default-producing callables.

use std::fmt;
use std::sync::Arc;

use crate::{Invocation, Value};

type BehaviorFn = dyn Fn(&Invocation<'_>) -> Option<Value> + Send + Sync;

/// Number of arguments a behavior consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	/// Ignores the invocation entirely.
	Nullary,
	/// Reads the accessor name and/or host from the invocation.
	Unary,
}

/// How to compute a default value.
///
/// Every behavior can be invoked with or without a name; nullary behaviors
/// simply never look at it. Cloning shares the underlying callable, so
/// [`Behavior::ptr_eq`] identifies behaviors that came from the same
/// registration.
#[derive(Clone)]
pub struct Behavior {
	f: Arc<BehaviorFn>,
	arity: Arity,
}

impl Behavior {
	/// Creates a behavior that receives the full [`Invocation`].
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&Invocation<'_>) -> Option<Value> + Send + Sync + 'static,
	{
		let f: Arc<BehaviorFn> = Arc::new(f);
		Self { f, arity: Arity::Unary }
	}

	/// Creates a behavior that takes no arguments.
	pub fn nullary<F>(f: F) -> Self
	where
		F: Fn() -> Option<Value> + Send + Sync + 'static,
	{
		let f: Arc<BehaviorFn> = Arc::new(move |_: &Invocation<'_>| f());
		Self {
			f,
			arity: Arity::Nullary,
		}
	}

	/// The "no default" behavior: always yields absence.
	pub fn absent() -> Self {
		Self::nullary(|| None)
	}

	pub fn arity(&self) -> Arity {
		self.arity
	}

	pub fn call(&self, cx: &Invocation<'_>) -> Option<Value> {
		(self.f)(cx)
	}

	/// Invokes with the accessor name and no host.
	pub fn call_named(&self, name: &str) -> Option<Value> {
		self.call(&Invocation::new(name))
	}

	/// Invokes with no arguments at all.
	pub fn call_bare(&self) -> Option<Value> {
		self.call(&Invocation::bare())
	}

	pub fn ptr_eq(&self, other: &Behavior) -> bool {
		Arc::ptr_eq(&self.f, &other.f)
	}
}

impl fmt::Debug for Behavior {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Behavior")
			.field("arity", &self.arity)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absent_yields_nothing_with_or_without_name() {
		let behavior = Behavior::absent();
		assert_eq!(behavior.arity(), Arity::Nullary);
		assert!(behavior.call_bare().is_none());
		assert!(behavior.call_named("widget").is_none());
	}

	#[test]
	fn unary_sees_the_name() {
		let echo = Behavior::new(|cx| cx.name().map(Value::from));
		assert_eq!(echo.arity(), Arity::Unary);
		assert_eq!(echo.call_named("foo").as_ref().and_then(Value::as_str), Some("foo"));
		assert!(echo.call_bare().is_none());
	}

	#[test]
	fn clones_share_identity() {
		let a = Behavior::nullary(|| Some(Value::from("x")));
		let b = a.clone();
		let c = Behavior::nullary(|| Some(Value::from("x")));
		assert!(a.ptr_eq(&b));
		assert!(!a.ptr_eq(&c));
	}
}
