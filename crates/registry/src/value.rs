//! Type-erased values produced by behaviors.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased value returned by a [`Behavior`](crate::Behavior).
///
/// Absence is modeled outside of this type as `Option<Value>`.
#[derive(Clone)]
pub struct Value(Arc<dyn Any + Send + Sync>);

impl Value {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self(Arc::new(value))
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}

	/// Returns the string contents if this value holds a `String`.
	pub fn as_str(&self) -> Option<&str> {
		self.downcast_ref::<String>().map(String::as_str)
	}

	pub fn ptr_eq(&self, other: &Value) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::new(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::new(v.to_string())
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_str() {
			Some(s) => f.debug_tuple("Value").field(&s).finish(),
			None => f.write_str("Value(..)"),
		}
	}
}
