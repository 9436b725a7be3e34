//! Per-instance storage for computed accessor results.

use assume_registry::Value;
use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

/// Results of assumed accessors for one host instance, keyed by accessor name.
///
/// Absence is memoized like any other result. The lock is only held to read
/// or store a slot, never while a behavior runs, so a behavior may call other
/// accessors on the same host. Two threads racing on the first access of the
/// same accessor may both compute; the first stored result is kept and
/// returned to both.
#[derive(Default)]
pub struct Memo {
	slots: Mutex<HashMap<Box<str>, Option<Value>>>,
}

impl Memo {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the stored result, `None` if the accessor has not run yet.
	pub fn get(&self, name: &str) -> Option<Option<Value>> {
		self.slots.lock().get(name).cloned()
	}

	/// Stores `value` unless a result is already present, returning the kept result.
	pub fn store(&self, name: &str, value: Option<Value>) -> Option<Value> {
		self.slots.lock().entry(name.into()).or_insert(value).clone()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.slots.lock().contains_key(name)
	}

	/// Drops the stored result so the next access recomputes it.
	pub fn forget(&self, name: &str) -> bool {
		self.slots.lock().remove(name).is_some()
	}

	pub fn clear(&self) {
		self.slots.lock().clear();
	}

	pub fn len(&self) -> usize {
		self.slots.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.lock().is_empty()
	}
}

impl std::fmt::Debug for Memo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let slots = self.slots.lock();
		let mut names: Vec<&str> = slots.keys().map(|k| &**k).collect();
		names.sort_unstable();
		f.debug_struct("Memo").field("slots", &names).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_store_wins() {
		let memo = Memo::new();
		assert!(memo.get("widget").is_none());

		let kept = memo.store("widget", Some(Value::from("first")));
		assert_eq!(kept.as_ref().and_then(Value::as_str), Some("first"));

		let kept = memo.store("widget", Some(Value::from("second")));
		assert_eq!(kept.as_ref().and_then(Value::as_str), Some("first"));
	}

	#[test]
	fn absence_is_memoized() {
		let memo = Memo::new();
		memo.store("missing", None);

		assert!(memo.contains("missing"));
		assert!(matches!(memo.get("missing"), Some(None)));
	}

	#[test]
	fn forget_and_clear() {
		let memo = Memo::new();
		memo.store("a", None);
		memo.store("b", Some(Value::from("b")));

		assert!(memo.forget("a"));
		assert!(!memo.forget("a"));
		assert_eq!(memo.len(), 1);

		memo.clear();
		assert!(memo.is_empty());
	}
}
