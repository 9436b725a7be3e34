//! Class identities and their inheritance chain.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Handle to a class in a single-inheritance forest.
///
/// Identity is the class name: two handles with the same name are the same
/// class as far as the registry is concerned. Handles are cheap to clone and
/// keep their whole ancestor chain alive.
///
/// ```ignore
/// static WIDGET: LazyLock<Class> = LazyLock::new(|| Class::root("Widget"));
/// let sub = WIDGET.extend("Sub");
/// assert_eq!(sub.superclass(), Some(&*WIDGET));
/// ```
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

struct ClassInner {
	name: Box<str>,
	superclass: Option<Class>,
}

impl Class {
	/// Creates a class with no superclass.
	pub fn root(name: impl Into<Box<str>>) -> Self {
		Self(Arc::new(ClassInner {
			name: name.into(),
			superclass: None,
		}))
	}

	/// Creates a direct subclass of `self`.
	pub fn extend(&self, name: impl Into<Box<str>>) -> Self {
		Self(Arc::new(ClassInner {
			name: name.into(),
			superclass: Some(self.clone()),
		}))
	}

	pub fn name(&self) -> &str {
		&self.0.name
	}

	/// Immediate superclass, `None` at the root.
	pub fn superclass(&self) -> Option<&Class> {
		self.0.superclass.as_ref()
	}

	/// Iterates the chain starting at `self`, one superclass at a time.
	pub fn ancestors(&self) -> Ancestors<'_> {
		Ancestors { next: Some(self) }
	}
}

/// Iterator over a class and its superclasses. See [`Class::ancestors`].
pub struct Ancestors<'a> {
	next: Option<&'a Class>,
}

impl<'a> Iterator for Ancestors<'a> {
	type Item = &'a Class;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.superclass();
		Some(current)
	}
}

impl PartialEq for Class {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
	}
}

impl Eq for Class {}

impl Hash for Class {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.name.hash(state);
	}
}

impl fmt::Debug for Class {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut list = f.debug_list();
		for class in self.ancestors() {
			list.entry(&class.name());
		}
		list.finish()
	}
}

impl fmt::Display for Class {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
